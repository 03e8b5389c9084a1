//! One-line classification predicates.
//!
//! Direct forwardings to the oracle's flags. These carry no logic of their
//! own; they exist so lint rules depend on one surface for all type
//! questions.

use tsutils_oracle::{OracleError, TypeFlags, TypeId, TypeOracle};

use crate::matcher::could_be_type;

/// Is this the dynamic `any` type?
pub fn is_any(oracle: &dyn TypeOracle, ty: TypeId) -> bool {
    oracle.flags_of(ty).contains(TypeFlags::ANY)
}

/// Is this a union type?
pub fn is_union_type(oracle: &dyn TypeOracle, ty: TypeId) -> bool {
    oracle.flags_of(ty).contains(TypeFlags::UNION)
}

/// Is this an intersection type?
pub fn is_intersection_type(oracle: &dyn TypeOracle, ty: TypeId) -> bool {
    oracle.flags_of(ty).contains(TypeFlags::INTERSECTION)
}

/// Is this the polymorphic `this` type?
pub fn is_this(oracle: &dyn TypeOracle, ty: TypeId) -> bool {
    oracle.flags_of(ty).contains(TypeFlags::THIS)
}

/// Is this an instantiation-site reference to a declared type?
pub fn is_reference_type(oracle: &dyn TypeOracle, ty: TypeId) -> bool {
    oracle.flags_of(ty).contains(TypeFlags::REFERENCE)
}

/// Could this type be callable? True for types with call signatures and for
/// anything nominally matching the global `Function` type.
pub fn could_be_function(oracle: &dyn TypeOracle, ty: TypeId) -> Result<bool, OracleError> {
    if oracle.has_call_signatures(ty) {
        return Ok(true);
    }
    could_be_type(oracle, ty, "Function", None)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[path = "../tests/predicate_tests.rs"]
mod tests;
