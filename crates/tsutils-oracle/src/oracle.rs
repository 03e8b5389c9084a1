//! The `TypeOracle` query interface.
//!
//! The host type-checking engine owns all type information; the predicates
//! consume it through this trait. The split keeps the matcher independent of
//! any concrete checker and testable against a mock oracle.
//!
//! Oracle implementations must support concurrent reads; the matcher itself
//! holds no shared mutable state.

use std::sync::Arc;

use crate::types::{TypeFlags, TypeId, TypeKind, TypeList};

/// Failure surfaced by an oracle while resolving type information.
///
/// The matcher never recovers from these; they propagate unchanged to the
/// caller (typically a lint rule, which decides how to report).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// A declared type whose originating declaration cannot be resolved,
    /// e.g. in a malformed program.
    #[error("cannot resolve a declaration origin for type `{name}`")]
    UnresolvedDeclaration { name: Arc<str> },

    /// A handle this oracle never minted.
    #[error("unknown type handle {0:?}")]
    UnknownType(TypeId),
}

/// Query interface supplied by the host type-checking engine.
///
/// All methods are read-only lookups against checker-produced data. The
/// oracle never re-derives classifications for the predicates and the
/// predicates never cache what the oracle returns.
pub trait TypeOracle {
    /// Classification flags for a handle. Unknown handles report no flags.
    fn flags_of(&self, ty: TypeId) -> TypeFlags;

    /// Constituents of a union or intersection, in source order.
    /// Empty for simple types.
    fn constituents_of(&self, ty: TypeId) -> TypeList;

    /// The name under which the type was declared, if it has a declaration.
    /// `None` for intrinsics and anonymous types.
    fn declared_name_of(&self, ty: TypeId) -> Option<Arc<str>>;

    /// Directly extended/implemented base types. Empty when the type has no
    /// accessible base-type information.
    fn base_types_of(&self, ty: TypeId) -> TypeList;

    /// Textual identifier of the declaring module, in its quoted source form
    /// (e.g. `"./a"`). Only consulted when a qualifier is in play.
    fn origin_identifier_of(&self, ty: TypeId) -> Result<Arc<str>, OracleError>;

    /// Whether the type carries call signatures.
    fn has_call_signatures(&self, ty: TypeId) -> bool;
}

/// Classify a handle into the closed `TypeKind` variant.
///
/// Compound kinds are resolved to their constituents here so the caller
/// pattern-matches exhaustively and traverses without further lookups.
pub fn classify(oracle: &dyn TypeOracle, ty: TypeId) -> TypeKind {
    let flags = oracle.flags_of(ty);
    if flags.contains(TypeFlags::UNION) {
        TypeKind::Union(oracle.constituents_of(ty))
    } else if flags.contains(TypeFlags::INTERSECTION) {
        TypeKind::Intersection(oracle.constituents_of(ty))
    } else {
        TypeKind::Simple
    }
}
