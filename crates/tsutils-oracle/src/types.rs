//! Type handles and classification data.
//!
//! A `TypeId` is an opaque reference to a type resolved by the host checker.
//! The predicates never look inside a handle; they only hand it back to the
//! oracle and branch on the classification the oracle reports.

use smallvec::SmallVec;

/// Constituent / base-type list as returned by oracle queries.
///
/// Unions and base-type lists are short in practice, so small lists stay
/// inline on the stack.
pub type TypeList = SmallVec<[TypeId; 4]>;

// =============================================================================
// TypeId - Opaque Type Handle
// =============================================================================

/// Opaque handle to a resolved type at a source location.
///
/// Handles are minted by the oracle and are only meaningful to the oracle
/// that produced them. They are immutable for the duration of a query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Sentinel value for an invalid handle.
    pub const INVALID: Self = Self(0);

    /// The dynamic `any` type.
    pub const ANY: Self = Self(1);

    /// The `unknown` type.
    pub const UNKNOWN: Self = Self(2);

    /// The `string` primitive type.
    pub const STRING: Self = Self(3);

    /// The `number` primitive type.
    pub const NUMBER: Self = Self(4);

    /// The `boolean` primitive type.
    pub const BOOLEAN: Self = Self(5);

    /// First handle available for declared (non-intrinsic) types.
    pub const FIRST_DECLARED: u32 = 16;

    /// Check if this handle is valid.
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

// =============================================================================
// TypeFlags - Checker Classification Flags
// =============================================================================

bitflags::bitflags! {
    /// Classification flags reported by the host checker for a type handle.
    ///
    /// These mirror the host engine's own flag words; the predicates read
    /// them but never compute them.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct TypeFlags: u32 {
        /// The dynamic `any` type.
        const ANY = 1 << 0;
        /// Built-in primitive with no declaration of its own.
        const INTRINSIC = 1 << 1;
        /// Union type (`A | B`).
        const UNION = 1 << 2;
        /// Intersection type (`A & B`).
        const INTERSECTION = 1 << 3;
        /// The polymorphic `this` type.
        const THIS = 1 << 4;
        /// Reference to a declared type (`A<T>`-style instantiation site).
        const REFERENCE = 1 << 5;
        /// Type with call signatures.
        const CALLABLE = 1 << 6;
    }
}

impl TypeFlags {
    /// True when the handle is a union or an intersection.
    pub const fn is_compound(self) -> bool {
        self.intersects(Self::UNION.union(Self::INTERSECTION))
    }
}

// =============================================================================
// TypeKind - Closed Classification Variant
// =============================================================================

/// Three-way classification the matcher branches on.
///
/// Compound kinds carry their constituent handles so a caller classifies
/// once and traverses without a second oracle round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    /// One named declaration or an intrinsic.
    Simple,
    /// Logical OR of constituents.
    Union(TypeList),
    /// Logical AND of constituents.
    Intersection(TypeList),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_handle_is_not_valid() {
        assert!(!TypeId::INVALID.is_valid());
        assert!(TypeId::ANY.is_valid());
        assert!(TypeId(TypeId::FIRST_DECLARED).is_valid());
    }

    #[test]
    fn compound_flag_test_covers_both_kinds() {
        assert!(TypeFlags::UNION.is_compound());
        assert!(TypeFlags::INTERSECTION.is_compound());
        assert!(!(TypeFlags::ANY | TypeFlags::CALLABLE).is_compound());
    }
}
