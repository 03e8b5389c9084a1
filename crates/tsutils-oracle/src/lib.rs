//! Type oracle seam for the tsutils lint predicates.
//!
//! Lint rules reason about source-level types without re-implementing a type
//! checker. This crate defines the boundary between the two:
//!
//! - **`TypeId`**: opaque handle to a resolved type at a source location
//! - **`TypeFlags` / `TypeKind`**: checker-supplied classification of a handle
//! - **`TypeOracle`**: the query interface a host checker exposes to the
//!   predicates (classification, constituents, declared names, base types,
//!   declaration origins)
//! - **`ProgramOracle`**: a concurrent in-memory oracle for test harnesses,
//!   so predicate behavior can be exercised without a host checker
//!
//! The predicates themselves live in `tsutils-match`; everything here is
//! data supplied by the host engine, never derived by this crate.

pub mod oracle;
pub mod program;
pub mod types;

pub use oracle::{OracleError, TypeOracle, classify};
pub use program::ProgramOracle;
pub use types::{TypeFlags, TypeId, TypeKind, TypeList};
