//! Nominal type-matching predicates for lint rules.
//!
//! The entry point is [`could_be_type`]: given a checker-produced type
//! handle and a target type name, decide whether the type itself, any
//! constituent of a union/intersection, or anything in its base-type chain
//! is nominally that type. An optional [`TypeQualifier`] disambiguates
//! identically named types declared in different modules.
//!
//! The sibling predicates (`is_any`, `is_union_type`, ...) are one-line
//! forwardings to the oracle's classification flags, kept here so callers
//! have a single import surface.
//!
//! All predicates are stateless, on-demand queries against a
//! [`TypeOracle`](tsutils_oracle::TypeOracle); nothing is cached or
//! inferred.

pub mod matcher;
pub mod predicates;

pub use matcher::{TypeQualifier, could_be_type};
pub use predicates::{
    could_be_function, is_any, is_intersection_type, is_reference_type, is_this, is_union_type,
};
