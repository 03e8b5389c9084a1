//! The type matcher.
//!
//! Depth-first traversal over checker-produced type handles:
//!
//! - unions match when **any** constituent matches
//! - intersections also match when **any** constituent matches: a value of
//!   `A & B` satisfies every member, so matching one facet is sufficient
//! - simple types match on their declared name, or transitively through
//!   their base-type chain
//!
//! Matching is purely nominal; no shapes are compared. Without a qualifier,
//! any same-named declaration counts (deliberately permissive). With one,
//! the candidate's declaration origin must also satisfy the qualifier's
//! pattern, so a name collision across modules cannot produce a false
//! positive.

use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::trace;
use tsutils_oracle::{OracleError, TypeId, TypeKind, TypeOracle, classify};

/// Disambiguates identically named types declared in different modules.
///
/// The pattern is tested against the textual declaration-origin identifier
/// reported by the oracle: the declaring module's specifier in its quoted
/// source form, e.g. `"./a"`.
#[derive(Clone, Debug)]
pub struct TypeQualifier {
    name: Regex,
}

impl TypeQualifier {
    pub fn new(name: Regex) -> Self {
        Self { name }
    }

    /// Convenience constructor from a pattern string.
    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(pattern)?,
        })
    }

    fn permits(&self, origin: &str) -> bool {
        self.name.is_match(origin)
    }
}

/// Could `ty`, or any constituent of it, be the type named `name`?
///
/// True when the type (or a union/intersection constituent, or anything in
/// a base-type chain) is nominally equal to or derived from the target.
/// With a `qualifier`, same-named candidates must additionally originate
/// from a module matching the qualifier's pattern; a rejected candidate
/// falls through to its base-type search rather than failing the query.
///
/// Oracle-side resolution failures propagate unchanged; the matcher itself
/// never fails. Base-type graphs are acyclic in well-formed programs, but a
/// visited set guards the walk against oracles that do not enforce that.
pub fn could_be_type(
    oracle: &dyn TypeOracle,
    ty: TypeId,
    name: &str,
    qualifier: Option<&TypeQualifier>,
) -> Result<bool, OracleError> {
    let mut visited = FxHashSet::default();
    could_be_type_walk(oracle, ty, name, qualifier, &mut visited)
}

fn could_be_type_walk(
    oracle: &dyn TypeOracle,
    ty: TypeId,
    name: &str,
    qualifier: Option<&TypeQualifier>,
    visited: &mut FxHashSet<TypeId>,
) -> Result<bool, OracleError> {
    if !visited.insert(ty) {
        return Ok(false);
    }

    match classify(oracle, ty) {
        TypeKind::Union(members) => {
            trace!(?ty, count = members.len(), "descending into union");
            any_member_matches(oracle, &members, name, qualifier, visited)
        }
        TypeKind::Intersection(members) => {
            trace!(?ty, count = members.len(), "descending into intersection");
            any_member_matches(oracle, &members, name, qualifier, visited)
        }
        TypeKind::Simple => {
            if let Some(declared) = oracle.declared_name_of(ty) {
                if declared.as_ref() == name {
                    match qualifier {
                        None => return Ok(true),
                        Some(qualifier) => {
                            let origin = oracle.origin_identifier_of(ty)?;
                            if qualifier.permits(&origin) {
                                return Ok(true);
                            }
                            // Same name, wrong module: not a match, but the
                            // base chain may still contain the real target.
                            trace!(%declared, %origin, "qualifier rejected candidate");
                        }
                    }
                }
            }
            any_member_matches(oracle, &oracle.base_types_of(ty), name, qualifier, visited)
        }
    }
}

fn any_member_matches(
    oracle: &dyn TypeOracle,
    members: &[TypeId],
    name: &str,
    qualifier: Option<&TypeQualifier>,
    visited: &mut FxHashSet<TypeId>,
) -> Result<bool, OracleError> {
    for &member in members {
        if could_be_type_walk(oracle, member, name, qualifier, visited)? {
            return Ok(true);
        }
    }
    Ok(false)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[path = "../tests/matcher_tests.rs"]
mod tests;
