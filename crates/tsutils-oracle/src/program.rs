//! In-memory program oracle for test harnesses.
//!
//! Lint-rule tests need checker-shaped type data without running a host
//! checker. `ProgramOracle` plays the role the in-memory snippet compiler
//! plays in the original tooling: a harness registers declarations and
//! compound types by hand, then feeds the resulting handles to the
//! predicates.
//!
//! Storage is concurrent (`DashMap` + atomic handle allocation), so an
//! oracle can be shared across test threads without locking on the read
//! path.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::oracle::{OracleError, TypeOracle};
use crate::types::{TypeFlags, TypeId, TypeList};

/// Origin identifier used for declarations registered without an explicit
/// module, mirroring a harness's synthetic main module.
const DEFAULT_ORIGIN: &str = "\"source\"";

/// One registered type.
#[derive(Clone, Debug)]
struct TypeDecl {
    name: Option<Arc<str>>,
    flags: TypeFlags,
    /// Quoted module specifier of the declaring file, when known.
    origin: Option<Arc<str>>,
    bases: TypeList,
    members: TypeList,
}

impl TypeDecl {
    fn anonymous(flags: TypeFlags) -> Self {
        Self {
            name: None,
            flags,
            origin: None,
            bases: SmallVec::new(),
            members: SmallVec::new(),
        }
    }
}

/// Concurrent in-memory `TypeOracle` implementation.
///
/// Handles below `TypeId::FIRST_DECLARED` are pre-seeded intrinsics;
/// everything else is allocated sequentially as declarations are
/// registered.
pub struct ProgramOracle {
    decls: DashMap<TypeId, TypeDecl>,
    next_id: AtomicU32,
}

impl ProgramOracle {
    pub fn new() -> Self {
        let oracle = Self {
            decls: DashMap::new(),
            next_id: AtomicU32::new(TypeId::FIRST_DECLARED),
        };
        oracle.seed_intrinsic(TypeId::ANY, TypeFlags::ANY | TypeFlags::INTRINSIC);
        oracle.seed_intrinsic(TypeId::UNKNOWN, TypeFlags::INTRINSIC);
        oracle.seed_intrinsic(TypeId::STRING, TypeFlags::INTRINSIC);
        oracle.seed_intrinsic(TypeId::NUMBER, TypeFlags::INTRINSIC);
        oracle.seed_intrinsic(TypeId::BOOLEAN, TypeFlags::INTRINSIC);
        oracle
    }

    fn seed_intrinsic(&self, id: TypeId, flags: TypeFlags) {
        self.decls.insert(id, TypeDecl::anonymous(flags));
    }

    fn register(&self, decl: TypeDecl) -> TypeId {
        let id = TypeId(self.next_id.fetch_add(1, Ordering::Relaxed));
        trace!(?id, name = ?decl.name, flags = ?decl.flags, "registered type");
        self.decls.insert(id, decl);
        id
    }

    // =========================================================================
    // Registration API
    // =========================================================================

    /// Declare a class in the harness's main module.
    pub fn declare_class(&self, name: &str, bases: &[TypeId]) -> TypeId {
        self.declare_class_in(name, DEFAULT_ORIGIN, bases)
    }

    /// Declare a class in a specific module. `origin` is the module
    /// specifier in its quoted source form (e.g. `"./a"`).
    pub fn declare_class_in(&self, name: &str, origin: &str, bases: &[TypeId]) -> TypeId {
        self.register(TypeDecl {
            name: Some(Arc::from(name)),
            flags: TypeFlags::empty(),
            origin: Some(Arc::from(origin)),
            bases: TypeList::from_slice(bases),
            members: SmallVec::new(),
        })
    }

    /// Declare an interface in the harness's main module.
    pub fn declare_interface(&self, name: &str, bases: &[TypeId]) -> TypeId {
        self.declare_class_in(name, DEFAULT_ORIGIN, bases)
    }

    /// Declare a named type whose originating declaration cannot be
    /// resolved. Origin queries against it fail, as they would for a
    /// malformed program.
    pub fn declare_unresolved(&self, name: &str) -> TypeId {
        self.register(TypeDecl {
            name: Some(Arc::from(name)),
            flags: TypeFlags::empty(),
            origin: None,
            bases: SmallVec::new(),
            members: SmallVec::new(),
        })
    }

    /// Declare a named type carrying call signatures.
    pub fn declare_function_type(&self, name: &str) -> TypeId {
        self.register(TypeDecl {
            name: Some(Arc::from(name)),
            flags: TypeFlags::CALLABLE,
            origin: Some(Arc::from(DEFAULT_ORIGIN)),
            bases: SmallVec::new(),
            members: SmallVec::new(),
        })
    }

    /// Build a union of the given constituents.
    pub fn union_of(&self, members: &[TypeId]) -> TypeId {
        let mut decl = TypeDecl::anonymous(TypeFlags::UNION);
        decl.members = TypeList::from_slice(members);
        self.register(decl)
    }

    /// Build an intersection of the given constituents.
    pub fn intersection_of(&self, members: &[TypeId]) -> TypeId {
        let mut decl = TypeDecl::anonymous(TypeFlags::INTERSECTION);
        decl.members = TypeList::from_slice(members);
        self.register(decl)
    }

    /// The polymorphic `this` type.
    pub fn this_type(&self) -> TypeId {
        self.register(TypeDecl::anonymous(TypeFlags::THIS))
    }

    /// An instantiation-site reference to a declared type. The reference is
    /// anonymous; name matching reaches the target through the base walk.
    pub fn reference_to(&self, target: TypeId) -> TypeId {
        let mut decl = TypeDecl::anonymous(TypeFlags::REFERENCE);
        decl.bases.push(target);
        self.register(decl)
    }

    /// Append a base type after registration. Harnesses use this to wire up
    /// hierarchies a host checker would reject, such as inheritance cycles.
    pub fn add_base(&self, ty: TypeId, base: TypeId) {
        if let Some(mut decl) = self.decls.get_mut(&ty) {
            decl.bases.push(base);
        }
    }
}

impl Default for ProgramOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeOracle for ProgramOracle {
    fn flags_of(&self, ty: TypeId) -> TypeFlags {
        self.decls
            .get(&ty)
            .map(|decl| decl.flags)
            .unwrap_or_default()
    }

    fn constituents_of(&self, ty: TypeId) -> TypeList {
        self.decls
            .get(&ty)
            .map(|decl| decl.members.clone())
            .unwrap_or_default()
    }

    fn declared_name_of(&self, ty: TypeId) -> Option<Arc<str>> {
        self.decls.get(&ty).and_then(|decl| decl.name.clone())
    }

    fn base_types_of(&self, ty: TypeId) -> TypeList {
        self.decls
            .get(&ty)
            .map(|decl| decl.bases.clone())
            .unwrap_or_default()
    }

    fn origin_identifier_of(&self, ty: TypeId) -> Result<Arc<str>, OracleError> {
        let decl = self.decls.get(&ty).ok_or(OracleError::UnknownType(ty))?;
        match &decl.origin {
            Some(origin) => Ok(origin.clone()),
            None => Err(OracleError::UnresolvedDeclaration {
                name: decl.name.clone().unwrap_or_else(|| Arc::from("<anonymous>")),
            }),
        }
    }

    fn has_call_signatures(&self, ty: TypeId) -> bool {
        self.flags_of(ty).contains(TypeFlags::CALLABLE)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[path = "../tests/program_tests.rs"]
mod tests;
