use std::collections::HashMap;

use crate::error::DdicError;

use super::operation::{Operation, OperationKind};
use super::type_desc::Type;

/// The host's pre-registered reflection contract: every [`Type`] it knows
/// about, and every [`Operation`] reachable on each one. DDIC never
/// inspects live objects; a `ClassModel` is the whole of what it is
/// allowed to know about the system under test.
#[derive(Default)]
pub struct ClassModel {
    types_by_name: HashMap<&'static str, Type>,
    operations: HashMap<Type, Vec<Operation>>,
}

impl ClassModel {
    pub fn new() -> ClassModel {
        ClassModel::default()
    }

    pub fn register_type(&mut self, ty: Type) {
        self.types_by_name.entry(ty.name()).or_insert(ty);
        self.operations.entry(ty).or_default();
    }

    pub fn register_operation(&mut self, op: Operation) {
        self.register_type(op.declaring_type);
        self.operations.entry(op.declaring_type).or_default().push(op);
    }

    pub fn resolve(&self, name: &str) -> Result<Type, DdicError> {
        self.types_by_name
            .get(name)
            .copied()
            .ok_or_else(|| DdicError::Configuration { name: name.to_string() })
    }

    pub fn is_known(&self, ty: Type) -> bool {
        self.types_by_name.contains_key(ty.name())
    }

    pub fn constructors_of(&self, ty: Type) -> impl Iterator<Item = &Operation> {
        self.operations
            .get(&ty)
            .into_iter()
            .flatten()
            .filter(|op| op.kind == OperationKind::Constructor && op.declaring_type == ty)
    }

    /// Every non-constructor operation declared on `ty`: instance
    /// methods, static factories, and host-supplied literals.
    pub fn methods_of(&self, ty: Type) -> impl Iterator<Item = &Operation> {
        self.operations
            .get(&ty)
            .into_iter()
            .flatten()
            .filter(|op| op.kind != OperationKind::Constructor && op.declaring_type == ty)
    }
}
