use std::fmt;
use std::hash::{Hash, Hasher};

use crate::galloc::AllocForAny;

/// The eight primitive/boxed pairs the JVM keeps distinct and DDIC's
/// boxing-equivalence has to see through.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Primitive(PrimitiveKind),
    Boxed(PrimitiveKind),
    Str,
    Null,
    /// An ordinary receiver type: a class or interface reachable through
    /// constructors and methods.
    Class,
    Array(Type),
}

pub struct TypeData {
    pub name: &'static str,
    pub kind: TypeKind,
    pub supertypes: Vec<Type>,
    pub abstract_type: bool,
}

/// An interned, `'static` type descriptor. Two `Type`s compare equal when
/// their descriptor names match, regardless of where each was interned;
/// [`crate::model::ClassModel`] is responsible for handing out one
/// descriptor per name so pointer identity and name identity coincide in
/// practice.
#[derive(Clone, Copy)]
pub struct Type(pub &'static TypeData);

impl Type {
    pub fn intern(name: &str, kind: TypeKind, supertypes: Vec<Type>, abstract_type: bool) -> Type {
        Type(
            TypeData {
                name: name.galloc_str(),
                kind,
                supertypes,
                abstract_type,
            }
            .galloc(),
        )
    }

    pub fn name(&self) -> &'static str {
        self.0.name
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.0.kind, TypeKind::Primitive(_))
    }

    pub fn is_boxed(&self) -> bool {
        matches!(self.0.kind, TypeKind::Boxed(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.0.kind, TypeKind::Array(_))
    }

    pub fn is_abstract(&self) -> bool {
        self.0.abstract_type
    }

    pub fn element_type(&self) -> Option<Type> {
        match self.0.kind {
            TypeKind::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Primitives, strings and null are never a receiver for a producer
    /// search: they carry no constructors or methods of their own.
    pub fn is_nonreceiver_type(&self) -> bool {
        matches!(self.0.kind, TypeKind::Primitive(_) | TypeKind::Str | TypeKind::Null)
    }

    /// Widening, nominal-subtyping check: is a value of `other` usable
    /// wherever `self` is expected?
    pub fn is_assignable_from(&self, other: Type) -> bool {
        if self.name() == other.name() {
            return true;
        }
        if matches!(other.0.kind, TypeKind::Null) && !self.is_primitive() {
            return true;
        }
        if let (TypeKind::Array(target_elem), TypeKind::Array(source_elem)) = (self.0.kind, other.0.kind) {
            if !target_elem.is_primitive() {
                return target_elem.is_assignable_from(source_elem);
            }
            return target_elem.name() == source_elem.name();
        }
        other.0.supertypes.iter().any(|&sup| self.is_assignable_from(sup))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}
impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
