use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::type_desc::Type;

/// A dynamically-typed runtime value flowing between statements of a
/// sequence. Unlike the host language's reflection API we have no live
/// object model to lean on, so a `Value` pairs a [`Type`] tag with an
/// `Any`-erased payload the host's operations know how to downcast.
#[derive(Clone)]
pub enum Value {
    Null,
    Data(Type, Rc<dyn Any>),
}

impl Value {
    pub fn new<T: 'static>(ty: Type, data: T) -> Value {
        Value::Data(ty, Rc::new(data))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn ty(&self, null_type: Type) -> Type {
        match self {
            Value::Null => null_type,
            Value::Data(ty, _) => *ty,
        }
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Null => None,
            Value::Data(_, data) => data.downcast_ref::<T>(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Data(ty, _) => write!(f, "<{:?} value>", ty),
        }
    }
}
