use std::fmt;
use std::rc::Rc;

use super::type_desc::Type;
use super::value::Value;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperationKind {
    Constructor,
    InstanceMethod,
    StaticMethod,
    /// Wraps a literal already known to the host (an int constant, an
    /// empty collection, ...) so it can be slotted into the same
    /// producer machinery as a real constructor call.
    NonreceiverInit,
}

/// What running an [`Operation`] actually produced, before the executor
/// turns a caught panic into its own outcome.
pub enum CallOutcome {
    Normal(Value),
    Exceptional(String),
}

type Callable = Rc<dyn Fn(&[Value]) -> CallOutcome>;

/// The unit of the producer graph: a constructor, an instance method, a
/// static method, or a host-supplied literal. Standing in for a live
/// reflection API, `declaring_type`/`input_types`/`return_type` are the
/// contract a host registers once up front; `call` is the body that
/// contract was reflecting.
#[derive(Clone)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub declaring_type: Type,
    pub input_types: Vec<Type>,
    pub return_type: Type,
    callable: Callable,
}

impl Operation {
    pub fn new(
        name: &'static str,
        kind: OperationKind,
        declaring_type: Type,
        input_types: Vec<Type>,
        return_type: Type,
        callable: impl Fn(&[Value]) -> CallOutcome + 'static,
    ) -> Operation {
        Operation {
            name,
            kind,
            declaring_type,
            input_types,
            return_type,
            callable: Rc::new(callable),
        }
    }

    pub fn call(&self, args: &[Value]) -> CallOutcome {
        (self.callable)(args)
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind, OperationKind::StaticMethod | OperationKind::NonreceiverInit)
    }

    pub fn arity(&self) -> usize {
        self.input_types.len()
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.declaring_type == other.declaring_type
            && self.return_type == other.return_type
            && self.input_types == other.input_types
    }
}
impl Eq for Operation {}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}({:?}) -> {:?}",
            self.declaring_type.name(),
            self.name,
            self.input_types,
            self.return_type
        )
    }
}
