use crate::model::{Operation, Type, Value};

/// One call in a sequence. `input_refs` are positional indices into the
/// sequence that produced this statement, naming earlier statements the
/// way `Expr::Var(i)` names an earlier sub-expression.
#[derive(Clone, PartialEq, Debug)]
pub struct Statement {
    pub operation: Operation,
    pub input_refs: Vec<usize>,
}

/// An ordered list of statements, each free to reference the output of
/// any earlier statement in the same sequence. The last statement's
/// return type is the sequence's terminal type.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Sequence {
    pub statements: Vec<Statement>,
}

impl Sequence {
    pub fn new(statements: Vec<Statement>) -> Sequence {
        Sequence { statements }
    }

    pub fn size(&self) -> usize {
        self.statements.len()
    }

    pub fn variable_type(&self, index: usize) -> Type {
        self.statements[index].operation.return_type
    }

    pub fn terminal_type(&self) -> Type {
        self.variable_type(self.size() - 1)
    }
}

/// What running a sequence actually observed at each step.
#[derive(Clone, Debug)]
pub enum ExecutionOutcome {
    NormalExecution(Value),
    ExceptionalExecution(String),
    Timeout,
}

/// A sequence paired with the outcome of running each of its statements
/// in order.
#[derive(Clone)]
pub struct ExecutableSequence {
    pub sequence: std::rc::Rc<Sequence>,
    pub outcomes: Vec<ExecutionOutcome>,
}

impl ExecutableSequence {
    pub fn terminal_outcome(&self) -> &ExecutionOutcome {
        self.outcomes.last().expect("an executed sequence has at least one outcome")
    }

    pub fn terminal_value(&self) -> Option<&Value> {
        match self.terminal_outcome() {
            ExecutionOutcome::NormalExecution(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CallOutcome, OperationKind, TypeKind};

    #[test]
    fn terminal_type_is_the_last_statement_return_type() {
        let int_ty = Type::intern("int", TypeKind::Primitive(crate::model::PrimitiveKind::I32), vec![], false);
        let op = Operation::new("literal", OperationKind::NonreceiverInit, int_ty, vec![], int_ty, |_| {
            CallOutcome::Normal(Value::new(int_ty, 3i32))
        });
        let seq = Sequence::new(vec![Statement { operation: op, input_refs: vec![] }]);
        assert_eq!(seq.terminal_type(), int_ty);
    }
}
