use std::rc::Rc;
use std::time::Duration;

use crate::model::{CallOutcome, Value};
use crate::pool::SequencePool;
use crate::sequence::{ExecutableSequence, ExecutionOutcome, Sequence};

/// Runs a sequence statement by statement. A real bridge would marshal
/// calls across a process boundary to the system under test; the
/// in-process default just invokes the operation's body directly,
/// catching panics the way a host JVM would catch a thrown exception.
pub trait ExecutorBridge {
    fn execute(&self, sequence: &Rc<Sequence>) -> ExecutableSequence;
}

fn timed_out(sequence: &Rc<Sequence>, _timeout: Duration) -> ExecutableSequence {
    ExecutableSequence {
        sequence: sequence.clone(),
        outcomes: vec![ExecutionOutcome::Timeout; sequence.size().max(1)],
    }
}

/// The default, in-process bridge: runs each statement with the host's
/// registered callable, stopping the sequence at the first exception or
/// panic.
pub struct DirectExecutorBridge;

impl ExecutorBridge for DirectExecutorBridge {
    fn execute(&self, sequence: &Rc<Sequence>) -> ExecutableSequence {
        let mut values: Vec<Value> = Vec::with_capacity(sequence.size());
        let mut outcomes: Vec<ExecutionOutcome> = Vec::with_capacity(sequence.size());

        for statement in &sequence.statements {
            let args: Vec<Value> = statement.input_refs.iter().map(|&i| values[i].clone()).collect();
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| statement.operation.call(&args)));
            match outcome {
                Ok(CallOutcome::Normal(value)) => {
                    outcomes.push(ExecutionOutcome::NormalExecution(value.clone()));
                    values.push(value);
                }
                Ok(CallOutcome::Exceptional(message)) => {
                    outcomes.push(ExecutionOutcome::ExceptionalExecution(message));
                    break;
                }
                Err(_panic) => {
                    outcomes.push(ExecutionOutcome::ExceptionalExecution("operation panicked".to_string()));
                    break;
                }
            }
        }

        ExecutableSequence { sequence: sequence.clone(), outcomes }
    }
}

/// Wraps another bridge and reports [`ExecutionOutcome::Timeout`] for any
/// execution that ran past `timeout`, so a host that seeds runaway
/// operations can distinguish those from genuine exceptions.
pub struct TimeoutExecutorBridge<E> {
    inner: E,
    timeout: Duration,
}

impl<E: ExecutorBridge> TimeoutExecutorBridge<E> {
    pub fn new(inner: E, timeout: Duration) -> TimeoutExecutorBridge<E> {
        TimeoutExecutorBridge { inner, timeout }
    }
}

impl<E> ExecutorBridge for TimeoutExecutorBridge<E>
where
    E: ExecutorBridge,
{
    // Sequence and Value are Rc-backed and not Send, so a true
    // preemptive timeout would need the host's bridge to manage its own
    // worker thread; this wrapper only catches sequences that already
    // finished too slowly.
    fn execute(&self, sequence: &Rc<Sequence>) -> ExecutableSequence {
        let start = std::time::Instant::now();
        let exec = self.inner.execute(sequence);
        if start.elapsed() > self.timeout {
            timed_out(sequence, self.timeout)
        } else {
            exec
        }
    }
}

/// Inserts `executed` into the pool iff its terminal outcome is a
/// non-null normal execution. Returns whether the sequence was kept.
pub fn salvage(pool: &dyn SequencePool, executed: &ExecutableSequence) -> bool {
    match executed.terminal_outcome() {
        ExecutionOutcome::NormalExecution(value) if !value.is_null() => {
            pool.add(executed.sequence.clone());
            true
        }
        _ => false,
    }
}
