use std::rc::Rc;

use rand::Rng;

use crate::discovery::producers;
use crate::execution::{salvage, ExecutorBridge};
use crate::model::{ClassModel, Type};
use crate::pool::SequencePool;
use crate::sequence::Sequence;
use crate::synthesis::synthesize;
use crate::trackers::DiagnosticsContext;

/// Demand-driven construction of a value assignable to `target`.
///
/// Finds every producer reachable from `target` and the diagnostics
/// context's specified classes, attempts to synthesize and execute one
/// sequence per producer (at most `max_producers`, in discovery order),
/// salvages whichever come back with a non-null normal outcome, and
/// returns everything in the pool matching `target` afterwards --
/// including sequences already present before this call, per the pool's
/// usual semantics.
pub fn construct(
    target: Type,
    exact_type_match: bool,
    only_receivers: bool,
    max_producers: usize,
    model: &ClassModel,
    pool: &dyn SequencePool,
    executor: &dyn ExecutorBridge,
    diagnostics: &DiagnosticsContext,
    rng: &mut impl Rng,
) -> Vec<Rc<Sequence>> {
    let specified = diagnostics.specified_classes_snapshot();
    let mut candidate_ops = producers(target, model, &specified);

    if candidate_ops.is_empty() {
        warn!("no producers reachable for {:?}", target);
        diagnostics.mark_uninstantiable(target);
        return pool.query(target, exact_type_match, only_receivers);
    }

    if candidate_ops.len() > max_producers {
        debg!("truncating {} producers for {:?} to the configured limit of {}", candidate_ops.len(), target, max_producers);
        candidate_ops.truncate(max_producers);
    }

    for op in &candidate_ops {
        diagnostics.mark_touched(op.declaring_type);
        match synthesize(op, pool, rng) {
            Ok(sequence) => {
                let sequence = Rc::new(sequence);
                let executed = executor.execute(&sequence);
                if salvage(pool, &executed) {
                    debg!("salvaged a sequence terminating at {:?} via {:?}", target, op);
                } else {
                    debg!("discarded sequence via {:?}: {:?}", op, executed.terminal_outcome());
                }
            }
            Err(failure) => {
                debg!("could not synthesize arguments for {:?}: {:?}", op, failure);
            }
        }
    }

    let result = pool.query(target, exact_type_match, only_receivers);
    if result.is_empty() {
        crit!("every producer for {:?} failed to yield a usable sequence", target);
    }
    result
}
