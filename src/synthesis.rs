use rand::seq::SliceRandom;
use rand::Rng;

use crate::equivalence::are_equivalent_considering_boxing;
use crate::model::{Operation, Type};
use crate::pool::SequencePool;
use crate::sequence::{Sequence, Statement};

#[derive(Debug, PartialEq, Eq)]
pub enum SynthesisFailure {
    /// The pool holds fewer distinct candidate sequences for this input
    /// type than the operation has slots demanding one.
    NotEnoughDistinctValues { ty_name: &'static str, needed: usize, available: usize },
}

/// Groups `op`'s input slots by boxing-equivalence class (in order of
/// first appearance), draws one distinct candidate sequence per slot in
/// each class from the pool, then flattens the chosen sub-sequences
/// into a single buffer and appends `op` itself as the terminal
/// statement. Two slots that need the same type are always filled by
/// two different statements when the pool has enough of them: the
/// random part is *which* distinct statements get drawn, not whether a
/// statement gets reused across slots once drawn.
pub fn synthesize(op: &Operation, pool: &dyn SequencePool, rng: &mut impl Rng) -> Result<Sequence, SynthesisFailure> {
    let mut groups: Vec<(Type, Vec<usize>)> = Vec::new();
    for (slot, &ty) in op.input_types.iter().enumerate() {
        match groups.iter_mut().find(|(rep, _)| are_equivalent_considering_boxing(*rep, ty)) {
            Some((_, slots)) => slots.push(slot),
            None => groups.push((ty, vec![slot])),
        }
    }

    let mut slot_assignment: Vec<(usize, std::rc::Rc<Sequence>)> = Vec::with_capacity(op.input_types.len());

    for (rep_ty, slots) in &groups {
        let exact = rep_ty.is_primitive();
        let candidates = pool.query(*rep_ty, exact, false);
        if candidates.len() < slots.len() {
            return Err(SynthesisFailure::NotEnoughDistinctValues {
                ty_name: rep_ty.name(),
                needed: slots.len(),
                available: candidates.len(),
            });
        }

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.shuffle(rng);
        order.truncate(slots.len());
        order.sort_unstable();

        for (&slot, &candidate_idx) in slots.iter().zip(order.iter()) {
            slot_assignment.push((slot, candidates[candidate_idx].clone()));
        }
    }
    slot_assignment.sort_by_key(|(slot, _)| *slot);
    let assignment: Vec<std::rc::Rc<Sequence>> = slot_assignment.into_iter().map(|(_, seq)| seq).collect();

    let mut buffer: Vec<Statement> = Vec::new();
    let mut resolved_refs = Vec::with_capacity(op.input_types.len());
    for sub in &assignment {
        let base = buffer.len();
        for statement in &sub.statements {
            let shifted_refs = statement.input_refs.iter().map(|&r| r + base).collect();
            buffer.push(Statement { operation: statement.operation.clone(), input_refs: shifted_refs });
        }
        resolved_refs.push(base + sub.size() - 1);
    }

    buffer.push(Statement { operation: op.clone(), input_refs: resolved_refs });
    Ok(Sequence::new(buffer))
}
