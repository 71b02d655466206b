use std::collections::HashMap;
use std::rc::Rc;

use spin::Mutex;

use crate::equivalence::are_equivalent_considering_boxing;
use crate::model::Type;
use crate::sequence::Sequence;

/// The shared store of sequences already known to produce a non-null
/// value. Synthesis draws sub-sequences from here; salvage adds to it.
pub trait SequencePool {
    /// Returns sequences whose terminal type matches `ty`: exactly when
    /// `exact_type_match` is set, or by nominal assignability otherwise.
    /// Either way, a terminal type that is boxing-equivalent to `ty`
    /// (an `int` bucket against an `java.lang.Integer` query, or vice
    /// versa) also counts as a match.
    fn query(&self, ty: Type, exact_type_match: bool, only_receivers: bool) -> Vec<Rc<Sequence>>;
    fn add(&self, sequence: Rc<Sequence>);
}

/// The default, single-process pool: sequences bucketed by terminal
/// type, guarded by a spinlock so the same pool can back a
/// multi-threaded executor without pulling in an async runtime.
#[derive(Default)]
pub struct InMemorySequenceCollection {
    by_terminal_type: Mutex<HashMap<Type, Vec<Rc<Sequence>>>>,
}

impl InMemorySequenceCollection {
    pub fn new() -> InMemorySequenceCollection {
        InMemorySequenceCollection::default()
    }

    pub fn len(&self) -> usize {
        self.by_terminal_type.lock().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SequencePool for InMemorySequenceCollection {
    fn query(&self, ty: Type, exact_type_match: bool, only_receivers: bool) -> Vec<Rc<Sequence>> {
        let guard = self.by_terminal_type.lock();
        guard
            .iter()
            .filter(|(&key, _)| {
                let type_matches = if exact_type_match {
                    key == ty || are_equivalent_considering_boxing(key, ty)
                } else {
                    ty.is_assignable_from(key) || are_equivalent_considering_boxing(key, ty)
                };
                type_matches && (!only_receivers || !key.is_nonreceiver_type())
            })
            .flat_map(|(_, seqs)| seqs.iter().cloned())
            .collect()
    }

    fn add(&self, sequence: Rc<Sequence>) {
        let key = sequence.terminal_type();
        let mut guard = self.by_terminal_type.lock();
        let bucket = guard.entry(key).or_default();
        if !bucket.iter().any(|existing| **existing == *sequence) {
            bucket.push(sequence);
        }
    }
}
