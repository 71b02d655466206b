use std::collections::HashSet;

use lazy_static::lazy_static;
use spin::Mutex;

use crate::model::Type;

/// The bookkeeping a construction run keeps on the side: which classes
/// the host explicitly asked to be seeded, which classes got pulled in
/// along the way without being asked for, and which classes turned out
/// to have no producers at all. None of this feeds back into
/// `construct`'s decisions; it exists so a host can explain afterwards
/// why a given type never got built.
#[derive(Default)]
pub struct DiagnosticsContext {
    pub specified_classes: Mutex<HashSet<Type>>,
    pub unspecified_classes: Mutex<HashSet<Type>>,
    pub uninstantiable_types: Mutex<HashSet<Type>>,
}

impl DiagnosticsContext {
    pub fn new() -> DiagnosticsContext {
        DiagnosticsContext::default()
    }

    pub fn specify(&self, ty: Type) {
        self.specified_classes.lock().insert(ty);
    }

    /// Records that `ty` was touched while building a sequence but was
    /// never part of the specified set.
    pub fn mark_touched(&self, ty: Type) {
        if !self.specified_classes.lock().contains(&ty) {
            self.unspecified_classes.lock().insert(ty);
        }
    }

    pub fn mark_uninstantiable(&self, ty: Type) {
        self.uninstantiable_types.lock().insert(ty);
    }

    pub fn specified_classes_snapshot(&self) -> Vec<Type> {
        self.specified_classes.lock().iter().copied().collect()
    }
}

lazy_static! {
    static ref GLOBAL: DiagnosticsContext = DiagnosticsContext::new();
}

/// The process-wide tracker a host reaches for when it hasn't wired up
/// its own [`DiagnosticsContext`]. Mirrors the single shared
/// `spin::Mutex`-guarded static the rest of this codebase uses for
/// cross-cutting, rarely-contended state.
pub fn global() -> &'static DiagnosticsContext {
    &GLOBAL
}
