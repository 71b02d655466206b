use rand::rngs::StdRng;
use rand::SeedableRng;

use ddic::construct::construct;
use ddic::demo;
use ddic::execution::DirectExecutorBridge;
use ddic::pool::InMemorySequenceCollection;
use ddic::trackers::DiagnosticsContext;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// Scenario A: a single-hop constructor with primitive arguments succeeds
// once the pool holds enough distinct int literals.
#[test]
fn scenario_a_direct_constructor_with_seeded_primitives() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    demo::seed_int_literal(&pool, demo.int_ty, 3);
    demo::seed_int_literal(&pool, demo.int_ty, 4);
    let diagnostics = DiagnosticsContext::new();

    let result = construct(demo.point_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].terminal_type(), demo.point_ty);
}

// Scenario B: without any seeded primitives in the pool, the only
// producer for `Point` can't be synthesized and the pool stays empty.
#[test]
fn scenario_b_missing_primitive_seeds_yield_nothing() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    let diagnostics = DiagnosticsContext::new();

    let result = construct(demo.point_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert!(result.is_empty());
}

// Scenario C: a specified factory class with a zero-argument static
// method is discovered and satisfied in a single call -- no receiver to
// synthesize, so nothing needs to have been built beforehand.
#[test]
fn scenario_c_specified_static_factory_succeeds_in_one_call() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    let diagnostics = DiagnosticsContext::new();
    diagnostics.specify(demo.point_factory_ty);

    let result = construct(demo.point_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert!(!result.is_empty());
}

// Scenario C (continued): an *instance* method factory needs a receiver
// that isn't yet in the pool, so the same call that discovers it can
// still fail to synthesize it. Only after a separate `construct` call
// builds the receiver does a later call succeed -- partial progress
// across calls is the mechanism, not a single recursive call.
#[test]
fn scenario_c_instance_method_factory_needs_a_prior_call_to_build_its_receiver() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    demo::seed_int_literal(&pool, demo.int_ty, 5);
    let diagnostics = DiagnosticsContext::new();

    // First call: nothing has named `PointFactory` yet, so it's never
    // even reached by the search (Point's own constructor doesn't take
    // one), and Point's constructor itself needs two distinct ints with
    // only one seeded. The pool gains nothing for `demo.Point`.
    let first = construct(demo.point_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert!(first.is_empty());

    // Now name the factory, and build one via its own (unrelated to
    // Point) zero-argument constructor.
    diagnostics.specify(demo.point_factory_ty);
    let factory_built = construct(demo.point_factory_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert_eq!(factory_built.len(), 1);

    // Second call: `make` can now draw its receiver from the pool.
    demo::seed_int_literal(&pool, demo.int_ty, 6);
    let second = construct(demo.point_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert!(!second.is_empty());
}

// Scenario D: an abstract type is never offered its own constructor as a
// producer, even when a concrete subtype exists in the model.
#[test]
fn scenario_d_abstract_types_are_never_instantiated_directly() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    demo::seed_int_literal(&pool, demo.int_ty, 2);
    let diagnostics = DiagnosticsContext::new();

    let result = construct(demo.shape_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert!(result.is_empty());
}

// Scenario D (continued): the concrete `Circle` subtype, built directly
// by targeting it, satisfies an assignable-but-not-exact query against
// the abstract supertype afterwards.
#[test]
fn scenario_d_concrete_subtype_satisfies_supertype_query() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    demo::seed_int_literal(&pool, demo.int_ty, 2);
    let diagnostics = DiagnosticsContext::new();

    construct(demo.circle_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    let result = construct(demo.shape_ty, false, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert!(!result.is_empty());
}

// Scenario E: a producer whose every execution yields null is never
// salvaged, no matter how many times it's attempted -- even once it's
// actually discovered and its receiver is available.
#[test]
fn scenario_e_null_results_are_never_salvaged() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    let diagnostics = DiagnosticsContext::new();
    diagnostics.specify(demo.null_factory_ty);

    let result = construct(demo.null_factory_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert_eq!(result.len(), 1);

    let points = construct(demo.point_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert!(points.is_empty());
}

// Scenario F: boxing-equivalent pool entries (an `int` literal and a
// boxed `java.lang.Integer` literal) are both valid fillers for a slot
// declared as `int`.
#[test]
fn scenario_f_boxed_and_primitive_values_interchange_in_slots() {
    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    demo::seed_int_literal(&pool, demo.int_ty, 9);

    use ddic::model::{CallOutcome, Operation, OperationKind, Value};
    let boxed_literal = Operation::new(
        "boxed literal 11",
        OperationKind::NonreceiverInit,
        demo.integer_box_ty,
        vec![],
        demo.integer_box_ty,
        move |_| CallOutcome::Normal(Value::new(demo.integer_box_ty, 11i32)),
    );
    pool.add(std::rc::Rc::new(ddic::sequence::Sequence::new(vec![ddic::sequence::Statement {
        operation: boxed_literal,
        input_refs: vec![],
    }])));

    let diagnostics = DiagnosticsContext::new();
    let result = construct(demo.point_ty, true, false, 256, &demo.model, &pool, &DirectExecutorBridge, &diagnostics, &mut rng());
    assert_eq!(result.len(), 1);
}
