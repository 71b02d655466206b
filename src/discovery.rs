use std::collections::{HashSet, VecDeque};

use crate::model::{ClassModel, Operation, Type};

/// Breadth-first search over Types, starting from the frontier `{target} ∪
/// specified`. For each dequeued, not-yet-processed receiver type `C`: a
/// constructor of `C` is a producer when `target` is assignable from `C`
/// and `C` isn't abstract; a method declared on `C` is a producer when
/// `target` is assignable from its return type, regardless of `C` itself.
/// Every enumerated operation's own input types -- constructor or method,
/// accepted as a producer or not -- get enqueued for the same treatment,
/// which is how the search reaches classes needed only as an argument
/// somewhere along the way to a producer.
///
/// This deliberately does not search the whole model for anything that
/// returns something assignable to `target`: a producer declared on a
/// class nothing else points to is only found when that class is named
/// in `specified` up front, matching a user who knows which factory
/// classes matter and tells DDIC about them.
pub fn producers(target: Type, model: &ClassModel, specified: &[Type]) -> Vec<Operation> {
    let mut frontier: VecDeque<Type> = VecDeque::new();
    let mut processed: HashSet<Type> = HashSet::new();
    let mut found: Vec<Operation> = Vec::new();

    frontier.push_back(target);
    for &seed in specified {
        frontier.push_back(seed);
    }

    while let Some(candidate) = frontier.pop_front() {
        if candidate.is_nonreceiver_type() || !processed.insert(candidate) {
            continue;
        }

        if target.is_assignable_from(candidate) && !candidate.is_abstract() {
            for ctor in model.constructors_of(candidate) {
                found.push(ctor.clone());
                enqueue_params(ctor, &mut frontier, &processed);
            }
        }

        for method in model.methods_of(candidate) {
            if target.is_assignable_from(method.return_type) {
                found.push(method.clone());
            }
            enqueue_params(method, &mut frontier, &processed);
        }
    }

    found
}

fn enqueue_params(op: &Operation, frontier: &mut VecDeque<Type>, processed: &HashSet<Type>) {
    for &param in &op.input_types {
        if !param.is_nonreceiver_type() && !processed.contains(&param) {
            frontier.push_back(param);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CallOutcome, OperationKind, TypeKind, Value};

    fn class(name: &str, supertypes: Vec<Type>) -> Type {
        Type::intern(name, TypeKind::Class, supertypes, false)
    }

    #[test]
    fn finds_direct_constructor_of_the_target() {
        let mut model = ClassModel::new();
        let point = class("demo.Point", vec![]);
        model.register_operation(Operation::new("new Point", OperationKind::Constructor, point, vec![], point, |_| {
            CallOutcome::Normal(Value::Null)
        }));
        let result = producers(point, &model, &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, OperationKind::Constructor);
    }

    #[test]
    fn skips_constructors_of_abstract_classes() {
        let mut model = ClassModel::new();
        let shape = Type::intern("demo.Shape", TypeKind::Class, vec![], true);
        model.register_operation(Operation::new("new Shape", OperationKind::Constructor, shape, vec![], shape, |_| {
            CallOutcome::Normal(Value::Null)
        }));
        assert_eq!(producers(shape, &model, &[]).len(), 0);
    }

    #[test]
    fn a_concrete_subtype_specified_up_front_still_counts_as_a_producer() {
        let mut model = ClassModel::new();
        let shape = Type::intern("demo.Shape", TypeKind::Class, vec![], true);
        let circle = class("demo.Circle", vec![shape]);
        model.register_operation(Operation::new("new Circle", OperationKind::Constructor, circle, vec![], circle, |_| {
            CallOutcome::Normal(Value::Null)
        }));
        // Circle is reachable only because it's named up front: nothing in
        // this model points to it from `shape` itself.
        let result = producers(shape, &model, &[circle]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].declaring_type, circle);
    }

    #[test]
    fn a_subtype_unreachable_and_unspecified_is_never_found() {
        let mut model = ClassModel::new();
        let shape = Type::intern("demo.Shape", TypeKind::Class, vec![], true);
        let circle = class("demo.Circle", vec![shape]);
        model.register_operation(Operation::new("new Circle", OperationKind::Constructor, circle, vec![], circle, |_| {
            CallOutcome::Normal(Value::Null)
        }));
        assert!(producers(shape, &model, &[]).is_empty());
    }

    #[test]
    fn a_factory_method_reached_via_a_constructor_parameter_is_a_producer() {
        let mut model = ClassModel::new();
        let point = class("demo.Point", vec![]);
        let factory = class("demo.PointFactory", vec![]);
        // Point's own constructor takes a PointFactory, so the BFS
        // reaches `factory` and finds its `make` method returning Point.
        // `factory`'s own constructor is *not* itself a producer of
        // Point -- it returns a PointFactory, not a Point -- so building
        // one has to come from a separate `producers(factory)` call (or
        // from the pool already holding one).
        model.register_operation(Operation::new(
            "new Point",
            OperationKind::Constructor,
            point,
            vec![factory],
            point,
            |_| CallOutcome::Normal(Value::Null),
        ));
        model.register_operation(Operation::new(
            "new PointFactory",
            OperationKind::Constructor,
            factory,
            vec![],
            factory,
            |_| CallOutcome::Normal(Value::Null),
        ));
        model.register_operation(Operation::new(
            "make",
            OperationKind::InstanceMethod,
            factory,
            vec![factory],
            point,
            |_| CallOutcome::Normal(Value::Null),
        ));
        let result = producers(point, &model, &[]);
        assert!(result.iter().any(|op| op.name == "make"));
        assert!(!result.iter().any(|op| op.name == "new PointFactory"));

        let factory_producers = producers(factory, &model, &[]);
        assert!(factory_producers.iter().any(|op| op.name == "new PointFactory"));
    }

    #[test]
    fn rejected_methods_still_enqueue_their_parameter_types() {
        let mut model = ClassModel::new();
        let a = class("demo.A", vec![]);
        let b = class("demo.B", vec![]);
        let unrelated = class("demo.Unrelated", vec![]);
        model.register_operation(Operation::new(
            "new A",
            OperationKind::Constructor,
            a,
            vec![b],
            a,
            |_| CallOutcome::Normal(Value::Null),
        ));
        // This method's return type isn't assignable to `a`, so it is not
        // itself a producer -- but its parameter (`unrelated`) should
        // still be enqueued, the way a rejected method's params still
        // widen the frontier per the search's own contract.
        model.register_operation(Operation::new(
            "bFromUnrelated",
            OperationKind::StaticMethod,
            b,
            vec![unrelated],
            b,
            |_| CallOutcome::Normal(Value::Null),
        ));
        model.register_operation(Operation::new(
            "new Unrelated",
            OperationKind::Constructor,
            unrelated,
            vec![],
            unrelated,
            |_| CallOutcome::Normal(Value::Null),
        ));
        let result = producers(a, &model, &[]);
        assert!(result.iter().any(|op| op.name == "new A"));
        assert!(!result.iter().any(|op| op.name == "new Unrelated"));
    }

    #[test]
    fn visits_each_class_only_once() {
        let mut model = ClassModel::new();
        let a = class("demo.A", vec![]);
        let b = class("demo.B", vec![]);
        model.register_operation(Operation::new("aFromB", OperationKind::StaticMethod, b, vec![b], a, |_| {
            CallOutcome::Normal(Value::Null)
        }));
        model.register_operation(Operation::new("bFromB", OperationKind::StaticMethod, b, vec![b], b, |_| {
            CallOutcome::Normal(Value::Null)
        }));
        let result = producers(a, &model, &[b]);
        assert_eq!(result.iter().filter(|op| op.name == "aFromB").count(), 1);
    }
}
