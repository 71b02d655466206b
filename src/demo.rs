//! A small, self-contained class model used by the `ddic` binary and by
//! the end-to-end tests. None of this is part of the library's public
//! contract; it exists to give `construct` something concrete to chew
//! on without needing a real host language bridge.

use crate::galloc::AllocForStr;
use crate::model::{CallOutcome, ClassModel, Operation, OperationKind, PrimitiveKind, Type, TypeKind, Value};

pub struct Demo {
    pub model: ClassModel,
    pub int_ty: Type,
    pub integer_box_ty: Type,
    pub string_ty: Type,
    pub point_ty: Type,
    pub point_factory_ty: Type,
    pub shape_ty: Type,
    pub circle_ty: Type,
    pub null_factory_ty: Type,
}

/// Builds a model with:
/// - `int`/`java.lang.Integer`, a boxing-equivalent pair with no
///   producers of their own (the caller seeds literals into the pool).
/// - `demo.Point(int, int)`, a two-argument constructor.
/// - `demo.PointFactory`, a zero-argument constructor plus two ways to
///   get a `Point` out of one: a static `origin()` that needs nothing
///   but a specified `PointFactory` seed, and an instance `make(int)`
///   that needs an already-built receiver from the pool -- the latter
///   only succeeds across two separate `construct` calls, the way the
///   design's own "partial progress across calls" story works.
/// - `demo.Shape`, an abstract type with a constructor that must never
///   be offered as a producer, and `demo.Circle`, a concrete subtype
///   reachable only once specified.
/// - `demo.NullFactory`, whose `make` always returns null, exercising
///   salvage's non-null requirement.
pub fn build() -> Demo {
    let mut model = ClassModel::new();

    let object_ty = Type::intern("java.lang.Object", TypeKind::Class, vec![], false);
    let int_ty = Type::intern("int", TypeKind::Primitive(PrimitiveKind::I32), vec![], false);
    let integer_box_ty = Type::intern("java.lang.Integer", TypeKind::Boxed(PrimitiveKind::I32), vec![object_ty], false);
    let string_ty = Type::intern("java.lang.String", TypeKind::Str, vec![object_ty], false);

    let point_ty = Type::intern("demo.Point", TypeKind::Class, vec![object_ty], false);
    model.register_operation(Operation::new(
        "demo.Point::<init>",
        OperationKind::Constructor,
        point_ty,
        vec![int_ty, int_ty],
        point_ty,
        move |args| {
            let x = *args[0].downcast_ref::<i32>().unwrap();
            let y = *args[1].downcast_ref::<i32>().unwrap();
            CallOutcome::Normal(Value::new(point_ty, (x, y)))
        },
    ));

    let point_factory_ty = Type::intern("demo.PointFactory", TypeKind::Class, vec![object_ty], false);
    model.register_operation(Operation::new(
        "demo.PointFactory::<init>",
        OperationKind::Constructor,
        point_factory_ty,
        vec![],
        point_factory_ty,
        move |_| CallOutcome::Normal(Value::new(point_factory_ty, ())),
    ));
    model.register_operation(Operation::new(
        "demo.PointFactory::make",
        OperationKind::InstanceMethod,
        point_factory_ty,
        vec![point_factory_ty, int_ty],
        point_ty,
        move |args| {
            let x = *args[1].downcast_ref::<i32>().unwrap();
            CallOutcome::Normal(Value::new(point_ty, (x, 0)))
        },
    ));
    model.register_operation(Operation::new(
        "demo.PointFactory::origin",
        OperationKind::StaticMethod,
        point_factory_ty,
        vec![],
        point_ty,
        move |_| CallOutcome::Normal(Value::new(point_ty, (0, 0))),
    ));

    let shape_ty = Type::intern("demo.Shape", TypeKind::Class, vec![object_ty], true);
    model.register_operation(Operation::new(
        "demo.Shape::<init>",
        OperationKind::Constructor,
        shape_ty,
        vec![],
        shape_ty,
        move |_| CallOutcome::Normal(Value::new(shape_ty, ())),
    ));
    let circle_ty = Type::intern("demo.Circle", TypeKind::Class, vec![shape_ty], false);
    model.register_operation(Operation::new(
        "demo.Circle::<init>",
        OperationKind::Constructor,
        circle_ty,
        vec![int_ty],
        circle_ty,
        move |args| {
            let radius = *args[0].downcast_ref::<i32>().unwrap();
            CallOutcome::Normal(Value::new(circle_ty, radius))
        },
    ));

    let null_factory_ty = Type::intern("demo.NullFactory", TypeKind::Class, vec![object_ty], false);
    model.register_operation(Operation::new(
        "demo.NullFactory::<init>",
        OperationKind::Constructor,
        null_factory_ty,
        vec![],
        null_factory_ty,
        move |_| CallOutcome::Normal(Value::new(null_factory_ty, ())),
    ));
    model.register_operation(Operation::new(
        "demo.NullFactory::make",
        OperationKind::InstanceMethod,
        null_factory_ty,
        vec![null_factory_ty],
        point_ty,
        move |_| CallOutcome::Normal(Value::Null),
    ));

    model.register_type(int_ty);
    model.register_type(integer_box_ty);
    model.register_type(string_ty);

    Demo {
        model,
        int_ty,
        integer_box_ty,
        string_ty,
        point_ty,
        point_factory_ty,
        shape_ty,
        circle_ty,
        null_factory_ty,
    }
}

/// Registers a host-supplied int literal as a zero-argument producer,
/// the way a real host seeds a pool with its example values before the
/// first `construct` call.
pub fn seed_int_literal(pool: &dyn crate::pool::SequencePool, int_ty: Type, value: i32) {
    let name: &'static str = format!("int literal {value}").galloc_str();
    let op = Operation::new(name, OperationKind::NonreceiverInit, int_ty, vec![], int_ty, move |_| {
        CallOutcome::Normal(Value::new(int_ty, value))
    });
    pool.add(std::rc::Rc::new(crate::sequence::Sequence::new(vec![crate::sequence::Statement {
        operation: op,
        input_refs: vec![],
    }])));
}
