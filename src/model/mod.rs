pub mod class_model;
pub mod operation;
pub mod type_desc;
pub mod value;

pub use class_model::ClassModel;
pub use operation::{CallOutcome, Operation, OperationKind};
pub use type_desc::{PrimitiveKind, Type, TypeKind};
pub use value::Value;
