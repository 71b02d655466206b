use crate::model::{PrimitiveKind, Type, TypeKind};

/// Boxing-equivalence: the narrow relation synthesis uses when deciding
/// whether an already-produced value can fill a slot. `int` and
/// `java.lang.Integer` are equivalent under this relation even though
/// neither is assignable to the other by [`Type::is_assignable_from`].
pub fn are_equivalent_considering_boxing(a: Type, b: Type) -> bool {
    if a == b {
        return true;
    }
    match (a.0.kind, b.0.kind) {
        (TypeKind::Primitive(p), TypeKind::Boxed(q)) | (TypeKind::Boxed(p), TypeKind::Primitive(q)) => p == q,
        _ => false,
    }
}

pub fn boxed_counterpart_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Bool => "java.lang.Boolean",
        PrimitiveKind::Char => "java.lang.Character",
        PrimitiveKind::I8 => "java.lang.Byte",
        PrimitiveKind::I16 => "java.lang.Short",
        PrimitiveKind::I32 => "java.lang.Integer",
        PrimitiveKind::I64 => "java.lang.Long",
        PrimitiveKind::F32 => "java.lang.Float",
        PrimitiveKind::F64 => "java.lang.Double",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_and_boxed_pair_are_equivalent() {
        let int_ty = Type::intern("int", TypeKind::Primitive(PrimitiveKind::I32), vec![], false);
        let boxed_ty = Type::intern("java.lang.Integer", TypeKind::Boxed(PrimitiveKind::I32), vec![], false);
        assert!(are_equivalent_considering_boxing(int_ty, boxed_ty));
        assert!(are_equivalent_considering_boxing(boxed_ty, int_ty));
    }

    #[test]
    fn mismatched_primitive_kinds_are_not_equivalent() {
        let int_ty = Type::intern("int", TypeKind::Primitive(PrimitiveKind::I32), vec![], false);
        let long_box = Type::intern("java.lang.Long", TypeKind::Boxed(PrimitiveKind::I64), vec![], false);
        assert!(!are_equivalent_considering_boxing(int_ty, long_box));
    }

    #[test]
    fn unrelated_types_are_not_equivalent() {
        let int_ty = Type::intern("int", TypeKind::Primitive(PrimitiveKind::I32), vec![], false);
        let str_ty = Type::intern("java.lang.String", TypeKind::Str, vec![], false);
        assert!(!are_equivalent_considering_boxing(int_ty, str_ty));
    }
}
