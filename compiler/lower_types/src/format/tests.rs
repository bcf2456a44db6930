use pretty_assertions::assert_eq;

use crate::{TypeId, TypeInterner};

#[test]
fn primitives() {
    let interner = TypeInterner::new();

    assert_eq!(interner.format_type(TypeId::INT), "int");
    assert_eq!(interner.format_type(TypeId::FLOAT), "float");
    assert_eq!(interner.format_type(TypeId::BOOL), "bool");
    assert_eq!(interner.format_type(TypeId::STR), "str");
    assert_eq!(interner.format_type(TypeId::UNIT), "()");
}

#[test]
fn none_sentinel() {
    let interner = TypeInterner::new();
    assert_eq!(interner.format_type(TypeId::NONE), "<none>");
}

#[test]
fn tuples() {
    let interner = TypeInterner::new();

    let pair = interner.tuple([TypeId::INT, TypeId::BOOL]);
    assert_eq!(interner.format_type(pair), "(int, bool)");

    let single = interner.tuple([TypeId::STR]);
    assert_eq!(interner.format_type(single), "(str,)");
}

#[test]
fn functions() {
    let interner = TypeInterner::new();

    let unary = interner.function(TypeId::INT, TypeId::BOOL);
    assert_eq!(interner.format_type(unary), "(int) -> bool");

    let args = interner.tuple([TypeId::INT, TypeId::STR]);
    let binary = interner.function(args, TypeId::UNIT);
    assert_eq!(interner.format_type(binary), "(int, str) -> ()");

    let curried = interner.function(TypeId::INT, unary);
    assert_eq!(interner.format_type(curried), "(int) -> (int) -> bool");
}

#[test]
fn inout_and_metatype() {
    let interner = TypeInterner::new();

    let lvalue = interner.inout(TypeId::INT);
    assert_eq!(interner.format_type(lvalue), "inout int");

    let meta = interner.metatype(TypeId::STR);
    assert_eq!(interner.format_type(meta), "str.Type");
}

#[test]
fn nominals() {
    let interner = TypeInterner::new();

    let plain = interner.nominal("Point", []);
    assert_eq!(interner.format_type(plain), "Point");

    let dict = interner.nominal("Dictionary", [TypeId::STR, plain]);
    assert_eq!(interner.format_type(dict), "Dictionary<str, Point>");
}

#[test]
fn placeholders() {
    let interner = TypeInterner::new();

    assert_eq!(interner.format_type(interner.archetype("T")), "T");
    assert_eq!(interner.format_type(interner.class_archetype("C")), "C");

    let param = interner.generic_param(1, 2);
    assert_eq!(interner.format_type(param), "τ_1_2");

    let member = interner.dependent_member(param, "Element");
    assert_eq!(interner.format_type(member), "τ_1_2.Element");
}

#[test]
fn deep_nesting_does_not_overflow() {
    let interner = TypeInterner::new();

    let mut ty = TypeId::INT;
    for _ in 0..10_000 {
        ty = interner.tuple([ty]);
    }

    let text = interner.format_type(ty);
    assert!(text.starts_with("(((("));
    assert!(text.contains("int"));
}
