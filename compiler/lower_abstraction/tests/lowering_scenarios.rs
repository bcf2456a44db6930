//! End-to-end scenarios of a lowering pass pairing original and substituted
//! types through abstraction patterns.

use pretty_assertions::assert_eq;

use lower_abstraction::{
    classify_leaves, init_tracing, AbstractionPattern, Placeholder, Position, Shape,
};
use lower_types::{SharedTypeInterner, TypeId, TypeInterner};

#[test]
fn generic_input_and_concrete_pair_result() {
    init_tracing();
    let types = TypeInterner::new();

    // orig: (T) -> (int, int)
    let t = types.archetype("T");
    let orig = types.function(t, types.tuple([TypeId::INT, TypeId::INT]));
    let pattern = AbstractionPattern::new(orig);

    assert!(!pattern.is_opaque(&types));
    assert!(pattern.function_input_type(&types).is_opaque(&types));

    let result = pattern.function_result_type(&types);
    let subst_pair = types.tuple([TypeId::INT, TypeId::INT]);
    assert!(result.matches_tuple(&types, subst_pair));
    assert_eq!(result.tuple_element_type(&types, 0).orig_type(), TypeId::INT);
    assert_eq!(result.tuple_element_type(&types, 1).orig_type(), TypeId::INT);
}

#[test]
fn placeholder_result_stays_the_same_placeholder() {
    let types = TypeInterner::new();
    let t = types.archetype("T");
    let pattern = AbstractionPattern::new(t);

    let result = pattern.function_result_type(&types);

    assert_eq!(result, pattern);
    assert_eq!(result.orig_type(), t);
}

#[test]
#[should_panic(expected = "lvalue_object_type requires an inout binding or opaque abstraction pattern")]
fn lvalue_of_concrete_tuple_is_rejected() {
    let types = TypeInterner::new();
    let pattern = AbstractionPattern::new(types.tuple([TypeId::INT, TypeId::BOOL]));

    let _ = pattern.lvalue_object_type(&types);
}

#[test]
fn generic_map_signature_lowers_positionally() {
    init_tracing();
    let types = TypeInterner::new();

    // func map<T, U>(_ xs: inout Array<T>, _ f: (T) -> U) -> Array<U>
    let t = types.generic_param(0, 0);
    let u = types.generic_param(0, 1);
    let array_t = types.nominal("Array", [t]);
    let array_u = types.nominal("Array", [u]);
    let transform = types.function(t, u);
    let orig = types.function(types.tuple([types.inout(array_t), transform]), array_u);

    // T := int, U := (str, bool)
    let pair = types.tuple([TypeId::STR, TypeId::BOOL]);
    let array_int = types.nominal("Array", [TypeId::INT]);
    let array_pair = types.nominal("Array", [pair]);
    let subst = types.function(
        types.tuple([types.inout(array_int), types.function(TypeId::INT, pair)]),
        array_pair,
    );

    let leaves = classify_leaves(&types, AbstractionPattern::new(orig), subst);

    assert_eq!(
        leaves,
        vec![
            (array_int, Position::Concrete),
            (TypeId::INT, Position::Opaque),
            (TypeId::STR, Position::Opaque),
            (TypeId::BOOL, Position::Opaque),
            (array_pair, Position::Concrete),
        ]
    );
}

#[test]
fn dependent_member_is_opaque() {
    let types = TypeInterner::new();
    let t = types.generic_param(0, 0);
    let element = types.dependent_member(t, "Element");

    // orig: (T.Element, int)   subst: ((int, int), int)
    let orig = types.tuple([element, TypeId::INT]);
    let subst = types.tuple([types.tuple([TypeId::INT, TypeId::INT]), TypeId::INT]);

    let pattern = AbstractionPattern::new(orig);
    let member = pattern.tuple_element_type(&types, 0);
    types.with_data(member.orig_type(), |data| {
        assert_eq!(Shape::of(data), Shape::Opaque(Placeholder::Dependent));
    });

    assert_eq!(
        classify_leaves(&types, pattern, subst),
        vec![
            (TypeId::INT, Position::Opaque),
            (TypeId::INT, Position::Opaque),
            (TypeId::INT, Position::Concrete),
        ]
    );
}

#[test]
fn class_bound_archetype_is_opaque() {
    let types = TypeInterner::new();
    let c = types.class_archetype("C");

    let pattern = AbstractionPattern::new(c);

    assert!(pattern.is_opaque(&types));
    assert!(pattern.matches_tuple(&types, types.tuple([TypeId::INT, TypeId::INT])));
    assert_eq!(pattern.lvalue_object_type(&types), pattern);
}

#[test]
fn patterns_are_shared_across_threads() {
    let types = SharedTypeInterner::new();
    let t = types.archetype("T");
    let pattern = AbstractionPattern::new(types.function(t, types.tuple([t, TypeId::INT])));

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let types = types.clone();
                scope.spawn(move || {
                    let result = pattern.function_result_type(&types);
                    result.tuple_element_type(&types, 0).is_opaque(&types)
                        && !result.tuple_element_type(&types, 1).is_opaque(&types)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| panic!("lowering thread panicked")))
            .collect()
    });

    assert!(results.into_iter().all(|ok| ok));
}
