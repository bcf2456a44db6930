use super::*;

#[test]
fn primitive_indices_are_fixed() {
    assert_eq!(TypeId::INT.raw(), 0);
    assert_eq!(TypeId::FLOAT.raw(), 1);
    assert_eq!(TypeId::BOOL.raw(), 2);
    assert_eq!(TypeId::STR.raw(), 3);
    assert_eq!(TypeId::UNIT.raw(), 4);
}

#[test]
fn primitive_check_works() {
    assert!(TypeId::INT.is_primitive());
    assert!(TypeId::UNIT.is_primitive());
    assert!(!TypeId::from_shard_local(0, TypeId::PRIMITIVE_COUNT).is_primitive());
    assert!(!TypeId::from_shard_local(3, 0).is_primitive());
}

#[test]
fn shard_local_roundtrip() {
    let id = TypeId::from_shard_local(7, 1234);
    assert_eq!(id.shard(), 7);
    assert_eq!(id.local(), 1234);
    assert_eq!(TypeId::from_raw(id.raw()), id);
    assert_eq!(TypeId::from_raw(u32::MAX), TypeId::NONE);
}

#[test]
fn none_sentinel_is_distinct() {
    assert!(TypeId::NONE.is_none());
    assert!(!TypeId::INT.is_none());
    // Highest handable id in the last shard stays below the sentinel.
    let last = TypeId::from_shard_local(15, TypeId::MAX_LOCAL - 1);
    assert!(!last.is_none());
}

#[test]
fn debug_names_primitives() {
    assert_eq!(format!("{:?}", TypeId::INT), "TypeId::INT");
    assert_eq!(format!("{:?}", TypeId::NONE), "TypeId::NONE");
    assert_eq!(format!("{:?}", TypeId::from_shard_local(2, 9)), "TypeId(2:9)");
}

#[test]
fn hash_dedups() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(TypeId::INT);
    set.insert(TypeId::INT);
    set.insert(TypeId::BOOL);
    assert_eq!(set.len(), 2);
}
