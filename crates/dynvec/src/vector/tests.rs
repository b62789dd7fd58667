// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Unit tests for DynamicVector.

use super::*;
use crate::container::{DynamicMap, DynamicSet, DynamicStruct};
use crate::value::OpaqueValue;

fn strings(values: &[&str]) -> DynamicVector {
    let mut v = DynamicVector::empty();
    for s in values {
        assert!(v.push(*s));
    }
    v
}

fn ints(values: &[i32]) -> DynamicVector {
    let mut v = DynamicVector::new(TypeKind::I32, 0);
    for i in values {
        assert!(v.push(*i));
    }
    v
}

fn as_strs(v: &DynamicVector) -> Vec<&str> {
    v.iter().filter_map(DynamicValue::as_str).collect()
}

#[test]
fn test_push_fixes_element_type() {
    let v = strings(&["a", "b", "c"]);
    assert_eq!(v.element_type(), TypeKind::String);
    assert_eq!(v.len(), 3);
    assert_eq!(v.at(0).as_str(), Some("a"));
    assert_eq!(v.last().and_then(DynamicValue::as_str), Some("c"));
    assert_eq!(v.index_of(&"b".into()), Some(1));
}

#[test]
fn test_delete_shifts_tail() {
    let mut v = strings(&["a", "b", "c"]);
    assert_eq!(v.delete(1).as_str(), Some("b"));
    assert_eq!(as_strs(&v), ["a", "c"]);
    assert_eq!(v.len(), 2);
}

#[test]
fn test_insert_shifts_tail() {
    let mut v = strings(&["a", "c"]);
    assert!(v.insert(1, "x"));
    assert_eq!(as_strs(&v), ["a", "x", "c"]);
    assert_eq!(v.len(), 3);

    assert!(v.insert(3, "end"));
    assert!(v.insert(0, "start"));
    assert_eq!(as_strs(&v), ["start", "a", "x", "c", "end"]);
}

#[test]
fn test_insert_coerces_like_push() {
    let mut v = ints(&[1, 3]);
    assert!(v.insert(1, DynamicValue::I64(2)));
    assert_eq!(v.at(1), &DynamicValue::I32(2));

    assert!(!v.insert(0, "two"));
    assert_eq!(v.len(), 3);
}

#[test]
fn test_insert_into_untyped_fixes_type() {
    let mut v = DynamicVector::empty();
    assert!(v.insert(0, 1.5f64));
    assert_eq!(v.element_type(), TypeKind::Double);
}

#[test]
fn test_integer_equality() {
    assert!(ints(&[1, 2, 3]).equals(&ints(&[1, 2, 3]).into()));
    assert!(!ints(&[1, 2, 3]).equals(&ints(&[3, 2, 1]).into()));
    assert_eq!(ints(&[1, 2, 3]), ints(&[1, 2, 3]));
    assert!(ints(&[1, 2, 3]) != ints(&[3, 2, 1]));
}

#[test]
fn test_compare_to() {
    let a = ints(&[1, 2, 3]);
    assert_eq!(a.compare_to(&ints(&[3, 2, 1]).into()), Some(Ordering::Less));
    assert_eq!(a.compare_to(&ints(&[1, 2]).into()), Some(Ordering::Greater));
    assert_eq!(a.compare_to(&DynamicValue::I32(1)), None);
    assert_eq!(a.compare_to(&strings(&["a"]).into()), None);
    assert!(a < ints(&[1, 2, 4]));
}

#[test]
fn test_equality_across_integer_widths() {
    let mut wide = DynamicVector::new(TypeKind::I64, 0);
    wide.push(1i64);
    wide.push(2i64);
    assert!(ints(&[1, 2]).equals(&wide.into()));
}

#[test]
fn test_rejected_values_leave_vector_unchanged() {
    let mut v = ints(&[1, 2]);
    assert!(!v.push("three"));
    assert!(!v.push(i64::MAX));
    assert!(!v.set(0, 2.5f64));
    assert!(!v.push(DynamicValue::Null));
    assert_eq!(v, ints(&[1, 2]));

    let err = v.try_push("three").unwrap_err();
    assert!(matches!(
        err,
        Error::Coerce(CoerceError {
            target: TypeKind::I32,
            found: TypeKind::String
        })
    ));
    assert!(matches!(
        v.try_set(9, 1i32),
        Err(Error::IndexOutOfRange { index: 9, len: 2 })
    ));
}

#[test]
fn test_null_never_fixes_type() {
    let mut v = DynamicVector::empty();
    assert!(!v.push(DynamicValue::Null));
    assert!(v.element_type().is_empty_type());
    assert!(v.is_empty());
}

#[test]
fn test_presized_vector() {
    let mut v = DynamicVector::new(TypeKind::String, 3);
    assert_eq!(v.len(), 3);
    assert!(v.iter().all(DynamicValue::is_null));
    assert_eq!(v.index_of(&DynamicValue::Null), Some(0));

    assert!(v.set(1, "mid"));
    assert_eq!(v.at(1).as_str(), Some("mid"));
    assert_eq!(v.index_of(&"mid".into()), Some(1));
    assert_eq!(v.index_of(&DynamicValue::Null), Some(0));
}

#[test]
fn test_pop_swap_last() {
    let mut v = strings(&["a", "b", "c"]);
    v.swap(0, 2);
    assert_eq!(as_strs(&v), ["c", "b", "a"]);
    assert_eq!(v.pop().as_str(), Some("a"));
    assert_eq!(v.len(), 2);

    v.clear();
    assert!(v.last().is_none());
    assert!(v.try_pop().is_none());
    assert_eq!(v.element_type(), TypeKind::String);
}

#[test]
#[should_panic(expected = "Index out of range")]
fn test_at_out_of_range_panics() {
    let v = strings(&["a"]);
    let _ = v.at(1);
}

#[test]
#[should_panic(expected = "Pop from empty vector")]
fn test_pop_empty_panics() {
    DynamicVector::empty().pop();
}

#[test]
#[should_panic(expected = "Index out of range")]
fn test_swap_out_of_range_panics() {
    strings(&["a", "b"]).swap(0, 2);
}

#[test]
#[should_panic(expected = "Index out of range")]
fn test_insert_past_end_panics() {
    strings(&["a"]).insert(2, "b");
}

#[test]
#[should_panic(expected = "Index out of range")]
fn test_delete_out_of_range_panics() {
    strings(&["a"]).delete(1);
}

#[test]
fn test_less_and_sort() {
    let mut v = ints(&[3, 1, 2]);
    assert!(v.less(1, 0));
    assert!(!v.less(0, 2));
    v.sort();
    assert_eq!(v, ints(&[1, 2, 3]));
}

fn doubles_with_nan(len: usize) -> DynamicVector {
    let mut v = DynamicVector::new(TypeKind::Double, 0);
    for i in 0..len {
        let x = if i % 4 == 0 { f64::NAN } else { ((i * 37) % 23) as f64 };
        assert!(v.push(x));
    }
    v
}

#[test]
fn test_less_is_false_for_nan() {
    let mut v = DynamicVector::new(TypeKind::Double, 0);
    v.push(f64::NAN);
    v.push(1.0f64);
    assert!(!v.less(0, 1));
    assert!(!v.less(1, 0));
    assert!(!v.less(0, 0));
}

#[test]
fn test_sort_with_nan() {
    let mut v = doubles_with_nan(40);
    v.sort();
    assert_eq!(v.len(), 40);

    let values: Vec<f64> = v.iter().filter_map(DynamicValue::as_f64).collect();
    let first_nan = values.iter().position(|x| x.is_nan()).expect("nan kept");
    assert_eq!(first_nan, 30);
    assert!(values[first_nan..].iter().all(|x| x.is_nan()));
    assert!(values[..first_nan].windows(2).all(|w| w[0] <= w[1]));

    // Sorting again is stable.
    let before: Vec<u64> = values.iter().map(|x| x.to_bits()).collect();
    v.sort();
    let after: Vec<u64> = v.iter().filter_map(DynamicValue::as_f64).map(f64::to_bits).collect();
    assert_eq!(before, after);
}

#[test]
fn test_nan_lists_are_not_comparable() {
    let a = doubles_with_nan(40);
    assert_eq!(a.compare_to(&a.clone().into()), None);
    assert!(!a.equals(&a.clone().into()));

    let mut outer = DynamicVector::new(TypeKind::List, 0);
    outer.push(a.clone());
    outer.push(doubles_with_nan(8));
    assert!(!outer.contains(&a.into()));
    outer.sort();
    assert_eq!(outer.len(), 2);
}

#[test]
fn test_contains_sets_of_nan() {
    let nan_set = |seed: u64, shift: i32| -> DynamicSet {
        let mut values: Vec<DynamicValue> = (0..30).map(|i| f64::from(i + shift).into()).collect();
        values.extend((0..10).map(|_| DynamicValue::Double(f64::NAN)));
        fastrand::Rng::with_seed(seed).shuffle(&mut values);
        values.into_iter().collect()
    };
    let a = nan_set(1, 0);
    let b = nan_set(2, 0);
    assert_eq!(a.len(), 40);
    assert_eq!(a.compare_set(&b), None);
    assert_eq!(a.compare_set(&nan_set(3, 1)), Some(Ordering::Less));

    let mut v = DynamicVector::new(TypeKind::Set, 0);
    v.push(a);
    v.push(nan_set(4, 1));
    assert!(!v.contains(&b.into()));
    v.sort();
    assert_eq!(v.len(), 2);
}

#[test]
fn test_contains_maps_with_nan_keys() {
    let nan_map = |reverse: bool, bump: i32| -> DynamicMap {
        let mut keys: Vec<usize> = (0..40).collect();
        if reverse {
            keys.reverse();
        }
        let mut map = DynamicMap::empty();
        for i in keys {
            let key = if i % 4 == 0 { f64::NAN } else { i as f64 };
            assert!(map.insert(key, i as i32 + bump));
        }
        map
    };
    let a = nan_map(false, 0);
    let b = nan_map(true, 0);
    assert_eq!(a.len(), 40);
    assert_eq!(a.compare_map(&b), None);
    assert_eq!(a.compare_map(&nan_map(true, 1)), Some(Ordering::Less));

    let mut v = DynamicVector::new(TypeKind::Map, 0);
    v.push(a);
    assert!(!v.contains(&b.into()));
}

#[test]
fn test_contains_enum() {
    let mut v = DynamicVector::new(TypeKind::Enum, 0);
    v.push(DynamicValue::Enum(1));
    v.push(4i32);
    assert!(v.contains(&DynamicValue::Enum(4)));
    assert!(v.contains(&1i64.into()));
    assert!(!v.contains(&DynamicValue::Enum(2)));
    assert!(!v.contains(&"one".into()));
}

#[test]
fn test_contains_nested_lists() {
    let mut outer = DynamicVector::empty();
    outer.push(ints(&[1, 2]));
    outer.push(ints(&[3]));
    outer.push(DynamicValue::Null);
    assert_eq!(outer.element_type(), TypeKind::List);
    assert_eq!(outer.len(), 3);

    assert_eq!(outer.index_of(&ints(&[3]).into()), Some(1));
    assert_eq!(outer.index_of(&DynamicValue::Null), Some(2));
    assert!(!outer.contains(&ints(&[2, 1]).into()));
    assert!(!outer.contains(&DynamicValue::I32(3)));
}

#[test]
fn test_contains_sets() {
    let set = |values: &[i32]| -> DynamicSet { values.iter().map(|v| DynamicValue::from(*v)).collect() };
    let mut v = DynamicVector::new(TypeKind::Set, 0);
    v.push(set(&[1, 2, 3]));
    v.push(set(&[4]));

    assert_eq!(v.index_of(&set(&[3, 1, 2]).into()), Some(0));
    // A list argument coerces to a set.
    assert_eq!(v.index_of(&ints(&[4, 4]).into()), Some(1));
    assert!(!v.contains(&set(&[1, 2]).into()));
}

#[test]
fn test_contains_maps() {
    let mut a = DynamicMap::empty();
    a.insert("k", 1i32);
    let mut b = DynamicMap::empty();
    b.insert("k", 2i32);

    let mut v = DynamicVector::empty();
    v.push(DynamicValue::Null);
    v.push(a.clone());
    v.push(b.clone());
    assert_eq!(v.element_type(), TypeKind::Map);
    assert_eq!(v.len(), 2);

    assert_eq!(v.index_of(&b.into()), Some(1));
    let mut c = DynamicMap::empty();
    c.insert("k", 3i32);
    assert!(!v.contains(&c.into()));
}

#[test]
fn test_contains_structs() {
    let point = |x: i32, y: i32| DynamicStruct::new("Point").with_field("x", x).with_field("y", y);
    let mut v = DynamicVector::new(TypeKind::Struct, 1);
    v.push(point(1, 2));
    v.push(point(3, 4));

    assert_eq!(v.index_of(&point(3, 4).into()), Some(2));
    assert!(!v.contains(&point(4, 3).into()));
}

#[derive(Debug)]
struct GeneratedPoint {
    x: i32,
    y: i32,
}

impl EqualsOther for GeneratedPoint {
    fn equals_other(&self, other: &DynamicValue) -> bool {
        match other {
            DynamicValue::Struct(s) => {
                s.name() == "Point"
                    && s.field("x") == Some(&DynamicValue::I32(self.x))
                    && s.field("y") == Some(&DynamicValue::I32(self.y))
            }
            _ => false,
        }
    }
}

impl OpaqueValue for GeneratedPoint {
    fn type_kind(&self) -> TypeKind {
        TypeKind::Struct
    }
}

#[test]
fn test_contains_uses_generic_equality() {
    let mut v = DynamicVector::new(TypeKind::Struct, 0);
    v.push(DynamicStruct::new("Point").with_field("x", 1i32).with_field("y", 2i32));
    v.push(DynamicStruct::new("Point").with_field("x", 5i32).with_field("y", 6i32));

    let needle = DynamicValue::opaque(GeneratedPoint { x: 5, y: 6 });
    assert_eq!(v.index_of(&needle), Some(1));
    assert!(!v.contains(&DynamicValue::opaque(GeneratedPoint { x: 6, y: 5 })));

    // Opaque values of another kind never coerce.
    let ints_only = ints(&[5]);
    assert!(!ints_only.contains(&needle));
}

#[test]
fn test_opaque_equality_without_ordering() {
    let mut generated = DynamicVector::new(TypeKind::Struct, 0);
    generated.push(DynamicValue::opaque(GeneratedPoint { x: 1, y: 2 }));
    let mut plain = DynamicVector::new(TypeKind::Struct, 0);
    plain.push(DynamicStruct::new("Point").with_field("x", 1i32).with_field("y", 2i32));

    assert!(generated.equals(&plain.clone().into()));
    assert!(plain.equals(&generated.clone().into()));
    assert_eq!(generated.compare_to(&plain.into()), Some(Ordering::Equal));
}

/// Opaque value equal to opaque values with the same debug form.
#[derive(Debug)]
struct Tag(i32);

impl EqualsOther for Tag {
    fn equals_other(&self, other: &DynamicValue) -> bool {
        match other {
            DynamicValue::Opaque(o) => format!("{o:?}") == format!("{self:?}"),
            _ => false,
        }
    }
}

impl OpaqueValue for Tag {
    fn type_kind(&self) -> TypeKind {
        TypeKind::Struct
    }
}

#[test]
fn test_opaque_vector_equals_its_clone() {
    let mut v = DynamicVector::new(TypeKind::Struct, 0);
    for i in 0..3 {
        assert!(v.push(DynamicValue::opaque(Tag(i))));
    }
    assert!(v.contains(&DynamicValue::opaque(Tag(1))));
    assert!(v.equals(&v.clone().into()));
    assert_eq!(v, v.clone());

    let mut other = v.clone();
    assert!(other.set(2, DynamicValue::opaque(Tag(9))));
    assert!(!v.equals(&other.clone().into()));
    assert_ne!(v, other);

    // Opaque values tie under sort, so the order is kept.
    other.sort();
    assert_eq!(other.at(2), &DynamicValue::opaque(Tag(9)));
}

#[test]
fn test_iter_yields_storage_order() {
    let v = strings(&["a", "b", "c"]);
    let iter = v.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.rev().filter_map(DynamicValue::as_str).collect::<Vec<_>>(), ["c", "b", "a"]);
    assert_eq!((&v).into_iter().count(), 3);
    assert_eq!(v.clone().into_iter().count(), 3);
}

#[test]
fn test_channel_iter_drains_in_order() {
    let v = strings(&["a", "b", "c"]);
    let drained: Vec<DynamicValue> = v.iter_channel().expect("spawn").collect();
    assert_eq!(drained, v.clone().into_vec());
}

#[test]
fn test_channel_iter_abandoned_consumer() {
    let v = ints(&[1, 2, 3, 4, 5]);
    let mut it = v.iter_channel().expect("spawn");
    assert_eq!(it.next(), Some(DynamicValue::I32(1)));
    // Drop joins the producer; a stranded producer would hang here.
    drop(it);
}

#[test]
fn test_channel_iter_snapshot() {
    let mut v = ints(&[1, 2]);
    let config = IterConfig::default().with_channel_capacity(4).with_thread_name("snapshot");
    let it = v.iter_channel_with(&config).expect("spawn");
    v.push(3i32);
    assert_eq!(it.count(), 2);
}
