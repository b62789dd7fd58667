// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Key/value map with runtime-typed keys and values.

use std::cmp::Ordering;

use crate::container::Container;
use crate::equality::EqualsMap;
use crate::kind::{common_kind, total_order, TypeKind};
use crate::value::DynamicValue;

/// Map from keys of one kind to values of another. Keys are unique; entries
/// keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct DynamicMap {
    key_type: TypeKind,
    value_type: TypeKind,
    entries: Vec<(DynamicValue, DynamicValue)>,
}

impl DynamicMap {
    pub fn new(key_type: TypeKind, value_type: TypeKind) -> Self {
        Self {
            key_type,
            value_type,
            entries: Vec::new(),
        }
    }

    /// Map whose key and value kinds are fixed by the first insertion.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn key_type(&self) -> TypeKind {
        self.key_type
    }

    pub fn value_type(&self) -> TypeKind {
        self.value_type
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace an entry. Returns false if the key or value was
    /// rejected by coercion; the map is then unchanged.
    pub fn insert(&mut self, key: impl Into<DynamicValue>, value: impl Into<DynamicValue>) -> bool {
        let (key, value) = (key.into(), value.into());
        let key_type = fixed_or_classified(self.key_type, &key);
        let value_type = fixed_or_classified(self.value_type, &value);

        let coerced = key_type
            .coerce(key)
            .and_then(|k| value_type.coerce(value).map(|v| (k, v)));
        let (key, value) = match coerced {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("[DYNMAP] rejected entry: {}", err);
                return false;
            }
        };
        self.key_type = key_type;
        self.value_type = value_type;

        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
        true
    }

    pub fn get(&self, key: &DynamicValue) -> Option<&DynamicValue> {
        let needle = self.key_type.coerce(key.clone()).ok()?;
        self.position(&needle).map(|i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &DynamicValue) -> bool {
        self.get(key).is_some()
    }

    /// Remove an entry, returning its value.
    pub fn remove(&mut self, key: &DynamicValue) -> Option<DynamicValue> {
        let needle = self.key_type.coerce(key.clone()).ok()?;
        let index = self.position(&needle)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DynamicValue, &DynamicValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Maps compare by size first, then by entries sorted on key.
    pub fn compare_map(&self, other: &DynamicMap) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        if self.equals_map(other) {
            return Some(Ordering::Equal);
        }
        let key_kind = common_kind(self.key_type, other.key_type);
        let value_kind = common_kind(self.value_type, other.value_type);
        let (a, b) = (self.sorted(), other.sorted());
        for ((ak, av), (bk, bv)) in a.iter().zip(&b) {
            match key_kind.compare(ak, bk)? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
            match value_kind.compare(av, bv)? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        None
    }

    fn position(&self, needle: &DynamicValue) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| self.key_type.compare(k, needle) == Some(Ordering::Equal))
    }

    fn sorted(&self) -> Vec<&(DynamicValue, DynamicValue)> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| total_order(a, b));
        sorted
    }
}

fn fixed_or_classified(kind: TypeKind, value: &DynamicValue) -> TypeKind {
    if kind.is_empty_type() {
        TypeKind::classify(value)
    } else {
        kind
    }
}

impl EqualsMap for DynamicMap {
    fn equals_map(&self, other: &DynamicMap) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(k, v)| {
                other
                    .get(k)
                    .is_some_and(|ov| self.value_type.compare(v, ov) == Some(Ordering::Equal))
            })
    }
}

impl Container for DynamicMap {
    fn len(&self) -> usize {
        DynamicMap::len(self)
    }

    /// Key membership.
    fn contains(&self, value: &DynamicValue) -> bool {
        self.contains_key(value)
    }

    fn compare_to(&self, other: &DynamicValue) -> Option<Ordering> {
        self.compare_map(other.as_map()?)
    }
}

impl PartialEq for DynamicMap {
    fn eq(&self, other: &Self) -> bool {
        self.equals_map(other)
    }
}
