// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Unordered set of unique values.

use std::cmp::Ordering;

use crate::container::Container;
use crate::equality::EqualsSet;
use crate::kind::{common_kind, compare_sequences, total_order, TypeKind};
use crate::value::DynamicValue;
use crate::vector::DynamicVector;

/// Set of values sharing one element kind. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct DynamicSet {
    element_type: TypeKind,
    elements: Vec<DynamicValue>,
}

impl DynamicSet {
    pub fn new(element_type: TypeKind) -> Self {
        Self {
            element_type,
            elements: Vec::new(),
        }
    }

    /// Set whose element kind is fixed by the first insertion.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn element_type(&self) -> TypeKind {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add a value. Returns false if it was rejected by coercion or already present.
    pub fn insert(&mut self, value: impl Into<DynamicValue>) -> bool {
        let value = value.into();
        let target = if self.element_type.is_empty_type() {
            TypeKind::classify(&value)
        } else {
            self.element_type
        };
        let value = match target.coerce(value) {
            Ok(v) => v,
            Err(err) => {
                log::debug!("[DYNSET] rejected value: {}", err);
                return false;
            }
        };
        self.element_type = target;
        if self.position(&value).is_some() {
            return false;
        }
        self.elements.push(value);
        true
    }

    pub fn contains(&self, value: &DynamicValue) -> bool {
        self.element_type
            .coerce(value.clone())
            .ok()
            .and_then(|needle| self.position(&needle))
            .is_some()
    }

    /// Remove a value. Returns true if it was present.
    pub fn remove(&mut self, value: &DynamicValue) -> bool {
        let Ok(needle) = self.element_type.coerce(value.clone()) else {
            return false;
        };
        match self.position(&needle) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DynamicValue> {
        self.elements.iter()
    }

    /// Sets compare by size first, then by their sorted elements.
    pub fn compare_set(&self, other: &DynamicSet) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        if self.equals_set(other) {
            return Some(Ordering::Equal);
        }
        let kind = common_kind(self.element_type, other.element_type);
        match compare_sequences(kind, &self.sorted(), &other.sorted())? {
            // Same size, not equal, yet no element orders them.
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }

    fn position(&self, needle: &DynamicValue) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| self.element_type.compare(e, needle) == Some(Ordering::Equal))
    }

    fn sorted(&self) -> Vec<DynamicValue> {
        let mut sorted = self.elements.clone();
        sorted.sort_by(total_order);
        sorted
    }
}

impl EqualsSet for DynamicSet {
    fn equals_set(&self, other: &DynamicSet) -> bool {
        self.len() == other.len() && self.elements.iter().all(|e| other.contains(e))
    }
}

impl Container for DynamicSet {
    fn len(&self) -> usize {
        DynamicSet::len(self)
    }

    fn contains(&self, value: &DynamicValue) -> bool {
        DynamicSet::contains(self, value)
    }

    fn compare_to(&self, other: &DynamicValue) -> Option<Ordering> {
        self.compare_set(other.as_set()?)
    }
}

impl PartialEq for DynamicSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals_set(other)
    }
}

impl From<DynamicVector> for DynamicSet {
    fn from(list: DynamicVector) -> Self {
        let mut set = DynamicSet::new(list.element_type());
        for element in list {
            if set.position(&element).is_none() {
                set.elements.push(element);
            }
        }
        set
    }
}

impl FromIterator<DynamicValue> for DynamicSet {
    fn from_iter<I: IntoIterator<Item = DynamicValue>>(iter: I) -> Self {
        let mut set = DynamicSet::empty();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
