// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! DynamicVector: ordered container with a runtime-checked element kind.
//!
//! Every element is coerced to the vector's element kind on the way in.
//! A vector created without a kind fixes it from the first value that
//! coerces successfully.
//!
//! # Failure policy
//!
//! - `set`, `push` and `insert` silently drop values that fail coercion and
//!   report the outcome as a `bool`. `try_set` / `try_push` return the
//!   [`CoerceError`](crate::CoerceError) instead.
//! - Index-based operations panic with an "Index out of range" message when
//!   the index is invalid. `get`, `last` and `try_pop` never panic.
//!
//! The vector has no interior locking; mutation requires `&mut self`.

mod iter;

pub use iter::{ChannelIter, IntoIter, Iter};

use std::cmp::Ordering;

use crate::config::IterConfig;
use crate::container::Container;
use crate::equality::{EqualsList, EqualsMap, EqualsOther, EqualsSet, EqualsStruct};
use crate::error::{CoerceError, Error, Result};
use crate::kind::{common_kind, compare_sequences, total_order, TypeKind};
use crate::value::DynamicValue;

/// Resizable ordered sequence of values sharing one element kind.
#[derive(Debug, Clone, Default)]
pub struct DynamicVector {
    element_type: TypeKind,
    elements: Vec<DynamicValue>,
}

impl DynamicVector {
    /// Vector of `len` null elements with a fixed element kind.
    pub fn new(element_type: TypeKind, len: usize) -> Self {
        Self {
            element_type,
            elements: vec![DynamicValue::Null; len],
        }
    }

    /// Vector with no element kind; the first accepted value fixes it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_capacity(element_type: TypeKind, capacity: usize) -> Self {
        Self {
            element_type,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Declared element kind ([`TypeKind::Empty`] until fixed).
    pub fn element_type(&self) -> TypeKind {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[track_caller]
    pub fn at(&self, index: usize) -> &DynamicValue {
        self.check_index(index);
        &self.elements[index]
    }

    pub fn get(&self, index: usize) -> Option<&DynamicValue> {
        self.elements.get(index)
    }

    /// Overwrite the element at `index`. Returns false (vector unchanged) if
    /// the value does not coerce to the element kind.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: impl Into<DynamicValue>) -> bool {
        self.check_index(index);
        match self.admit(value.into()) {
            Some(value) => {
                self.elements[index] = value;
                true
            }
            None => false,
        }
    }

    /// Like [`set`](Self::set) but reports failures as errors.
    pub fn try_set(&mut self, index: usize, value: impl Into<DynamicValue>) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let value = self.coerce_and_fix(value.into())?;
        self.elements[index] = value;
        Ok(())
    }

    /// Append a value. Returns false (vector unchanged) if it does not coerce.
    pub fn push(&mut self, value: impl Into<DynamicValue>) -> bool {
        match self.admit(value.into()) {
            Some(value) => {
                self.elements.push(value);
                true
            }
            None => false,
        }
    }

    /// Like [`push`](Self::push) but reports the coercion failure.
    pub fn try_push(&mut self, value: impl Into<DynamicValue>) -> Result<()> {
        let value = self.coerce_and_fix(value.into())?;
        self.elements.push(value);
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    /// If the vector is empty.
    #[track_caller]
    pub fn pop(&mut self) -> DynamicValue {
        match self.elements.pop() {
            Some(value) => value,
            None => panic!("{}", Error::EmptyVector),
        }
    }

    pub fn try_pop(&mut self) -> Option<DynamicValue> {
        self.elements.pop()
    }

    /// Exchange two elements.
    ///
    /// # Panics
    /// If either index is out of range.
    #[track_caller]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.check_index(i);
        self.check_index(j);
        self.elements.swap(i, j);
    }

    /// Insert before `index`, shifting later elements right. Coerces like
    /// [`push`](Self::push); returns false (vector unchanged) on rejection.
    ///
    /// # Panics
    /// If `index > len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: impl Into<DynamicValue>) -> bool {
        if index > self.len() {
            panic!(
                "{}",
                Error::IndexOutOfRange {
                    index,
                    len: self.len()
                }
            );
        }
        match self.admit(value.into()) {
            Some(value) => {
                self.elements.insert(index, value);
                true
            }
            None => false,
        }
    }

    /// Remove the element at `index`, shifting later elements left.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[track_caller]
    pub fn delete(&mut self, index: usize) -> DynamicValue {
        self.check_index(index);
        self.elements.remove(index)
    }

    /// Final element, or `None` when empty.
    pub fn last(&self) -> Option<&DynamicValue> {
        self.elements.last()
    }

    /// Remove all elements. The element kind stays fixed.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn as_slice(&self) -> &[DynamicValue] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<DynamicValue> {
        self.elements
    }

    pub fn contains(&self, value: &DynamicValue) -> bool {
        self.index_of(value).is_some()
    }

    /// Index of the first element equal to `value`.
    ///
    /// `Null` matches the first null element. Any other value is coerced to
    /// the element kind first (no match if that fails), then compared with
    /// the equality capability of the element kind.
    pub fn index_of(&self, value: &DynamicValue) -> Option<usize> {
        if value.is_null() {
            return self.elements.iter().position(DynamicValue::is_null);
        }
        let needle = match self.element_type.coerce(value.clone()) {
            Ok(needle) if !needle.is_null() => needle,
            _ => return None,
        };

        if self.element_type.is_base_type() || self.element_type.is_enum() {
            return self.elements.iter().position(|e| *e == needle);
        }
        if let DynamicValue::Opaque(cmp) = &needle {
            return self.elements.iter().position(|e| cmp.equals_other(e));
        }
        match (self.element_type, &needle) {
            (TypeKind::Map, DynamicValue::Map(cmp)) => {
                self.position_nonnull(|e| e.as_map().is_some_and(|m| cmp.equals_map(m)))
            }
            (TypeKind::Set, DynamicValue::Set(cmp)) => {
                self.position_nonnull(|e| e.as_set().is_some_and(|s| cmp.equals_set(s)))
            }
            (TypeKind::List, DynamicValue::List(cmp)) => {
                self.position_nonnull(|e| e.as_list().is_some_and(|l| cmp.equals_list(l)))
            }
            (TypeKind::Struct, DynamicValue::Struct(cmp)) => {
                self.position_nonnull(|e| e.as_struct().is_some_and(|s| cmp.equals_struct(s)))
            }
            _ => None,
        }
    }

    /// True if `other` is a list comparing equal to this vector.
    pub fn equals(&self, other: &DynamicValue) -> bool {
        self.compare_to(other) == Some(Ordering::Equal)
    }

    /// Three-way comparison with another value as a list. `None` if `other`
    /// is not a list or holds elements that do not compare.
    pub fn compare_to(&self, other: &DynamicValue) -> Option<Ordering> {
        TypeKind::compare_list(self, other)
    }

    /// Lexicographic comparison with another vector, then by length.
    pub fn compare_list(&self, other: &DynamicVector) -> Option<Ordering> {
        let kind = common_kind(self.element_type, other.element_type);
        compare_sequences(kind, &self.elements, &other.elements)
    }

    /// True if element `i` orders strictly before element `j`.
    ///
    /// # Panics
    /// If either index is out of range.
    #[track_caller]
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.element_type.compare(self.at(i), self.at(j)) == Some(Ordering::Less)
    }

    /// Stable in-place sort by element order.
    ///
    /// Elements [`less`](Self::less) cannot order still land in a fixed
    /// place: doubles follow `f64::total_cmp`, opaque values keep their
    /// relative order.
    pub fn sort(&mut self) {
        self.elements.sort_by(total_order);
    }

    /// Pull-based iterator over the current contents.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.elements)
    }

    /// Channel-backed iterator fed by a producer thread over a snapshot of
    /// the current contents. Dropping it stops and joins the producer.
    pub fn iter_channel(&self) -> Result<ChannelIter> {
        self.iter_channel_with(&IterConfig::default())
    }

    pub fn iter_channel_with(&self, config: &IterConfig) -> Result<ChannelIter> {
        ChannelIter::spawn(self.elements.clone(), config)
    }

    /// Coerce for storage, fixing the element kind on first success.
    fn coerce_and_fix(&mut self, value: DynamicValue) -> Result<DynamicValue, CoerceError> {
        let target = if self.element_type.is_empty_type() {
            TypeKind::classify(&value)
        } else {
            self.element_type
        };
        let coerced = target.coerce(value)?;
        if self.element_type.is_empty_type() {
            log::debug!("[DYNVEC] element type fixed to {}", target);
            self.element_type = target;
        }
        Ok(coerced)
    }

    /// Silent-rejection wrapper around [`coerce_and_fix`](Self::coerce_and_fix).
    fn admit(&mut self, value: DynamicValue) -> Option<DynamicValue> {
        match self.coerce_and_fix(value) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("[DYNVEC] rejected value: {}", err);
                None
            }
        }
    }

    fn position_nonnull(&self, matches: impl Fn(&DynamicValue) -> bool) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| !e.is_null() && matches(e))
    }

    #[track_caller]
    fn check_index(&self, index: usize) {
        if index >= self.len() {
            panic!(
                "{}",
                Error::IndexOutOfRange {
                    index,
                    len: self.len()
                }
            );
        }
    }
}

impl EqualsList for DynamicVector {
    fn equals_list(&self, other: &DynamicVector) -> bool {
        self.compare_list(other) == Some(Ordering::Equal)
    }
}

impl Container for DynamicVector {
    fn len(&self) -> usize {
        DynamicVector::len(self)
    }

    fn contains(&self, value: &DynamicValue) -> bool {
        DynamicVector::contains(self, value)
    }

    fn compare_to(&self, other: &DynamicValue) -> Option<Ordering> {
        DynamicVector::compare_to(self, other)
    }
}

impl PartialEq for DynamicVector {
    fn eq(&self, other: &Self) -> bool {
        self.equals_list(other)
    }
}

impl PartialOrd for DynamicVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_list(other)
    }
}

impl FromIterator<DynamicValue> for DynamicVector {
    /// Collect through [`push`](DynamicVector::push); rejected values are dropped.
    fn from_iter<I: IntoIterator<Item = DynamicValue>>(iter: I) -> Self {
        let mut vector = DynamicVector::empty();
        vector.extend(iter);
        vector
    }
}

impl Extend<DynamicValue> for DynamicVector {
    fn extend<I: IntoIterator<Item = DynamicValue>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a> IntoIterator for &'a DynamicVector {
    type Item = &'a DynamicValue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for DynamicVector {
    type Item = DynamicValue;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements)
    }
}

#[cfg(test)]
mod tests;
