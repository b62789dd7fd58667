// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Named struct with dynamically-typed fields.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::equality::EqualsStruct;
use crate::kind::TypeKind;
use crate::value::DynamicValue;

/// Struct value: a type name plus named fields, ordered by field name.
#[derive(Debug, Clone, Default)]
pub struct DynamicStruct {
    name: String,
    fields: BTreeMap<String, DynamicValue>,
}

impl DynamicStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a field, returning the previous value.
    pub fn set_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<DynamicValue>,
    ) -> Option<DynamicValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn field(&self, name: &str) -> Option<&DynamicValue> {
        self.fields.get(name)
    }

    pub fn remove_field(&mut self, name: &str) -> Option<DynamicValue> {
        self.fields.remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &DynamicValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Structs compare by type name, then field by field in name order.
    pub fn compare_struct(&self, other: &DynamicStruct) -> Option<Ordering> {
        match self.name.cmp(&other.name) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        for ((an, av), (bn, bv)) in self.fields.iter().zip(&other.fields) {
            match an.cmp(bn) {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
            let kind = TypeKind::classify(if av.is_null() { bv } else { av });
            match kind.compare(av, bv)? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        Some(self.fields.len().cmp(&other.fields.len()))
    }
}

impl EqualsStruct for DynamicStruct {
    fn equals_struct(&self, other: &DynamicStruct) -> bool {
        self.compare_struct(other) == Some(Ordering::Equal)
    }
}

impl PartialEq for DynamicStruct {
    fn eq(&self, other: &Self) -> bool {
        self.equals_struct(other)
    }
}
