// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::container::{DynamicMap, DynamicSet, DynamicStruct};
use crate::equality::{EqualsList, EqualsMap, EqualsOther, EqualsSet, EqualsStruct};
use crate::kind::TypeKind;
use crate::vector::DynamicVector;

/// A user-supplied value (typically a generated struct) stored behind shared
/// ownership. Containers never mutate it.
pub trait OpaqueValue: EqualsOther + fmt::Debug + Send + Sync {
    /// Kind this value coerces to.
    fn type_kind(&self) -> TypeKind;

    /// Ordering against another value, if defined.
    fn compare_other(&self, _other: &DynamicValue) -> Option<Ordering> {
        None
    }
}

/// A runtime value that can be stored in a dynamic container.
#[derive(Debug, Clone)]
pub enum DynamicValue {
    // Primitives
    Bool(bool),
    Byte(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(f64),
    String(String),
    Binary(Vec<u8>),
    Enum(i32),

    // Containers
    List(DynamicVector),
    Set(DynamicSet),
    Map(DynamicMap),
    Struct(DynamicStruct),

    // Special
    Opaque(Arc<dyn OpaqueValue>),
    Null,
}

impl DynamicValue {
    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Wrap a user value.
    pub fn opaque(value: impl OpaqueValue + 'static) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Kind this value classifies as.
    pub fn kind(&self) -> TypeKind {
        TypeKind::classify(self)
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Any integer variant, widened to i64.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Byte(v) => Some(i64::from(*v)),
            Self::I16(v) => Some(i64::from(*v)),
            Self::I32(v) => Some(i64::from(*v)),
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(v) => Some(v),
            _ => None,
        }
    }

    /// Get enum value.
    pub fn as_enum(&self) -> Option<i32> {
        match self {
            Self::Enum(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&DynamicVector> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&DynamicSet> {
        match self {
            Self::Set(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&DynamicMap> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&DynamicStruct> {
        match self {
            Self::Struct(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for DynamicValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::List(a), Self::List(b)) => a.equals_list(b),
            (Self::Set(a), Self::Set(b)) => a.equals_set(b),
            (Self::Map(a), Self::Map(b)) => a.equals_map(b),
            (Self::Struct(a), Self::Struct(b)) => a.equals_struct(b),
            (Self::Opaque(a), b) => a.equals_other(b),
            (a, Self::Opaque(b)) => b.equals_other(a),
            _ => false,
        }
    }
}

// Conversion traits
impl From<bool> for DynamicValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for DynamicValue {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for DynamicValue {
    fn from(v: i16) -> Self {
        Self::I16(v)
    }
}

impl From<i32> for DynamicValue {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for DynamicValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f64> for DynamicValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<String> for DynamicValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<u8>> for DynamicValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Binary(v)
    }
}

impl From<&[u8]> for DynamicValue {
    fn from(v: &[u8]) -> Self {
        Self::Binary(v.to_vec())
    }
}

impl From<DynamicVector> for DynamicValue {
    fn from(v: DynamicVector) -> Self {
        Self::List(v)
    }
}

impl From<DynamicSet> for DynamicValue {
    fn from(v: DynamicSet) -> Self {
        Self::Set(v)
    }
}

impl From<DynamicMap> for DynamicValue {
    fn from(v: DynamicMap) -> Self {
        Self::Map(v)
    }
}

impl From<DynamicStruct> for DynamicValue {
    fn from(v: DynamicStruct) -> Self {
        Self::Struct(v)
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
