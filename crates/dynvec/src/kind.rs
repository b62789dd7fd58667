// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type kinds: classification, coercion and ordering of dynamic values.
//!
//! [`TypeKind`] is the closed vocabulary shared by every dynamic container.
//! Equality and ordering dispatch is written against exactly this set, so it
//! is an enum rather than an extensible registry.

use std::cmp::Ordering;
use std::fmt;

use crate::container::DynamicSet;
use crate::equality::EqualsOther;
use crate::error::CoerceError;
use crate::value::{DynamicValue, OpaqueValue};
use crate::vector::DynamicVector;

/// Kind of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// Unset kind. Accepts nothing; containers fix it on first insertion.
    #[default]
    Empty,
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// 64-bit float.
    Double,
    /// UTF-8 string.
    String,
    /// Raw bytes.
    Binary,
    /// Enumeration value (i32 on the wire).
    Enum,
    /// Ordered list.
    List,
    /// Unordered set of unique values.
    Set,
    /// Key/value map.
    Map,
    /// Named struct.
    Struct,
}

impl TypeKind {
    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Double => "double",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Enum => "enum",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            Self::Struct => "struct",
        }
    }

    pub fn is_empty_type(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Primitive kinds: compared by direct value equality.
    pub fn is_base_type(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Byte
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::Double
                | Self::String
                | Self::Binary
        )
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map)
    }

    /// Kinds whose values may be absent (`Null`).
    pub fn is_nullable(&self) -> bool {
        self.is_container() || matches!(self, Self::Struct)
    }

    /// Infer the kind of a raw value. `Null` classifies as [`TypeKind::Empty`].
    pub fn classify(value: &DynamicValue) -> Self {
        match value {
            DynamicValue::Null => Self::Empty,
            DynamicValue::Bool(_) => Self::Bool,
            DynamicValue::Byte(_) => Self::Byte,
            DynamicValue::I16(_) => Self::I16,
            DynamicValue::I32(_) => Self::I32,
            DynamicValue::I64(_) => Self::I64,
            DynamicValue::Double(_) => Self::Double,
            DynamicValue::String(_) => Self::String,
            DynamicValue::Binary(_) => Self::Binary,
            DynamicValue::Enum(_) => Self::Enum,
            DynamicValue::List(_) => Self::List,
            DynamicValue::Set(_) => Self::Set,
            DynamicValue::Map(_) => Self::Map,
            DynamicValue::Struct(_) => Self::Struct,
            DynamicValue::Opaque(v) => v.type_kind(),
        }
    }

    /// Convert `value` to this kind's canonical representation.
    ///
    /// Integers convert across widths when the value fits; `Double` accepts
    /// any integer; `String` and `Binary` convert into each other (UTF-8
    /// required for `String`); `Set` accepts a list and drops duplicates.
    /// `Null` is only accepted by nullable kinds.
    pub fn coerce(&self, value: DynamicValue) -> Result<DynamicValue, CoerceError> {
        let target = *self;
        let found = Self::classify(&value);
        let reject = move || CoerceError::new(target, found);

        if value.is_null() {
            return if self.is_nullable() {
                Ok(value)
            } else {
                Err(reject())
            };
        }
        if let DynamicValue::Opaque(opaque) = &value {
            return if opaque.type_kind() == target && !target.is_empty_type() {
                Ok(value)
            } else {
                Err(reject())
            };
        }

        match self {
            Self::Empty => Err(reject()),
            Self::Bool => match value {
                DynamicValue::Bool(_) => Ok(value),
                _ => Err(reject()),
            },
            Self::Byte => value
                .as_integer()
                .and_then(|v| i8::try_from(v).ok())
                .map(DynamicValue::Byte)
                .ok_or_else(reject),
            Self::I16 => value
                .as_integer()
                .and_then(|v| i16::try_from(v).ok())
                .map(DynamicValue::I16)
                .ok_or_else(reject),
            Self::I32 => value
                .as_integer()
                .and_then(|v| i32::try_from(v).ok())
                .map(DynamicValue::I32)
                .ok_or_else(reject),
            Self::I64 => value
                .as_integer()
                .map(DynamicValue::I64)
                .ok_or_else(reject),
            Self::Double => match value {
                DynamicValue::Double(_) => Ok(value),
                other => other
                    .as_integer()
                    .map(|v| DynamicValue::Double(v as f64))
                    .ok_or_else(reject),
            },
            Self::String => match value {
                DynamicValue::String(_) => Ok(value),
                DynamicValue::Binary(bytes) => String::from_utf8(bytes)
                    .map(DynamicValue::String)
                    .map_err(|_| reject()),
                _ => Err(reject()),
            },
            Self::Binary => match value {
                DynamicValue::Binary(_) => Ok(value),
                DynamicValue::String(s) => Ok(DynamicValue::Binary(s.into_bytes())),
                _ => Err(reject()),
            },
            Self::Enum => match value {
                DynamicValue::Enum(_) => Ok(value),
                other => other
                    .as_integer()
                    .and_then(|v| i32::try_from(v).ok())
                    .map(DynamicValue::Enum)
                    .ok_or_else(reject),
            },
            Self::List => match value {
                DynamicValue::List(_) => Ok(value),
                _ => Err(reject()),
            },
            Self::Set => match value {
                DynamicValue::Set(_) => Ok(value),
                DynamicValue::List(list) => Ok(DynamicValue::Set(DynamicSet::from(list))),
                _ => Err(reject()),
            },
            Self::Map => match value {
                DynamicValue::Map(_) => Ok(value),
                _ => Err(reject()),
            },
            Self::Struct => match value {
                DynamicValue::Struct(_) => Ok(value),
                _ => Err(reject()),
            },
        }
    }

    /// Three-way comparison of two values of this kind.
    ///
    /// `Null` orders before every other value. Returns `None` when the values
    /// are not comparable as this kind.
    pub fn compare(&self, a: &DynamicValue, b: &DynamicValue) -> Option<Ordering> {
        match (a, b) {
            (DynamicValue::Null, DynamicValue::Null) => return Some(Ordering::Equal),
            (DynamicValue::Null, _) => return Some(Ordering::Less),
            (_, DynamicValue::Null) => return Some(Ordering::Greater),
            // Without an ordering, generic equality still decides Equal.
            (DynamicValue::Opaque(x), y) => {
                return x
                    .compare_other(y)
                    .or_else(|| x.equals_other(y).then_some(Ordering::Equal))
            }
            (x, DynamicValue::Opaque(y)) => {
                return y
                    .compare_other(x)
                    .map(Ordering::reverse)
                    .or_else(|| y.equals_other(x).then_some(Ordering::Equal))
            }
            _ => {}
        }

        match self {
            Self::Empty => None,
            Self::Bool => Some(a.as_bool()?.cmp(&b.as_bool()?)),
            Self::Byte | Self::I16 | Self::I32 | Self::I64 => {
                Some(a.as_integer()?.cmp(&b.as_integer()?))
            }
            Self::Double => a.as_f64()?.partial_cmp(&b.as_f64()?),
            Self::String => Some(a.as_str()?.cmp(b.as_str()?)),
            Self::Binary => Some(a.as_bytes()?.cmp(b.as_bytes()?)),
            Self::Enum => Some(a.as_enum()?.cmp(&b.as_enum()?)),
            Self::List => a.as_list()?.compare_list(b.as_list()?),
            Self::Set => a.as_set()?.compare_set(b.as_set()?),
            Self::Map => a.as_map()?.compare_map(b.as_map()?),
            Self::Struct => a.as_struct()?.compare_struct(b.as_struct()?),
        }
    }
}

impl TypeKind {
    /// List-kind comparison of a vector against any value. `None` unless
    /// `other` is a list.
    pub fn compare_list(list: &DynamicVector, other: &DynamicValue) -> Option<Ordering> {
        list.compare_list(other.as_list()?)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lexicographic comparison of two sequences, then by length.
pub(crate) fn compare_sequences(
    kind: TypeKind,
    a: &[DynamicValue],
    b: &[DynamicValue],
) -> Option<Ordering> {
    for (x, y) in a.iter().zip(b) {
        match kind.compare(x, y)? {
            Ordering::Equal => continue,
            ord => return Some(ord),
        }
    }
    Some(a.len().cmp(&b.len()))
}

/// Pick the kind two containers should be compared under.
pub(crate) fn common_kind(a: TypeKind, b: TypeKind) -> TypeKind {
    if a.is_empty_type() {
        b
    } else {
        a
    }
}

/// Total order over values, for sorting.
///
/// Agrees with [`TypeKind::compare`] wherever that gives an answer. Values it
/// cannot order still get a fixed place: doubles follow `f64::total_cmp`,
/// mismatched variants order by variant and opaque values all tie.
pub(crate) fn total_order(a: &DynamicValue, b: &DynamicValue) -> Ordering {
    use DynamicValue as V;

    match (a, b) {
        (V::Bool(x), V::Bool(y)) => x.cmp(y),
        (V::Double(x), V::Double(y)) => x.total_cmp(y),
        (V::String(x), V::String(y)) => x.cmp(y),
        (V::Binary(x), V::Binary(y)) => x.cmp(y),
        (V::Enum(x), V::Enum(y)) => x.cmp(y),
        (V::List(x), V::List(y)) => total_order_seq(x.iter(), y.iter()),
        (V::Set(x), V::Set(y)) => x.len().cmp(&y.len()).then_with(|| {
            let (mut xs, mut ys): (Vec<_>, Vec<_>) = (x.iter().collect(), y.iter().collect());
            xs.sort_by(|a, b| total_order(a, b));
            ys.sort_by(|a, b| total_order(a, b));
            total_order_seq(xs, ys)
        }),
        (V::Map(x), V::Map(y)) => x.len().cmp(&y.len()).then_with(|| {
            let (mut xs, mut ys): (Vec<_>, Vec<_>) = (x.iter().collect(), y.iter().collect());
            xs.sort_by(|(a, _), (b, _)| total_order(a, b));
            ys.sort_by(|(a, _), (b, _)| total_order(a, b));
            xs.iter()
                .zip(&ys)
                .map(|((ak, av), (bk, bv))| total_order(ak, bk).then_with(|| total_order(av, bv)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        (V::Struct(x), V::Struct(y)) => x.name().cmp(y.name()).then_with(|| {
            x.fields()
                .zip(y.fields())
                .map(|((an, av), (bn, bv))| an.cmp(bn).then_with(|| total_order(av, bv)))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| x.len().cmp(&y.len()))
        }),
        _ => match (a.as_integer(), b.as_integer()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => variant_rank(a).cmp(&variant_rank(b)),
        },
    }
}

fn total_order_seq<'a>(
    a: impl IntoIterator<Item = &'a DynamicValue>,
    b: impl IntoIterator<Item = &'a DynamicValue>,
) -> Ordering {
    let (mut a, mut b) = (a.into_iter(), b.into_iter());
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match total_order(x, y) {
                Ordering::Equal => continue,
                ord => return ord,
            },
        }
    }
}

// Integer widths share a rank so they order by value.
fn variant_rank(value: &DynamicValue) -> u8 {
    match value {
        DynamicValue::Null => 0,
        DynamicValue::Bool(_) => 1,
        DynamicValue::Byte(_)
        | DynamicValue::I16(_)
        | DynamicValue::I32(_)
        | DynamicValue::I64(_) => 2,
        DynamicValue::Double(_) => 3,
        DynamicValue::String(_) => 4,
        DynamicValue::Binary(_) => 5,
        DynamicValue::Enum(_) => 6,
        DynamicValue::List(_) => 7,
        DynamicValue::Set(_) => 8,
        DynamicValue::Map(_) => 9,
        DynamicValue::Struct(_) => 10,
        DynamicValue::Opaque(_) => 11,
    }
}
