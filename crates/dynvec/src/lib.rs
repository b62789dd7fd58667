// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dynvec - runtime-typed list values
//!
//! A resizable, ordered container whose elements share one element kind that
//! is checked (and coerced) at runtime. It is the in-memory form of a list
//! value in a schema-driven serialization/RPC stack, where element types are
//! known from a schema or from the data itself rather than from generics.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynvec::{DynamicValue, DynamicVector, TypeKind};
//!
//! // Element kind is fixed by the first accepted value.
//! let mut names = DynamicVector::empty();
//! names.push("a");
//! names.push("b");
//! assert_eq!(names.element_type(), TypeKind::String);
//!
//! // Values that do not coerce are silently rejected.
//! assert!(!names.push(42i32));
//! assert_eq!(names.len(), 2);
//!
//! // Integers coerce across widths.
//! let mut ids = DynamicVector::new(TypeKind::I32, 0);
//! ids.push(7i64);
//! assert!(ids.contains(&DynamicValue::I32(7)));
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DynamicVector`] | Ordered list with a runtime element kind |
//! | [`DynamicValue`] | Tagged runtime value (primitives, containers, opaque) |
//! | [`TypeKind`] | Closed kind vocabulary: classify, coerce, compare |
//! | [`DynamicSet`], [`DynamicMap`], [`DynamicStruct`] | Sibling containers |
//! | [`Container`] | Length, membership and comparison shared by containers |
//!
//! ## Modules Overview
//!
//! - [`vector`] - DynamicVector and its iterators
//! - [`kind`] - type kinds and coercion rules
//! - [`container`] - set, map and struct values
//! - [`equality`] - per-kind equality capabilities
//! - [`config`] - channel iteration settings

pub mod config;
pub mod container;
pub mod equality;
pub mod error;
pub mod kind;
pub mod value;
pub mod vector;

pub use config::IterConfig;
pub use container::{Container, DynamicMap, DynamicSet, DynamicStruct};
pub use equality::{EqualsList, EqualsMap, EqualsOther, EqualsSet, EqualsStruct};
pub use error::{CoerceError, Error, Result};
pub use kind::TypeKind;
pub use value::{DynamicValue, OpaqueValue};
pub use vector::{ChannelIter, DynamicVector, IntoIter, Iter};
