// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Narrow equality capabilities, one per structural kind.
//!
//! Element search picks the capability matching the container's declared
//! element kind instead of requiring a single shared equality interface.

use crate::container::{DynamicMap, DynamicSet, DynamicStruct};
use crate::value::DynamicValue;
use crate::vector::DynamicVector;

/// Equality against an arbitrary dynamic value.
pub trait EqualsOther {
    fn equals_other(&self, other: &DynamicValue) -> bool;
}

/// Equality against a list.
pub trait EqualsList {
    fn equals_list(&self, other: &DynamicVector) -> bool;
}

/// Equality against a set.
pub trait EqualsSet {
    fn equals_set(&self, other: &DynamicSet) -> bool;
}

/// Equality against a map.
pub trait EqualsMap {
    fn equals_map(&self, other: &DynamicMap) -> bool;
}

/// Equality against a struct.
pub trait EqualsStruct {
    fn equals_struct(&self, other: &DynamicStruct) -> bool;
}
