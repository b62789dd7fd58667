// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sibling containers and the interface shared by all dynamic containers.

mod map;
mod set;
mod structure;

pub use map::DynamicMap;
pub use set::DynamicSet;
pub use structure::DynamicStruct;

use std::cmp::Ordering;

use crate::value::DynamicValue;

/// Operations every dynamic container exposes to encoders and to the
/// containers it is nested in.
pub trait Container {
    /// Number of elements (entries for maps).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if an equal element (key for maps) is present.
    fn contains(&self, value: &DynamicValue) -> bool;

    /// Three-way comparison against another value; `None` if not comparable.
    fn compare_to(&self, other: &DynamicValue) -> Option<Ordering>;

    fn equals(&self, other: &DynamicValue) -> bool {
        self.compare_to(other) == Some(Ordering::Equal)
    }
}
