// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for dynamic containers.

use std::{io, result};

use thiserror::Error;

use crate::kind::TypeKind;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Errors reported by the strict (`try_*`) container operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Coerce(#[from] CoerceError),
    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Pop from empty vector")]
    EmptyVector,
    #[error("Failed to spawn iteration producer: {0}")]
    IterationSpawn(#[from] io::Error),
}

/// A value could not be converted to the canonical representation of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot coerce {found} value to {target}")]
pub struct CoerceError {
    /// Kind the value was coerced to.
    pub target: TypeKind,
    /// Kind the rejected value classifies as.
    pub found: TypeKind,
}

impl CoerceError {
    pub fn new(target: TypeKind, found: TypeKind) -> Self {
        Self { target, found }
    }
}
