// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime configuration for channel-backed iteration.

/// Channel capacity used by [`crate::DynamicVector::iter_channel`].
/// Zero makes every send a rendezvous with the consumer.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 0;

/// Name given to iteration producer threads.
pub const DEFAULT_PRODUCER_THREAD_NAME: &str = "dynvec-iter";

/// Settings for a channel iterator's producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterConfig {
    /// Elements the producer may send ahead of the consumer.
    pub channel_capacity: usize,
    /// Producer thread name.
    pub thread_name: String,
}

impl Default for IterConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            thread_name: DEFAULT_PRODUCER_THREAD_NAME.to_string(),
        }
    }
}

impl IterConfig {
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}
