// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Iteration over DynamicVector contents.
//!
//! [`Iter`] is a plain pull cursor. [`ChannelIter`] hands elements over from
//! a producer thread; its producer never outlives the handle.

use std::iter::FusedIterator;
use std::slice;
use std::thread::{self, JoinHandle};
use std::vec;

use crossbeam::channel::{self, Receiver};

use crate::config::IterConfig;
use crate::error::Result;
use crate::value::DynamicValue;

/// Borrowing iterator in storage order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, DynamicValue>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(elements: &'a [DynamicValue]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a DynamicValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator in storage order.
#[derive(Debug)]
pub struct IntoIter {
    inner: vec::IntoIter<DynamicValue>,
}

impl IntoIter {
    pub(crate) fn new(elements: Vec<DynamicValue>) -> Self {
        Self {
            inner: elements.into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = DynamicValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

/// Iterator fed through a crossbeam channel by a producer thread.
///
/// The producer walks a snapshot taken when the iterator was created, sends
/// one element at a time and closes the channel after the last one. With the
/// default capacity of zero every send waits for the matching `next()`.
///
/// Dropping the iterator disconnects the channel: a producer blocked in
/// `send` wakes with an error, exits, and is joined before `drop` returns.
#[derive(Debug)]
pub struct ChannelIter {
    receiver: Option<Receiver<DynamicValue>>,
    producer: Option<JoinHandle<()>>,
}

impl ChannelIter {
    pub(crate) fn spawn(elements: Vec<DynamicValue>, config: &IterConfig) -> Result<Self> {
        let (sender, receiver) = channel::bounded(config.channel_capacity);
        let producer = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || {
                let total = elements.len();
                for (sent, element) in elements.into_iter().enumerate() {
                    if sender.send(element).is_err() {
                        log::trace!("[DYNVEC-ITER] consumer gone after {}/{} elements", sent, total);
                        return;
                    }
                }
                log::trace!("[DYNVEC-ITER] producer done ({} elements)", total);
            })?;

        Ok(Self {
            receiver: Some(receiver),
            producer: Some(producer),
        })
    }
}

impl Iterator for ChannelIter {
    type Item = DynamicValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.as_ref()?.recv().ok()
    }
}

impl FusedIterator for ChannelIter {}

impl Drop for ChannelIter {
    fn drop(&mut self) {
        // Disconnect first so a blocked producer can exit.
        drop(self.receiver.take());
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                log::warn!("[DYNVEC-ITER] producer thread panicked");
            }
        }
    }
}
