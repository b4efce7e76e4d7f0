use super::raw_ring::{RawRing, Role};
use crate::error::{PopError, PushError};
use crate::loom::Arc;

/// The writing half of a split [`Ring`](super::Ring).
///
/// There is exactly one `Producer` per ring; it is `Send` but not `Clone`.
#[derive(Debug)]
pub struct Producer {
    inner: Arc<RawRing>,
}

impl Producer {
    pub(super) fn new(inner: Arc<RawRing>) -> Self {
        Self { inner }
    }

    /// Pushes `value`, or hands it back inside [`PushError::Full`] when no
    /// slot is free. Never waits.
    pub fn push(&mut self, value: i32) -> Result<(), PushError> {
        // SAFETY: the only `Producer` of this ring is borrowed mutably.
        unsafe { self.inner.push(value) }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty(Role::Producer)
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full(Role::Producer)
    }

    pub fn len(&self) -> usize {
        self.inner.len(Role::Producer)
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

/// The reading half of a split [`Ring`](super::Ring).
#[derive(Debug)]
pub struct Consumer {
    inner: Arc<RawRing>,
}

impl Consumer {
    pub(super) fn new(inner: Arc<RawRing>) -> Self {
        Self { inner }
    }

    /// Pops the oldest value, or fails with [`PopError::Empty`]. Never waits.
    pub fn pop(&mut self) -> Result<i32, PopError> {
        // SAFETY: the only `Consumer` of this ring is borrowed mutably.
        unsafe { self.inner.pop() }
    }

    pub fn pop_discard(&mut self) -> Result<(), PopError> {
        self.pop().map(drop)
    }

    pub fn pop_into(&mut self, out: Option<&mut i32>) -> Result<(), PopError> {
        let value = self.pop()?;
        if let Some(out) = out {
            *out = value;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty(Role::Consumer)
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full(Role::Consumer)
    }

    pub fn len(&self) -> usize {
        self.inner.len(Role::Consumer)
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}
