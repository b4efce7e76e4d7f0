use super::raw_ring::{RawRing, Role};
use super::split::{Consumer, Producer};
use crate::error::{CapacityError, PopError, PushError};
use crate::loom::Arc;

/// An owned single-producer single-consumer ring of `i32` slots.
///
/// A `Ring` holds both roles at once, so every operation is available on it
/// through `&mut self`. Call [`Ring::split`] to hand the producer and consumer
/// roles to two different threads.
///
/// A ring created with capacity `n` holds at most `n - 1` values.
#[derive(Debug)]
pub struct Ring {
    raw: RawRing,
}

impl Ring {
    /// Creates a ring with `capacity` slots.
    ///
    /// Fails with [`CapacityError::InvalidCapacity`] unless `capacity` is a
    /// positive power of two, and with [`CapacityError::AllocationFailed`]
    /// when the slots cannot be allocated.
    pub fn create(capacity: usize) -> Result<Self, CapacityError> {
        let raw = RawRing::with_capacity(capacity)?;
        tracing::debug!(capacity, "ring created");
        Ok(Self { raw })
    }

    /// Same as [`Ring::create`].
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::create(capacity)
    }

    pub fn push(&mut self, value: i32) -> Result<(), PushError> {
        // SAFETY: `&mut self` rules out any other producer.
        unsafe { self.raw.push(value) }
    }

    pub fn pop(&mut self) -> Result<i32, PopError> {
        // SAFETY: `&mut self` rules out any other consumer.
        unsafe { self.raw.pop() }
    }

    /// Pops the oldest value and throws it away.
    pub fn pop_discard(&mut self) -> Result<(), PopError> {
        self.pop().map(drop)
    }

    /// Pops into `out` if given, otherwise discards. On an empty ring `out`
    /// is left as it was.
    pub fn pop_into(&mut self, out: Option<&mut i32>) -> Result<(), PopError> {
        let value = self.pop()?;
        if let Some(out) = out {
            *out = value;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty(Role::Owner)
    }

    pub fn is_full(&self) -> bool {
        self.raw.is_full(Role::Owner)
    }

    pub fn len(&self) -> usize {
        self.raw.len(Role::Owner)
    }

    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Splits the ring into its producer and consumer halves.
    ///
    /// The storage is released once both halves are dropped.
    pub fn split(self) -> (Producer, Consumer) {
        let shared = Arc::new(self.raw);
        (Producer::new(shared.clone()), Consumer::new(shared))
    }
}

/// Releases the ring held by `ring` and leaves `None` behind.
///
/// Calling this on `None`, or again on an already destroyed ring, does
/// nothing.
pub fn destroy(ring: &mut Option<Ring>) {
    if let Some(ring) = ring.take() {
        tracing::trace!(capacity = ring.capacity(), "ring destroyed");
        drop(ring);
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;

    #[test]
    fn create_checks_capacity() {
        assert!(Ring::create(16).is_ok());
        assert_eq!(
            Ring::create(0).unwrap_err(),
            CapacityError::InvalidCapacity(0)
        );
        assert_eq!(
            Ring::with_capacity(3).unwrap_err(),
            CapacityError::InvalidCapacity(3)
        );
    }

    #[test]
    fn pop_into_leaves_slot_on_empty() {
        let mut ring = Ring::create(8).unwrap();
        let mut out = 123;
        assert_eq!(ring.pop_into(Some(&mut out)), Err(PopError::Empty));
        assert_eq!(out, 123);

        ring.push(5).unwrap();
        ring.push(6).unwrap();
        ring.pop_into(None).unwrap();
        ring.pop_into(Some(&mut out)).unwrap();
        assert_eq!(out, 6);
    }

    #[test]
    fn len_and_capacity() {
        let mut ring = Ring::create(8).unwrap();
        assert_eq!(ring.capacity(), 8);
        assert_eq!(ring.len(), 0);
        for i in 0..7 {
            ring.push(i).unwrap();
            assert_eq!(ring.len(), i as usize + 1);
        }
        ring.pop().unwrap();
        assert_eq!(ring.len(), 6);
    }

    #[test]
    fn destroy_twice() {
        let mut ring = Some(Ring::create(4).unwrap());
        destroy(&mut ring);
        assert!(ring.is_none());
        destroy(&mut ring);
        assert!(ring.is_none());
    }
}
