use self::inner::AtomicPos;
use crate::error::{CapacityError, PopError, PushError};
use crate::loom::{Ordering, UnsafeCell};
use std::fmt;

#[cfg(feature = "cache-padded")]
mod inner {
    use crate::loom::AtomicUsize;
    use cache_padded::CachePadded;
    use core::ops::Deref;

    pub(crate) struct AtomicPos {
        inner: CachePadded<AtomicUsize>,
    }

    impl AtomicPos {
        pub(crate) fn new(pos: usize) -> Self {
            Self {
                inner: CachePadded::new(AtomicUsize::new(pos)),
            }
        }
    }

    impl Deref for AtomicPos {
        type Target = AtomicUsize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }
}

#[cfg(not(feature = "cache-padded"))]
mod inner {
    use crate::loom::AtomicUsize;
    use core::ops::Deref;

    pub(crate) struct AtomicPos {
        inner: AtomicUsize,
    }

    impl AtomicPos {
        pub(crate) fn new(pos: usize) -> Self {
            Self {
                inner: AtomicUsize::new(pos),
            }
        }
    }

    impl Deref for AtomicPos {
        type Target = AtomicUsize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }
}

/// Which side of the ring is looking at the cursors.
///
/// A side reads the cursor it writes with `Relaxed` and the other side's
/// cursor with `Acquire`. The owner of an unsplit ring holds both roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Producer,
    Consumer,
    Owner,
}

impl Role {
    fn head_order(self) -> Ordering {
        match self {
            Role::Consumer => Ordering::Relaxed,
            Role::Producer | Role::Owner => Ordering::Acquire,
        }
    }

    fn tail_order(self) -> Ordering {
        match self {
            Role::Producer => Ordering::Relaxed,
            Role::Consumer | Role::Owner => Ordering::Acquire,
        }
    }
}

unsafe impl Send for RawRing {}
unsafe impl Sync for RawRing {}

/// The shared core: `cap` plain `i32` slots and two cursors.
///
/// `head` is written only by the consumer, `tail` only by the producer. The
/// slots themselves are never atomic; a slot is handed from producer to
/// consumer by the release store of `tail` and back by the release store of
/// `head`.
pub(crate) struct RawRing {
    buf: Box<[UnsafeCell<i32>]>,
    cap: usize,
    mask: usize,
    head: AtomicPos,
    tail: AtomicPos,
}

impl RawRing {
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, CapacityError> {
        if cap == 0 || !cap.is_power_of_two() {
            return Err(CapacityError::InvalidCapacity(cap));
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(cap).map_err(|_| CapacityError::AllocationFailed(cap))?;
        buf.extend((0..cap).map(|_| UnsafeCell::new(0)));
        let buf = buf.into_boxed_slice();
        Ok(Self {
            buf,
            cap,
            mask: cap - 1,
            head: AtomicPos::new(0),
            tail: AtomicPos::new(0),
        })
    }

    /// Writes `value` into the next free slot and publishes it.
    ///
    /// # Safety
    ///
    /// The caller must be the only thread pushing into this ring.
    pub(crate) unsafe fn push(&self, value: i32) -> Result<(), PushError> {
        let tail = self.tail.load(Ordering::Relaxed);
        let head = self.head.load(Ordering::Acquire);

        if self.full_at(head, tail) {
            return Err(PushError::Full(value));
        }

        self.buffer_write(self.index(tail), value);
        self.tail.store(tail.wrapping_add(1), Ordering::Release);
        Ok(())
    }

    /// Reads the oldest published slot and hands it back to the producer.
    ///
    /// # Safety
    ///
    /// The caller must be the only thread popping from this ring.
    pub(crate) unsafe fn pop(&self) -> Result<i32, PopError> {
        let head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Acquire);

        if self.empty_at(head, tail) {
            return Err(PopError::Empty);
        }

        let value = self.buffer_read(self.index(head));
        self.head.store(head.wrapping_add(1), Ordering::Release);
        Ok(value)
    }

    pub(crate) fn is_empty(&self, role: Role) -> bool {
        let (head, tail) = self.cursors(role);
        self.empty_at(head, tail)
    }

    pub(crate) fn is_full(&self, role: Role) -> bool {
        let (head, tail) = self.cursors(role);
        self.full_at(head, tail)
    }

    pub(crate) fn len(&self, role: Role) -> usize {
        let (head, tail) = self.cursors(role);
        self.index(tail.wrapping_sub(head))
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    fn cursors(&self, role: Role) -> (usize, usize) {
        let head = self.head.load(role.head_order());
        let tail = self.tail.load(role.tail_order());
        (head, tail)
    }

    fn empty_at(&self, head: usize, tail: usize) -> bool {
        self.index(head) == self.index(tail)
    }

    fn full_at(&self, head: usize, tail: usize) -> bool {
        self.index(tail.wrapping_add(1)) == self.index(head)
    }

    fn index(&self, pos: usize) -> usize {
        pos & self.mask
    }

    unsafe fn buffer_read(&self, idx: usize) -> i32 {
        let cell = self.buf.get_unchecked(idx);
        cell.with(|ptr| ptr.read())
    }

    unsafe fn buffer_write(&self, idx: usize, value: i32) {
        let cell = self.buf.get_unchecked(idx);
        cell.with_mut(|ptr| ptr.write(value));
    }
}

impl fmt::Debug for RawRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.cursors(Role::Owner);
        f.debug_struct("RawRing")
            .field("cap", &self.cap)
            .field("head", &head)
            .field("tail", &tail)
            .finish()
    }
}
