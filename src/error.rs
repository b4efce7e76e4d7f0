use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("capacity {0} is not a positive power of two")]
    InvalidCapacity(usize),

    #[error("failed to allocate {0} slots")]
    AllocationFailed(usize),
}

impl CapacityError {
    pub fn capacity(&self) -> usize {
        match *self {
            CapacityError::InvalidCapacity(cap) | CapacityError::AllocationFailed(cap) => cap,
        }
    }
}

/// Returned by a push on a full ring. The rejected value is handed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("push failed because ring is full")]
    Full(i32),
}

impl PushError {
    pub fn is_full(&self) -> bool {
        matches!(self, PushError::Full(_))
    }

    pub fn into_inner(self) -> i32 {
        match self {
            PushError::Full(val) => val,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PopError {
    #[error("pop failed because ring is empty")]
    Empty,
}

impl PopError {
    pub fn is_empty(&self) -> bool {
        matches!(self, PopError::Empty)
    }
}
