//! A fixed-capacity, lock-free ring for handing `i32` values from exactly one
//! producer thread to exactly one consumer thread.
//!
//! ```
//! use spsc_ring::Ring;
//!
//! let mut ring = Ring::create(4).unwrap();
//! ring.push(11).unwrap();
//! ring.push(22).unwrap();
//! ring.push(33).unwrap();
//! assert!(ring.is_full());
//! assert!(ring.push(44).is_err());
//!
//! let (mut tx, mut rx) = ring.split();
//! assert_eq!(rx.pop(), Ok(11));
//! tx.push(44).unwrap();
//! ```

pub mod error;
mod loom;
mod ring;

pub use crate::error::{CapacityError, PopError, PushError};
pub use crate::ring::{destroy, Consumer, Producer, Ring};
