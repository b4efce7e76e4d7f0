mod handle;
mod raw_ring;
mod split;

pub use self::handle::{destroy, Ring};
pub use self::split::{Consumer, Producer};
