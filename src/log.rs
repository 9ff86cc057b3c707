//! Conditional logging macros.
//!
//! With the `tracing` feature, `debug!` and `trace!` are the `tracing` macros.
//! Without it they expand to nothing, so the snap hot path pays no cost for
//! formatting arguments it would throw away.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
