use crate::caps::{Capabilities, Capability};
use thiserror::Error;

/// Errors that can occur when driving a PCA95xx expander.
///
/// `E` is the error type of the underlying I2C bus implementation. The
/// non-`Bus` variants are all raised before any bus traffic is issued, so a
/// failed argument or capability check never leaves the chip half-updated.
#[derive(Error, Debug)]
pub enum Error<E> {
    /// The underlying I2C transport reported a failure. Transport errors are
    /// propagated verbatim and never retried here.
    #[error("I2C bus error: {0:?}")]
    Bus(E),
    /// Pin index outside the chip's valid range.
    #[error("invalid pin {pin}: this chip has pins 0-{max}")]
    InvalidPin {
        /// The pin index that was requested.
        pin: u8,
        /// The highest valid pin index for this chip model.
        max: u8,
    },
    /// The operation needs a capability this chip model does not provide.
    #[error("operation requires {0}, which this chip model does not support")]
    UnsupportedCapability(Capabilities),
    /// A value argument is outside its documented range.
    #[error("argument out of range: {0}")]
    InvalidArgument(String),
}

/// Result type alias for PCA95xx operations.
///
/// `E` is the bus error type, i.e. `I2C::Error` of the bus implementation
/// the expander was constructed with.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

// Helpers for the common error shapes.
pub(crate) fn unsupported<E>(cap: Capability) -> Error<E> {
    Error::UnsupportedCapability(Capabilities::single(cap))
}

pub(crate) fn unsupported_pulls<E>() -> Error<E> {
    Error::UnsupportedCapability(
        Capabilities::single(Capability::PullUp).with(Capability::PullDown),
    )
}

// Lets an expander pin stand in for a native GPIO pin in code written
// against the embedded-hal digital traits.
impl<E: core::fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}
