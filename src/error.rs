//! Driver error type

use core::fmt::Debug;

/// Errors returned by the IMU driver.
///
/// `E` is the error type of the underlying bus implementation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<E: Debug> {
    /// A bus transaction failed
    #[error("bus transaction failed: {0:?}")]
    Bus(E),

    /// The identity register read back as all ones
    #[error("no device answered at the configured address")]
    NotPresent,

    /// The identity register holds a value the device table does not list
    #[error("unexpected identity byte {0:#04x}")]
    UnknownIdentity(u8),

    /// A calibration pass was requested with zero samples
    #[error("calibration requires at least one sample")]
    NoSamples,
}

impl<E: Debug> Error<E> {
    /// True if the error came from the bus rather than from the driver
    pub fn is_bus(&self) -> bool {
        matches!(self, Error::Bus(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err: Error<()> = Error::UnknownIdentity(0x72);
        assert_eq!(err.to_string(), "unexpected identity byte 0x72");

        let err: Error<()> = Error::NoSamples;
        assert_eq!(err.to_string(), "calibration requires at least one sample");

        let err: Error<&str> = Error::Bus("nack");
        assert_eq!(err.to_string(), "bus transaction failed: \"nack\"");
        assert!(err.is_bus());
        assert!(!Error::<()>::NotPresent.is_bus());
    }
}
