//! Error types for core encoding operations.

use core::fmt;

/// A convenient Result type alias for kobe operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the hashing and encoding primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input is not valid in the target alphabet or format.
    InvalidEncoding,
    /// Checksum does not match the payload.
    InvalidChecksum,
    /// Payload has the wrong number of bytes.
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// Human-readable part rejected by bech32.
    InvalidHrp,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding => write!(f, "invalid encoding"),
            Self::InvalidChecksum => write!(f, "invalid checksum"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
            Self::InvalidHrp => write!(f, "invalid bech32 human-readable part"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
