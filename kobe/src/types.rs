//! Core types used throughout the library.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// A fixed-size secret with automatic zeroization.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretBytes<const N: usize>([u8; N]);

impl<const N: usize> SecretBytes<N> {
    /// Create from a byte array
    #[inline]
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, failing unless it is exactly `N` bytes.
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        let inner: [u8; N] = bytes.try_into().map_err(|_| crate::Error::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })?;
        Ok(Self(inner))
    }

    /// Get a reference to the inner bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for SecretBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> core::fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

impl<const N: usize> ConstantTimeEq for SecretBytes<N> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

/// Type alias for 32-byte secret (private key)
pub type Secret32 = SecretBytes<32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_exact_length() {
        let secret = Secret32::from_slice(&[7u8; 32]).unwrap();
        assert_eq!(secret.as_bytes(), &[7u8; 32]);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = Secret32::from_slice(&[7u8; 31]).unwrap_err();
        assert_eq!(
            err,
            crate::Error::InvalidLength {
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = Secret32::new([0xab; 32]);
        let debug = format!("{secret:?}");
        assert_eq!(debug, "SecretBytes<32>[REDACTED]");
    }

    #[test]
    fn test_constant_time_eq() {
        assert_eq!(Secret32::new([1; 32]), Secret32::new([1; 32]));
        assert_ne!(Secret32::new([1; 32]), Secret32::new([2; 32]));
    }
}
