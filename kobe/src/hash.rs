//! Cryptographic hash functions used in address and key encoding.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 hash (base58check checksums)
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160 hash
#[inline]
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute Hash160 (SHA-256 followed by RIPEMD-160)
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Compute SHA3-256 hash (FIPS 202, not Keccak-256)
#[inline]
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA3-256 followed by RIPEMD-160.
///
/// This is the short address hash used by Avalanche for secp256k1 keys.
#[inline]
pub fn sha3_256_ripemd160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha3_256(data))
}
