//! Encoding utilities for cryptocurrency addresses and keys.

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

#[cfg(feature = "alloc")]
use crate::error::{Error, Result};
#[cfg(feature = "alloc")]
use crate::hash::double_sha256;

/// Encode bytes to Base58Check (version bytes, payload, 4-byte checksum).
///
/// The intermediate buffer is zeroized, so the payload may be key material.
#[cfg(feature = "alloc")]
pub fn base58check_encode(version: &[u8], payload: &[u8]) -> String {
    let mut data = Zeroizing::new(Vec::with_capacity(version.len() + payload.len() + 4));
    data.extend_from_slice(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data.as_slice()).into_string()
}

/// Decode Base58Check encoded string.
///
/// Returns `(version, payload)` where the version is the single leading byte.
/// The decoded buffer is zeroized; the caller owns the returned payload.
#[cfg(feature = "alloc")]
pub fn base58check_decode(encoded: &str) -> Result<(Vec<u8>, Vec<u8>)> {
    let data = Zeroizing::new(
        bs58::decode(encoded)
            .into_vec()
            .map_err(|_| Error::InvalidEncoding)?,
    );

    if data.len() < 5 {
        return Err(Error::InvalidLength {
            expected: 5,
            actual: data.len(),
        });
    }

    let (payload, checksum) = data.split_at(data.len() - 4);
    let computed_checksum = double_sha256(payload);

    if checksum != &computed_checksum[..4] {
        return Err(Error::InvalidChecksum);
    }

    Ok((payload[..1].to_vec(), payload[1..].to_vec()))
}

/// Encode arbitrary bytes as a plain Bech32 string (BIP-173 checksum).
///
/// Unlike SegWit addresses there is no witness version symbol; the whole
/// payload is regrouped into 5-bit words.
#[cfg(feature = "alloc")]
pub fn bech32_encode(hrp: &str, data: &[u8]) -> Result<String> {
    use bech32::{Bech32, Hrp};

    let hrp = Hrp::parse(hrp).map_err(|_| Error::InvalidHrp)?;
    bech32::encode::<Bech32>(hrp, data).map_err(|_| Error::InvalidEncoding)
}

/// Decode a plain Bech32 string.
///
/// Only the BIP-173 checksum is accepted; Bech32m strings are rejected.
/// Returns `(hrp, data)`.
#[cfg(feature = "alloc")]
pub fn bech32_decode(encoded: &str) -> Result<(String, Vec<u8>)> {
    use bech32::Bech32;
    use bech32::primitives::decode::{CheckedHrpstring, CheckedHrpstringError};

    let checked = CheckedHrpstring::new::<Bech32>(encoded).map_err(|e| match e {
        CheckedHrpstringError::Checksum(_) => Error::InvalidChecksum,
        _ => Error::InvalidEncoding,
    })?;

    let hrp = checked.hrp().to_lowercase();
    let data = checked.byte_iter().collect();
    Ok((hrp, data))
}

/// Encode using Bech32/Bech32m for SegWit addresses.
///
/// Uses Bech32 for witness version 0, Bech32m for version 1+ (Taproot).
#[cfg(feature = "alloc")]
pub fn segwit_encode(hrp: &str, version: u8, program: &[u8]) -> Result<String> {
    use bech32::Hrp;

    let hrp = Hrp::parse(hrp).map_err(|_| Error::InvalidHrp)?;
    let witness_version = bech32::Fe32::try_from(version).map_err(|_| Error::InvalidEncoding)?;

    bech32::segwit::encode(hrp, witness_version, program).map_err(|_| Error::InvalidEncoding)
}

/// Decode Bech32/Bech32m encoded SegWit address.
///
/// Returns (hrp, witness_version, witness_program).
#[cfg(feature = "alloc")]
pub fn segwit_decode(encoded: &str) -> Result<(String, u8, Vec<u8>)> {
    let (hrp, version, program) =
        bech32::segwit::decode(encoded).map_err(|_| Error::InvalidEncoding)?;

    Ok((hrp.to_string(), version.to_u8(), program))
}
