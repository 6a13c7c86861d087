//! Address and key encoding parameters.
//!
//! Every scheme the codec speaks is described by a constant [`AddressParams`]
//! record, one per network. Selecting a record is a pure function of
//! [`Network`], so no operation depends on shared state.

use alloc::string::String;
use alloc::vec::Vec;

use kobe::encoding::{
    base58check_decode, base58check_encode, bech32_decode, bech32_encode, segwit_decode,
    segwit_encode,
};
use kobe::hash::{hash160, sha3_256_ripemd160};

use crate::{Error, Network, Result};

/// Human-readable prefix of X-chain addresses on mainnet.
pub const AVAX_MAINNET_HRP: &str = "avax";
/// Human-readable prefix of X-chain addresses on the local test network.
pub const AVAX_TESTNET_HRP: &str = "local";
/// Underlying-chain SegWit prefix on mainnet.
pub const BTC_MAINNET_HRP: &str = "bc";
/// Underlying-chain SegWit prefix on testnet.
pub const BTC_TESTNET_HRP: &str = "tb";

/// String encoding family and its network tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Plain Bech32 of the payload bytes.
    Bech32 {
        /// Human-readable part.
        hrp: &'static str,
    },
    /// SegWit version 0 witness program.
    SegwitV0 {
        /// Human-readable part.
        hrp: &'static str,
    },
    /// Base58Check with a one-byte version prefix.
    Base58Check {
        /// Version byte.
        version: u8,
    },
}

/// Hash chain applied to key material before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    /// SHA3-256 then RIPEMD-160.
    Sha3Ripemd160,
    /// SHA-256 then RIPEMD-160.
    Hash160,
}

impl HashKind {
    /// Apply the hash chain.
    #[inline]
    pub fn digest(self, data: &[u8]) -> [u8; 20] {
        match self {
            Self::Sha3Ripemd160 => sha3_256_ripemd160(data),
            Self::Hash160 => hash160(data),
        }
    }
}

/// One address or key encoding scheme on one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressParams {
    /// Encoding family and prefix.
    pub encoding: Encoding,
    /// Hash applied by [`AddressParams::hash_and_encode`], if any.
    pub hash: Option<HashKind>,
    /// Accepted payload lengths in bytes; the first is the canonical one.
    pub payload_lens: &'static [usize],
    /// Byte appended after the payload (WIF compression flag).
    pub suffix: Option<u8>,
}

impl AddressParams {
    /// X-chain P2PKH on mainnet.
    pub const AVAX_MAINNET_P2PKH: Self = Self {
        encoding: Encoding::Bech32 {
            hrp: AVAX_MAINNET_HRP,
        },
        hash: Some(HashKind::Sha3Ripemd160),
        payload_lens: &[20],
        suffix: None,
    };

    /// X-chain P2PKH on the local test network.
    pub const AVAX_TESTNET_P2PKH: Self = Self {
        encoding: Encoding::Bech32 {
            hrp: AVAX_TESTNET_HRP,
        },
        hash: Some(HashKind::Sha3Ripemd160),
        payload_lens: &[20],
        suffix: None,
    };

    /// P2SH on mainnet.
    pub const MAINNET_P2SH: Self = Self {
        encoding: Encoding::Base58Check { version: 0x05 },
        hash: Some(HashKind::Hash160),
        payload_lens: &[20],
        suffix: None,
    };

    /// P2SH on testnet.
    pub const TESTNET_P2SH: Self = Self {
        encoding: Encoding::Base58Check { version: 0xc4 },
        hash: Some(HashKind::Hash160),
        payload_lens: &[20],
        suffix: None,
    };

    /// Compressed WIF on mainnet.
    pub const MAINNET_WIF_COMPRESSED: Self = Self {
        encoding: Encoding::Base58Check { version: 0x80 },
        hash: None,
        payload_lens: &[32],
        suffix: Some(0x01),
    };

    /// Compressed WIF on testnet.
    pub const TESTNET_WIF_COMPRESSED: Self = Self {
        encoding: Encoding::Base58Check { version: 0xef },
        hash: None,
        payload_lens: &[32],
        suffix: Some(0x01),
    };

    /// Underlying-chain SegWit v0 on mainnet (P2WPKH and P2WSH programs).
    pub const MAINNET_SEGWIT_V0: Self = Self {
        encoding: Encoding::SegwitV0 {
            hrp: BTC_MAINNET_HRP,
        },
        hash: None,
        payload_lens: &[20, 32],
        suffix: None,
    };

    /// Underlying-chain SegWit v0 on testnet.
    pub const TESTNET_SEGWIT_V0: Self = Self {
        encoding: Encoding::SegwitV0 {
            hrp: BTC_TESTNET_HRP,
        },
        hash: None,
        payload_lens: &[20, 32],
        suffix: None,
    };

    /// X-chain public key address parameters for `network`.
    #[must_use]
    pub const fn p2pkh(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::AVAX_MAINNET_P2PKH,
            Network::Testnet => Self::AVAX_TESTNET_P2PKH,
        }
    }

    /// P2SH parameters for `network`.
    #[must_use]
    pub const fn p2sh(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::MAINNET_P2SH,
            Network::Testnet => Self::TESTNET_P2SH,
        }
    }

    /// Compressed WIF parameters for `network`.
    #[must_use]
    pub const fn wif(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::MAINNET_WIF_COMPRESSED,
            Network::Testnet => Self::TESTNET_WIF_COMPRESSED,
        }
    }

    /// Underlying-chain SegWit v0 parameters for `network`.
    #[must_use]
    pub const fn segwit_v0(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::MAINNET_SEGWIT_V0,
            Network::Testnet => Self::TESTNET_SEGWIT_V0,
        }
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if self.payload_lens.contains(&actual) {
            Ok(())
        } else {
            Err(kobe::Error::InvalidLength {
                expected: self.payload_lens[0],
                actual,
            }
            .into())
        }
    }

    /// Encode a payload that is already hashed (or needs no hash).
    pub fn encode(&self, payload: &[u8]) -> Result<String> {
        self.check_len(payload.len())?;

        let encoded = match self.encoding {
            Encoding::Bech32 { hrp } => bech32_encode(hrp, payload)?,
            Encoding::SegwitV0 { hrp } => segwit_encode(hrp, 0, payload)?,
            Encoding::Base58Check { version } => match self.suffix {
                Some(suffix) => {
                    let mut data = zeroize::Zeroizing::new(Vec::with_capacity(payload.len() + 1));
                    data.extend_from_slice(payload);
                    data.push(suffix);
                    base58check_encode(&[version], &data)
                }
                None => base58check_encode(&[version], payload),
            },
        };
        Ok(encoded)
    }

    /// Hash `data` with this scheme's hash chain, then encode the digest.
    pub fn hash_and_encode(&self, data: &[u8]) -> Result<String> {
        match self.hash {
            Some(kind) => self.encode(&kind.digest(data)),
            None => self.encode(data),
        }
    }

    /// Decode a string produced by [`AddressParams::encode`].
    ///
    /// The network tag must match this record exactly; the suffix, if any,
    /// is verified and stripped.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>> {
        let payload = match self.encoding {
            Encoding::Bech32 { hrp } => {
                let (actual, data) = bech32_decode(encoded)?;
                check_hrp(hrp, actual)?;
                data
            }
            Encoding::SegwitV0 { hrp } => {
                let (actual, version, program) = segwit_decode(encoded)?;
                check_hrp(hrp, actual)?;
                if version != 0 {
                    return Err(kobe::Error::InvalidEncoding.into());
                }
                program
            }
            Encoding::Base58Check { version } => {
                let (actual, mut data) = base58check_decode(encoded)?;
                if actual[0] != version {
                    return Err(Error::VersionMismatch {
                        expected: version,
                        actual: actual[0],
                    });
                }
                if let Some(suffix) = self.suffix {
                    let expected = self.payload_lens[0] + 1;
                    if data.len() != expected {
                        return Err(kobe::Error::InvalidLength {
                            expected,
                            actual: data.len(),
                        }
                        .into());
                    }
                    let flag = data[expected - 1];
                    if flag != suffix {
                        return Err(Error::InvalidCompressionFlag(flag));
                    }
                    data.truncate(expected - 1);
                }
                data
            }
        };

        self.check_len(payload.len())?;
        Ok(payload)
    }
}

fn check_hrp(expected: &'static str, actual: String) -> Result<()> {
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(Error::NetworkMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_by_network() {
        assert_eq!(
            AddressParams::p2pkh(Network::Mainnet).encoding,
            Encoding::Bech32 { hrp: "avax" }
        );
        assert_eq!(
            AddressParams::p2pkh(Network::Testnet).encoding,
            Encoding::Bech32 { hrp: "local" }
        );
        assert_eq!(
            AddressParams::p2sh(Network::Testnet).encoding,
            Encoding::Base58Check { version: 0xc4 }
        );
        assert_eq!(
            AddressParams::wif(Network::Mainnet).encoding,
            Encoding::Base58Check { version: 0x80 }
        );
        assert_eq!(
            AddressParams::segwit_v0(Network::Testnet).encoding,
            Encoding::SegwitV0 { hrp: "tb" }
        );
    }

    #[test]
    fn test_encode_rejects_wrong_payload_length() {
        let err = AddressParams::AVAX_MAINNET_P2PKH.encode(&[0u8; 19]).unwrap_err();
        assert_eq!(
            err,
            Error::Encoding(kobe::Error::InvalidLength {
                expected: 20,
                actual: 19
            })
        );
    }

    #[test]
    fn test_hash_and_encode_p2sh() {
        let address = AddressParams::MAINNET_P2SH.hash_and_encode(&[]).unwrap();
        assert_eq!(address, "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy");
    }

    #[test]
    fn test_decode_bech32_wrong_network() {
        let err = AddressParams::AVAX_TESTNET_P2PKH
            .decode("avax1mrl5fsxg9a30ufdr0q50ajns3y2rr3peuady2y")
            .unwrap_err();
        assert_eq!(
            err,
            Error::NetworkMismatch {
                expected: "local",
                actual: "avax".into()
            }
        );
    }

    #[test]
    fn test_decode_base58_wrong_version() {
        let err = AddressParams::TESTNET_P2SH
            .decode("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy")
            .unwrap_err();
        assert_eq!(
            err,
            Error::VersionMismatch {
                expected: 0xc4,
                actual: 0x05
            }
        );
    }

    #[test]
    fn test_segwit_roundtrip_both_program_sizes() {
        for len in [20usize, 32] {
            let program: Vec<u8> = (0..len as u8).collect();
            let address = AddressParams::MAINNET_SEGWIT_V0.encode(&program).unwrap();
            assert!(address.starts_with("bc1q"));
            assert_eq!(AddressParams::MAINNET_SEGWIT_V0.decode(&address).unwrap(), program);
        }
    }
}
