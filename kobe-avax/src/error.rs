//! Error types for Avalanche address and key conversion.

use alloc::string::String;
use core::fmt;

use crate::address::ChainId;

/// Errors that can occur while converting keys, scripts and addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The underlying encoder or decoder rejected the input.
    Encoding(kobe::Error),
    /// Locking script is neither 22 nor 34 bytes long.
    InvalidScriptLength(usize),
    /// Base58Check version byte belongs to another scheme or network.
    VersionMismatch {
        /// Version byte for the selected network.
        expected: u8,
        /// Version byte found in the input.
        actual: u8,
    },
    /// WIF compression suffix is not `0x01`.
    InvalidCompressionFlag(u8),
    /// Bech32 human-readable part belongs to another network.
    NetworkMismatch {
        /// Prefix for the selected network.
        expected: &'static str,
        /// Prefix found in the input.
        actual: String,
    },
    /// Bech32 human-readable part belongs to no supported network.
    UnknownNetworkPrefix(String),
    /// Address names a sub-ledger this codec does not handle.
    UnsupportedChain(ChainId),
    /// Address has no `<chain>-` tag.
    MissingChainTag,
    /// Address carries an unknown chain alias.
    UnknownChain(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(e) => write!(f, "encoding error: {e}"),
            Self::InvalidScriptLength(_) => write!(f, "scriptPubKey length is invalid"),
            Self::VersionMismatch { expected, actual } => {
                write!(f, "version byte mismatch: expected 0x{expected:02x}, got 0x{actual:02x}")
            }
            Self::InvalidCompressionFlag(flag) => {
                write!(f, "invalid compression flag 0x{flag:02x}")
            }
            Self::NetworkMismatch { expected, actual } => {
                write!(f, "address prefix \"{actual}\" does not match network prefix \"{expected}\"")
            }
            Self::UnknownNetworkPrefix(hrp) => write!(f, "unknown address prefix \"{hrp}\""),
            Self::UnsupportedChain(chain) => write!(f, "unsupported chain: {chain}"),
            Self::MissingChainTag => write!(f, "address is missing its chain tag"),
            Self::UnknownChain(alias) => write!(f, "unknown chain alias: {alias}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<kobe::Error> for Error {
    fn from(err: kobe::Error) -> Self {
        Self::Encoding(err)
    }
}
