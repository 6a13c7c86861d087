//! Avalanche X-chain address creation and parsing.
//!
//! An X-chain address is `X-` followed by the Bech32 encoding of
//! `ripemd160(sha3_256(public_key))` under the network prefix, for example
//! `X-avax1mrl5fsxg9a30ufdr0q50ajns3y2rr3peuady2y`.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kobe::encoding::bech32_decode;

use crate::params::{AVAX_MAINNET_HRP, AVAX_TESTNET_HRP, AddressParams, HashKind};
use crate::{Error, Network, Result};

/// Avalanche sub-ledger an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainId {
    /// Exchange chain.
    #[default]
    X,
    /// Platform chain.
    P,
    /// Contract chain.
    C,
}

impl ChainId {
    /// Single-letter alias used as the address tag.
    #[inline]
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::P => "P",
            Self::C => "C",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

impl FromStr for ChainId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "X" => Ok(Self::X),
            "P" => Ok(Self::P),
            "C" => Ok(Self::C),
            _ => Err(Error::UnknownChain(s.to_string())),
        }
    }
}

/// Compute the 20-byte short address hash of a public key.
#[inline]
pub fn public_key_to_hash(public_key: &[u8]) -> [u8; 20] {
    HashKind::Sha3Ripemd160.digest(public_key)
}

/// Create the X-chain address string for a public key.
///
/// Any byte string is accepted as key material; only the digest is encoded.
pub fn public_key_to_address(public_key: &[u8], network: Network) -> Result<String> {
    XAddress::from_public_key(public_key, network).encode()
}

/// Parse an X-chain address for `network` and return its 20-byte hash.
pub fn address_to_hash(address: &str, network: Network) -> Result<[u8; 20]> {
    let (chain, rest) = split_chain_tag(address)?;
    if chain != ChainId::X {
        return Err(Error::UnsupportedChain(chain));
    }

    let payload = AddressParams::p2pkh(network).decode(rest)?;
    to_hash(&payload)
}

/// A decoded Avalanche address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XAddress {
    chain: ChainId,
    network: Network,
    hash: [u8; 20],
}

impl XAddress {
    /// Create an X-chain address from a raw 20-byte hash.
    #[must_use]
    pub const fn new(hash: [u8; 20], network: Network) -> Self {
        Self {
            chain: ChainId::X,
            network,
            hash,
        }
    }

    /// Create an X-chain address from public key material.
    #[must_use]
    pub fn from_public_key(public_key: &[u8], network: Network) -> Self {
        Self::new(public_key_to_hash(public_key), network)
    }

    /// The sub-ledger tag.
    pub const fn chain(&self) -> ChainId {
        self.chain
    }

    /// The network implied by the Bech32 prefix.
    pub const fn network(&self) -> Network {
        self.network
    }

    /// The 20-byte short address hash.
    pub const fn hash(&self) -> &[u8; 20] {
        &self.hash
    }

    /// Encode as `<chain>-<bech32>`.
    pub fn encode(&self) -> Result<String> {
        let bech32 = AddressParams::p2pkh(self.network).encode(&self.hash)?;

        let mut address = String::with_capacity(2 + bech32.len());
        address.push_str(self.chain.alias());
        address.push('-');
        address.push_str(&bech32);
        Ok(address)
    }
}

impl FromStr for XAddress {
    type Err = Error;

    /// Parse any chain-tagged address, inferring the network from its prefix.
    fn from_str(s: &str) -> Result<Self> {
        let (chain, rest) = split_chain_tag(s)?;
        let (hrp, data) = bech32_decode(rest)?;

        let network = if hrp == AVAX_MAINNET_HRP {
            Network::Mainnet
        } else if hrp == AVAX_TESTNET_HRP {
            Network::Testnet
        } else {
            return Err(Error::UnknownNetworkPrefix(hrp));
        };

        Ok(Self {
            chain,
            network,
            hash: to_hash(&data)?,
        })
    }
}

fn split_chain_tag(address: &str) -> Result<(ChainId, &str)> {
    let (alias, rest) = address.split_once('-').ok_or(Error::MissingChainTag)?;
    Ok((alias.parse()?, rest))
}

fn to_hash(payload: &[u8]) -> Result<[u8; 20]> {
    payload.try_into().map_err(|_| {
        Error::Encoding(kobe::Error::InvalidLength {
            expected: 20,
            actual: payload.len(),
        })
    })
}
