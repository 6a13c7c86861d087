//! Registry-facing codec.

use alloc::string::String;
use alloc::vec::Vec;

use kobe::AddressDecoder;

use crate::address::{address_to_hash, public_key_to_address};
use crate::script::{redeem_script_to_address, script_pub_key_to_bech32_address};
use crate::wif::{decode_wif, encode_wif};
use crate::{Error, Network};

/// Avalanche implementation of [`kobe::AddressDecoder`].
///
/// Registered under [`SYMBOL`](crate::SYMBOL). Holds no configuration: every
/// call selects its parameters from the `is_testnet` flag it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvaxAddressDecoder;

impl AvaxAddressDecoder {
    /// Create a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AddressDecoder for AvaxAddressDecoder {
    type Error = Error;

    fn private_key_to_wif(&self, private_key: &[u8], is_testnet: bool) -> Result<String, Error> {
        let network = Network::from_testnet(is_testnet);
        tracing::debug!(%network, "encoding private key as WIF");
        encode_wif(private_key, network)
    }

    fn public_key_to_address(&self, public_key: &[u8], is_testnet: bool) -> Result<String, Error> {
        let network = Network::from_testnet(is_testnet);
        tracing::debug!(%network, len = public_key.len(), "deriving X-chain address");
        public_key_to_address(public_key, network)
    }

    fn redeem_script_to_address(
        &self,
        public_keys: &[&[u8]],
        required: u64,
        is_testnet: bool,
    ) -> Result<String, Error> {
        redeem_script_to_address(public_keys, required, Network::from_testnet(is_testnet))
    }

    fn wif_to_private_key(&self, wif: &str, is_testnet: bool) -> Result<Vec<u8>, Error> {
        let network = Network::from_testnet(is_testnet);
        tracing::debug!(%network, "decoding WIF");
        let key = decode_wif(wif, network)?;
        Ok(key.as_bytes().to_vec())
    }

    fn script_pub_key_to_bech32_address(
        &self,
        script_pub_key: &[u8],
        is_testnet: bool,
    ) -> Result<String, Error> {
        let network = Network::from_testnet(is_testnet);
        tracing::debug!(%network, len = script_pub_key.len(), "converting locking script");
        script_pub_key_to_bech32_address(script_pub_key, network)
    }

    fn address_verify(&self, address: &str, is_testnet: bool) -> bool {
        address_to_hash(address, Network::from_testnet(is_testnet)).is_ok()
    }
}
