//! Core traits defining the wallet interface.
//!
//! All wallet-related traits are defined here for easy discovery and consistency.

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Address and key codec that a wallet-manager registry invokes for one chain.
///
/// Method names and argument order are fixed: the registry looks the codec
/// up by asset symbol and calls these operations with the network flag from
/// its own configuration. Implementations must be stateless with respect to
/// that flag.
///
/// # Thread Safety
/// This trait requires `Send + Sync` so one codec can serve every caller.
#[cfg(feature = "alloc")]
pub trait AddressDecoder: Send + Sync {
    /// The error returned by every operation.
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Encode a raw private key in Wallet Import Format.
    fn private_key_to_wif(&self, private_key: &[u8], is_testnet: bool)
    -> Result<String, Self::Error>;

    /// Derive the address string for a public key.
    fn public_key_to_address(&self, public_key: &[u8], is_testnet: bool)
    -> Result<String, Self::Error>;

    /// Derive a pay-to-script-hash address from multisig participant keys.
    fn redeem_script_to_address(
        &self,
        public_keys: &[&[u8]],
        required: u64,
        is_testnet: bool,
    ) -> Result<String, Self::Error>;

    /// Decode a Wallet Import Format string back to the raw private key.
    fn wif_to_private_key(&self, wif: &str, is_testnet: bool) -> Result<Vec<u8>, Self::Error>;

    /// Convert a locking script into a Bech32 address.
    fn script_pub_key_to_bech32_address(
        &self,
        script_pub_key: &[u8],
        is_testnet: bool,
    ) -> Result<String, Self::Error>;

    /// Check whether an address string is valid for the selected network.
    fn address_verify(&self, address: &str, is_testnet: bool) -> bool;
}
