//! Avalanche address codec for Kobe.
//!
//! Converts key and script material into Avalanche X-chain addresses,
//! P2SH addresses and compressed WIF strings, and implements the
//! [`kobe::AddressDecoder`] contract a wallet-manager registry calls.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support
//! - `alloc`: Enable the codec without full std (for `no_std` environments);
//!   without it only [`Network`] and [`SYMBOL`] are available
//! - `serde`: Deserialize [`Network`] and [`WalletConfig`]
//!
//! # Usage
//!
//! ```
//! use kobe::AddressDecoder;
//! use kobe_avax::{AvaxAddressDecoder, Network};
//!
//! let pubkey = [0x02; 33];
//!
//! // Through the registry contract
//! let decoder = AvaxAddressDecoder::new();
//! let addr = decoder.public_key_to_address(&pubkey, false).unwrap();
//! assert!(addr.starts_with("X-avax1"));
//!
//! // Or directly with an explicit network
//! let addr = kobe_avax::public_key_to_address(&pubkey, Network::Testnet).unwrap();
//! assert!(addr.starts_with("X-local1"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod address;
#[cfg(feature = "alloc")]
mod config;
#[cfg(feature = "alloc")]
mod decoder;
#[cfg(feature = "alloc")]
mod error;
mod network;
#[cfg(feature = "alloc")]
pub mod params;
#[cfg(feature = "alloc")]
pub mod script;
#[cfg(feature = "alloc")]
pub mod wif;

#[cfg(feature = "alloc")]
pub use address::{ChainId, XAddress, address_to_hash, public_key_to_address, public_key_to_hash};
#[cfg(feature = "alloc")]
pub use config::WalletConfig;
#[cfg(feature = "alloc")]
pub use decoder::AvaxAddressDecoder;
#[cfg(feature = "alloc")]
pub use error::Error;
pub use network::{Network, ParseNetworkError};
#[cfg(feature = "alloc")]
pub use params::AddressParams;
#[cfg(feature = "alloc")]
pub use script::{redeem_script_to_address, script_pub_key_to_bech32_address};
#[cfg(feature = "alloc")]
pub use wif::{decode_wif, encode_wif};

/// Asset symbol the wallet-manager registry files this codec under.
pub const SYMBOL: &str = "AVAX";

/// A convenient Result type alias for kobe-avax operations.
#[cfg(feature = "alloc")]
pub type Result<T> = core::result::Result<T, Error>;
