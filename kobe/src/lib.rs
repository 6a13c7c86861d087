//! # Kobe - Lightweight Multi-Chain Wallet Core Library
//!
//! A `no_std` compatible wallet library providing the hashing and encoding
//! primitives shared by the chain crates, and the codec trait they implement.
//!
//! ## Features
//!
//! - **no_std compatible**: Works in embedded and WASM environments
//! - **Audited primitives**: Uses sha2, sha3, ripemd, bs58 and bech32
//! - **Secure by design**: Zeroize secrets, constant-time comparisons
//! - **Minimal dependencies**: Lightweight and fast compilation

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::uninlined_format_args
)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod encoding;
pub mod error;
pub mod hash;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::*;
pub use types::*;
