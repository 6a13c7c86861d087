//! Script-hash addresses and locking-script conversion.

use alloc::string::String;
use alloc::vec::Vec;

use crate::params::AddressParams;
use crate::{Error, Network, Result};

/// Lengths of the SegWit v0 locking scripts: `OP_0 <20>` and `OP_0 <32>`.
pub const VALID_SCRIPT_LENGTHS: [usize; 2] = [22, 34];

/// Create a P2SH address from multisig participant keys.
///
/// The keys are concatenated in the order given and the result is hashed
/// with HASH160. `required` is not part of the hashed data: the multisig
/// template (`OP_m <keys> OP_n OP_CHECKMULTISIG`) is expected to be built
/// upstream, so an empty key list yields the hash of the empty buffer.
pub fn redeem_script_to_address(
    public_keys: &[&[u8]],
    required: u64,
    network: Network,
) -> Result<String> {
    tracing::debug!(
        %network,
        keys = public_keys.len(),
        required,
        "building script hash from concatenated keys"
    );

    let redeem_script: Vec<u8> = public_keys.concat();
    AddressParams::p2sh(network).hash_and_encode(&redeem_script)
}

/// Convert a SegWit v0 locking script into the underlying chain's Bech32
/// address.
///
/// The first two bytes (witness version and push length) are dropped and
/// the remaining 20- or 32-byte program is encoded with the `bc` / `tb`
/// prefix.
pub fn script_pub_key_to_bech32_address(script_pub_key: &[u8], network: Network) -> Result<String> {
    if !VALID_SCRIPT_LENGTHS.contains(&script_pub_key.len()) {
        return Err(Error::InvalidScriptLength(script_pub_key.len()));
    }

    AddressParams::segwit_v0(network).encode(&script_pub_key[2..])
}
