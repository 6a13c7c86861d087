//! Compressed Wallet Import Format.

use alloc::string::String;

use kobe::Secret32;
use zeroize::Zeroizing;

use crate::params::AddressParams;
use crate::{Network, Result};

/// Export a 32-byte private key as compressed WIF.
pub fn encode_wif(private_key: &[u8], network: Network) -> Result<String> {
    AddressParams::wif(network).encode(private_key)
}

/// Import a compressed WIF string for `network`.
///
/// The checksum, version byte and compression flag are all verified.
pub fn decode_wif(wif: &str, network: Network) -> Result<Secret32> {
    let key = Zeroizing::new(AddressParams::wif(network).decode(wif)?);
    Ok(Secret32::from_slice(&key)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const KEY: [u8; 32] =
        hex_literal::hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");
    const MAINNET_WIF: &str = "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617";
    const TESTNET_WIF: &str = "cMzLdeGd5vEqxB8B6VFQoRopQ3sLAAvEzDAoQgvX54xwofSWj1fx";

    #[test]
    fn test_wif_export() {
        assert_eq!(encode_wif(&KEY, Network::Mainnet).unwrap(), MAINNET_WIF);
        assert_eq!(encode_wif(&KEY, Network::Testnet).unwrap(), TESTNET_WIF);
    }

    #[test]
    fn test_wif_import() {
        let key = decode_wif(MAINNET_WIF, Network::Mainnet).unwrap();
        assert_eq!(key.as_bytes(), &KEY);
        let key = decode_wif(TESTNET_WIF, Network::Testnet).unwrap();
        assert_eq!(key.as_bytes(), &KEY);
    }

    #[test]
    fn test_wif_roundtrip() {
        let bytes =
            hex_literal::hex!("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35");
        for network in [Network::Mainnet, Network::Testnet] {
            let wif = encode_wif(&bytes, network).unwrap();
            assert_eq!(decode_wif(&wif, network).unwrap().as_bytes(), &bytes);
        }
    }

    #[test]
    fn test_wif_export_wrong_length() {
        let err = encode_wif(&KEY[..31], Network::Mainnet).unwrap_err();
        assert_eq!(
            err,
            Error::Encoding(kobe::Error::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn test_wif_import_wrong_network() {
        let err = decode_wif(MAINNET_WIF, Network::Testnet).unwrap_err();
        assert_eq!(
            err,
            Error::VersionMismatch {
                expected: 0xef,
                actual: 0x80
            }
        );
    }

    #[test]
    fn test_wif_import_uncompressed_rejected() {
        let err = decode_wif("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ", Network::Mainnet)
            .unwrap_err();
        assert_eq!(
            err,
            Error::Encoding(kobe::Error::InvalidLength {
                expected: 33,
                actual: 32
            })
        );
    }

    #[test]
    fn test_wif_import_bad_checksum() {
        let err = decode_wif("KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98618", Network::Mainnet)
            .unwrap_err();
        assert_eq!(err, Error::Encoding(kobe::Error::InvalidChecksum));
    }

    #[test]
    fn test_wif_import_bad_alphabet() {
        let err = decode_wif("0wdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617", Network::Mainnet)
            .unwrap_err();
        assert_eq!(err, Error::Encoding(kobe::Error::InvalidEncoding));
    }

    #[test]
    fn test_wif_import_bad_compression_flag() {
        let mut payload = KEY.to_vec();
        payload.push(0x02);
        let wif = kobe::encoding::base58check_encode(&[0x80], &payload);
        let err = decode_wif(&wif, Network::Mainnet).unwrap_err();
        assert_eq!(err, Error::InvalidCompressionFlag(0x02));
    }
}
