//! Read-only wallet configuration handed to the codec by its host.

use crate::{AvaxAddressDecoder, Network};

/// Host-supplied settings relevant to address conversion.
///
/// With the `serde` feature this deserializes from either
/// `{"network": "testnet"}` or the host's legacy `{"is_testnet": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawConfig"))]
pub struct WalletConfig {
    /// Network selected by the host.
    pub network: Network,
}

impl WalletConfig {
    /// Create a configuration for `network`.
    #[must_use]
    pub const fn new(network: Network) -> Self {
        Self { network }
    }

    /// Create a configuration from the host's `is_testnet` flag.
    #[must_use]
    pub const fn from_testnet(is_testnet: bool) -> Self {
        Self::new(Network::from_testnet(is_testnet))
    }

    /// The flag to pass to [`kobe::AddressDecoder`] operations.
    #[must_use]
    pub const fn is_testnet(&self) -> bool {
        self.network.is_testnet()
    }

    /// The codec for this configuration.
    #[must_use]
    pub const fn decoder(&self) -> AvaxAddressDecoder {
        AvaxAddressDecoder::new()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    #[serde(default)]
    network: Option<Network>,
    #[serde(default, alias = "isTestNet")]
    is_testnet: Option<bool>,
}

#[cfg(feature = "serde")]
impl From<RawConfig> for WalletConfig {
    fn from(raw: RawConfig) -> Self {
        match (raw.network, raw.is_testnet) {
            (Some(network), _) => Self::new(network),
            (None, Some(is_testnet)) => Self::from_testnet(is_testnet),
            (None, None) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_testnet() {
        assert_eq!(WalletConfig::from_testnet(true).network, Network::Testnet);
        assert!(WalletConfig::from_testnet(true).is_testnet());
        assert_eq!(WalletConfig::default().network, Network::Mainnet);
    }

    #[test]
    fn test_decoder_uses_config_flag() {
        use kobe::AddressDecoder;

        let config = WalletConfig::new(Network::Testnet);
        let address = config
            .decoder()
            .public_key_to_address(&[0x02; 33], config.is_testnet())
            .unwrap();
        assert!(address.starts_with("X-local1"));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_deserialize_network_name() {
            let config: WalletConfig = serde_json::from_str(r#"{"network":"testnet"}"#).unwrap();
            assert_eq!(config.network, Network::Testnet);
            let config: WalletConfig = serde_json::from_str(r#"{"network":"avax"}"#).unwrap();
            assert_eq!(config.network, Network::Mainnet);
        }

        #[test]
        fn test_deserialize_is_testnet_flag() {
            let config: WalletConfig = serde_json::from_str(r#"{"isTestNet":true}"#).unwrap();
            assert_eq!(config.network, Network::Testnet);
            let config: WalletConfig = serde_json::from_str(r#"{"is_testnet":false}"#).unwrap();
            assert_eq!(config.network, Network::Mainnet);
        }

        #[test]
        fn test_deserialize_empty_defaults_to_mainnet() {
            let config: WalletConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(config, WalletConfig::default());
        }

        #[test]
        fn test_serialize_roundtrip() {
            let json = serde_json::to_string(&WalletConfig::new(Network::Testnet)).unwrap();
            assert_eq!(json, r#"{"network":"testnet"}"#);
            let back: WalletConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back.network, Network::Testnet);
        }
    }
}
