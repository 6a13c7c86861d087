//! Avalanche network types.

use core::fmt;
use core::str::FromStr;

/// Supported Avalanche networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// Avalanche mainnet.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "main", alias = "avax"))]
    Mainnet,
    /// Local or test network.
    #[cfg_attr(feature = "serde", serde(alias = "test", alias = "local"))]
    Testnet,
}

impl Network {
    /// Select the network from a host configuration's `is_testnet` flag.
    #[inline]
    #[must_use]
    pub const fn from_testnet(is_testnet: bool) -> Self {
        if is_testnet {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }

    /// Whether this is the test network.
    #[inline]
    #[must_use]
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Testnet)
    }

    /// Get network name as string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an invalid network string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNetworkError;

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid network, expected: mainnet or testnet")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if ["mainnet", "main", "avax"]
            .iter()
            .any(|n| name.eq_ignore_ascii_case(n))
        {
            Ok(Self::Mainnet)
        } else if ["testnet", "test", "local"]
            .iter()
            .any(|n| name.eq_ignore_ascii_case(n))
        {
            Ok(Self::Testnet)
        } else {
            Err(ParseNetworkError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_testnet_flag() {
        assert_eq!(Network::from_testnet(false), Network::Mainnet);
        assert_eq!(Network::from_testnet(true), Network::Testnet);
        assert!(Network::from_testnet(true).is_testnet());
        assert!(!Network::from_testnet(false).is_testnet());
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("AVAX".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("local".parse::<Network>().unwrap(), Network::Testnet);
    }

    #[test]
    fn test_network_from_str_invalid() {
        assert_eq!("fuji".parse::<Network>(), Err(ParseNetworkError));
        assert_eq!("".parse::<Network>(), Err(ParseNetworkError));
    }

    #[test]
    fn test_network_default_and_display() {
        assert_eq!(Network::default(), Network::Mainnet);
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }
}
