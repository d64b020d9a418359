use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Networks the chain selector knows how to switch to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Ethereum,
    Goerli,
    Optimism,
    OptimismGoerli,
    Arbitrum,
    ArbitrumGoerli,
    Polygon,
    PolygonMumbai,
    Celo,
    CeloAlfajores,
    Bnb,
}

impl Chain {
    pub const ALL: [Chain; 11] = [
        Chain::Ethereum,
        Chain::Optimism,
        Chain::Arbitrum,
        Chain::Polygon,
        Chain::Celo,
        Chain::Bnb,
        Chain::Goerli,
        Chain::OptimismGoerli,
        Chain::ArbitrumGoerli,
        Chain::PolygonMumbai,
        Chain::CeloAlfajores,
    ];

    pub const fn id(self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::Goerli => 5,
            Chain::Optimism => 10,
            Chain::OptimismGoerli => 420,
            Chain::Arbitrum => 42161,
            Chain::ArbitrumGoerli => 421613,
            Chain::Polygon => 137,
            Chain::PolygonMumbai => 80001,
            Chain::Celo => 42220,
            Chain::CeloAlfajores => 44787,
            Chain::Bnb => 56,
        }
    }

    pub fn from_id(id: u64) -> Option<Chain> {
        Chain::ALL.into_iter().find(|chain| chain.id() == id)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Goerli => "Görli",
            Chain::Optimism => "Optimism",
            Chain::OptimismGoerli => "Optimism Görli",
            Chain::Arbitrum => "Arbitrum",
            Chain::ArbitrumGoerli => "Arbitrum Goerli",
            Chain::Polygon => "Polygon",
            Chain::PolygonMumbai => "Polygon Mumbai",
            Chain::Celo => "Celo",
            Chain::CeloAlfajores => "Celo Alfajores",
            Chain::Bnb => "BNB Chain",
        }
    }

    pub const fn is_testnet(self) -> bool {
        matches!(
            self,
            Chain::Goerli
                | Chain::OptimismGoerli
                | Chain::ArbitrumGoerli
                | Chain::PolygonMumbai
                | Chain::CeloAlfajores
        )
    }

    /// The `0x`-prefixed id expected by `wallet_switchEthereumChain`.
    pub fn hex_id(self) -> String {
        format!("{:#x}", self.id())
    }

    pub const fn backend(self) -> BackendChain {
        match self {
            Chain::Ethereum => BackendChain::Ethereum,
            Chain::Goerli => BackendChain::EthereumGoerli,
            Chain::Optimism | Chain::OptimismGoerli => BackendChain::Optimism,
            Chain::Arbitrum | Chain::ArbitrumGoerli => BackendChain::Arbitrum,
            Chain::Polygon | Chain::PolygonMumbai => BackendChain::Polygon,
            Chain::Celo | Chain::CeloAlfajores => BackendChain::Celo,
            Chain::Bnb => BackendChain::Bnb,
        }
    }

    /// Chains offered in the selector. Testnets are only listed on testnet builds.
    pub fn selectable() -> impl Iterator<Item = Chain> {
        Chain::ALL
            .into_iter()
            .filter(|chain| !chain.is_testnet() || cfg!(feature = "testnet"))
    }
}

impl TryFrom<u64> for Chain {
    type Error = Error;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Chain::from_id(id).ok_or(Error::UnsupportedChain(id))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chain names understood by the data backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackendChain {
    Ethereum,
    EthereumGoerli,
    Optimism,
    Arbitrum,
    Polygon,
    Celo,
    Bnb,
    UnknownChain,
}

impl BackendChain {
    pub const fn as_str(self) -> &'static str {
        match self {
            BackendChain::Ethereum => "ETHEREUM",
            BackendChain::EthereumGoerli => "ETHEREUM_GOERLI",
            BackendChain::Optimism => "OPTIMISM",
            BackendChain::Arbitrum => "ARBITRUM",
            BackendChain::Polygon => "POLYGON",
            BackendChain::Celo => "CELO",
            BackendChain::Bnb => "BNB",
            BackendChain::UnknownChain => "UNKNOWN_CHAIN",
        }
    }
}

impl fmt::Display for BackendChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing or unrecognized chain ids map to [`BackendChain::UnknownChain`].
pub fn chain_id_to_backend_name(chain_id: Option<u64>) -> BackendChain {
    chain_id
        .and_then(Chain::from_id)
        .map(Chain::backend)
        .unwrap_or(BackendChain::UnknownChain)
}
