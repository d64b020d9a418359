use crate::chains::Chain;

// Compile-time configuration for the chain we expect users to be on
pub const DEFAULT_CHAIN: Chain = if cfg!(feature = "mainnet") {
    Chain::Ethereum
} else if cfg!(feature = "testnet") {
    Chain::Goerli
} else {
    Chain::Ethereum
};

// Height of the navigation bar, in pixels.
pub const NAV_HEIGHT: u32 = 72;

pub mod links {
    pub const SWAP_URL: &str =
        "https://3000-alfset-physicainterfae-z1ncymx2xii.ws-us106.gitpod.io/#/swap";
    pub const STAKE_URL: &str = "https://github.com/alfset/Portal-Bridge";
    pub const BRIDGE_URL: &str = "https://github.com/alfset/Portal-Bridge";
    pub const POOLS_URL: &str = "https://5173-deltaswapio-deltaswap-vl9t8cfk52f.ws-us106.gitpod.io/";

    pub const LOGO_URL: &str = POOLS_URL;
    pub const DOCS_URL: &str = "https://github.com/alfset/Portal-Bridge#readme";
    pub const VOTE_URL: &str = "https://vote.uniswapfoundation.org";
    pub const ANALYTICS_URL: &str = "https://info.uniswap.org/#/";

    pub const TOKENS_PATH: &str = "/tokens";
    pub const NFTS_PATH: &str = "/nfts";
    pub const NFT_PROFILE_PATH: &str = "/nfts/profile";
}

pub mod test_ids {
    pub const LOGO: &str = "uniswap-logo";
    pub const BLUR: &str = "nav-blur";
    pub const BAG: &str = "nav-bag";
    pub const CONNECT_WALLET: &str = "navbar-connect-wallet";
    pub const WEB3_STATUS_CONNECTED: &str = "web3-status-connected";
}

pub const SEARCH_PLACEHOLDER: &str = "Search tokens and NFT collections";
