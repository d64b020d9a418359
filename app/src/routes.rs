mod nfts;
mod pools;
mod swap;
mod tokens;

pub use nfts::{NftProfile, Nfts};
pub use pools::Pools;
pub use swap::Swap;
pub use tokens::Tokens;
