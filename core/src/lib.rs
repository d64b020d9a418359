pub mod chains;
pub mod constants;
mod error;
pub mod responsive;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;
pub mod wallet;

pub use chains::{BackendChain, Chain};
pub use constants::DEFAULT_CHAIN;
pub use error::Error;
pub use responsive::{Breakpoint, Display, DisplayMap};
pub use state::{BagState, FeatureFlags, ProfilePageState, Web3State};
pub use types::ProfilePageStateType;
