use serde::{Deserialize, Serialize};

/// Which step of the NFT profile (sell) flow is showing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfilePageStateType {
    #[default]
    ViewProfile,
    Listing,
}
