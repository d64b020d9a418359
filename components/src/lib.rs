mod bag;
mod blur;
mod chain_selector;
mod loading_modal;
mod logo;
mod responsive_box;
mod search_bar;
mod spinner;
mod web3_status;

pub use bag::Bag;
pub use blur::Blur;
pub use chain_selector::ChainSelector;
pub use loading_modal::LoadingModal;
pub use logo::LogoIcon;
pub use responsive_box::ResponsiveBox;
pub use search_bar::SearchBar;
pub use spinner::Spinner;
pub use web3_status::Web3Status;
