mod hooks;
mod menu_dropdown;
mod menu_item;
pub mod model;
mod navbar;
mod page_tabs;

pub use hooks::{use_is_nft_page, use_nav_flags};
pub use menu_dropdown::MenuDropdown;
pub use menu_item::MenuItem;
pub use navbar::Navbar;
pub use page_tabs::PageTabs;
