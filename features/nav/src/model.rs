//! Render model for the navigation bar.
//!
//! Everything here is a pure function of [`NavFlags`] (and, for [`NavbarLayout`], a viewport
//! width). The components only turn these values into views.

use deltaswap_core::{
    chains::chain_id_to_backend_name,
    constants::links::*,
    routes::{is_current_route, is_nft_page, is_pools_page},
    BackendChain, Breakpoint, Display, DisplayMap, ProfilePageStateType,
};

pub const MENU_ITEM_CLASS: &str =
    "px-3 py-2 rounded-xl text-base font-medium leading-6 text-muted-foreground no-underline hover:text-foreground transition-colors";
pub const ACTIVE_MENU_ITEM_CLASS: &str =
    "px-3 py-2 rounded-xl text-base font-medium leading-6 text-foreground bg-secondary no-underline";

pub const LEFT_SIDE_CONTAINER_CLASS: &str = "flex flex-row flex-nowrap items-center gap-3 w-full";
pub const RIGHT_SIDE_CONTAINER_CLASS: &str = "flex flex-row flex-nowrap items-center justify-end w-full";
pub const LOGO_CONTAINER_CLASS: &str = "flex items-center mr-3";

pub const LEFT_CHAIN_SELECTOR_DISPLAY: DisplayMap =
    DisplayMap::new(&[(Breakpoint::Sm, Display::Flex), (Breakpoint::Lg, Display::None)]);
pub const PAGE_TABS_DISPLAY: DisplayMap =
    DisplayMap::new(&[(Breakpoint::Sm, Display::None), (Breakpoint::Lg, Display::Flex)]);
pub const SEARCH_BAR_DISPLAY: DisplayMap = DisplayMap::new(&[
    (Breakpoint::Sm, Display::Flex),
    (Breakpoint::NavSearchInputVisible, Display::None),
]);
pub const RIGHT_CHAIN_SELECTOR_DISPLAY: DisplayMap =
    DisplayMap::new(&[(Breakpoint::Sm, Display::None), (Breakpoint::Lg, Display::Flex)]);
pub const POOLS_TAB_DISPLAY: DisplayMap = DisplayMap::new(&[
    (Breakpoint::Sm, Display::Flex),
    (Breakpoint::Lg, Display::None),
    (Breakpoint::Xxl, Display::Flex),
]);

/// How a [`crate::MenuItem`] navigates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Opens in a new browsing context, without opener or referrer.
    External,
    /// Client-side route transition.
    Internal,
}

impl LinkKind {
    pub fn of(href: &str) -> Self {
        if href.starts_with("https") || href.starts_with("//") {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }

    pub const fn target(self) -> Option<&'static str> {
        match self {
            LinkKind::External => Some("_blank"),
            LinkKind::Internal => None,
        }
    }

    pub const fn rel(self) -> Option<&'static str> {
        match self {
            LinkKind::External => Some("noopener noreferrer"),
            LinkKind::Internal => None,
        }
    }
}

pub const fn menu_item_class(is_active: bool) -> &'static str {
    if is_active {
        ACTIVE_MENU_ITEM_CLASS
    } else {
        MENU_ITEM_CLASS
    }
}

/// Snapshot of everything the nav bar reads from the app-wide providers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavFlags {
    pub pathname: String,
    pub chain_id: Option<u64>,
    pub is_nft_page: bool,
    pub is_pools_page: bool,
    pub should_disable_nft_routes: bool,
    pub sell_page_state: ProfilePageStateType,
}

impl NavFlags {
    pub fn new(
        pathname: impl Into<String>,
        chain_id: Option<u64>,
        should_disable_nft_routes: bool,
        sell_page_state: ProfilePageStateType,
    ) -> Self {
        let pathname = pathname.into();
        Self {
            is_nft_page: is_nft_page(&pathname),
            is_pools_page: is_pools_page(&pathname),
            pathname,
            chain_id,
            should_disable_nft_routes,
            sell_page_state,
        }
    }
}

/// One rendered navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
    pub id: Option<&'static str>,
    pub test_id: Option<&'static str>,
    pub display: Option<DisplayMap>,
    pub is_active: bool,
}

impl NavEntry {
    pub fn kind(&self) -> LinkKind {
        LinkKind::of(self.href)
    }
}

struct LinkTemplate {
    href: &'static str,
    label: &'static str,
    id: Option<&'static str>,
    test_id: Option<&'static str>,
    display: Option<DisplayMap>,
    visible: fn(&NavFlags) -> bool,
    active: fn(&NavFlags, &'static str) -> bool,
}

impl LinkTemplate {
    const fn link(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            id: None,
            test_id: None,
            display: None,
            visible: always,
            active: is_current_internal_route,
        }
    }

    fn entry(&self, flags: &NavFlags) -> Option<NavEntry> {
        (self.visible)(flags).then(|| NavEntry {
            href: self.href,
            label: self.label,
            id: self.id,
            test_id: self.test_id,
            display: self.display,
            is_active: (self.active)(flags, self.href),
        })
    }
}

fn always(_: &NavFlags) -> bool {
    true
}

fn is_current_internal_route(flags: &NavFlags, href: &'static str) -> bool {
    LinkKind::of(href) == LinkKind::Internal && is_current_route(&flags.pathname, href)
}

const PAGE_TABS: [LinkTemplate; 4] = [
    LinkTemplate::link(SWAP_URL, "Swap"),
    LinkTemplate::link(STAKE_URL, "Stake"),
    LinkTemplate::link(BRIDGE_URL, "Bridge"),
    LinkTemplate {
        display: Some(POOLS_TAB_DISPLAY),
        active: |flags, _| flags.is_pools_page,
        ..LinkTemplate::link(POOLS_URL, "Pools")
    },
];

const DROPDOWN: [LinkTemplate; 5] = [
    LinkTemplate {
        id: Some("tokens-nav-link"),
        ..LinkTemplate::link(TOKENS_PATH, "Tokens")
    },
    LinkTemplate {
        id: Some("nft-nav-link"),
        test_id: Some("nft-nav-link"),
        visible: |flags| !flags.should_disable_nft_routes,
        ..LinkTemplate::link(NFTS_PATH, "NFTs")
    },
    LinkTemplate::link(VOTE_URL, "Vote"),
    LinkTemplate::link(ANALYTICS_URL, "Analytics"),
    LinkTemplate::link(DOCS_URL, "Docs"),
];

fn entries(templates: &[LinkTemplate], flags: &NavFlags) -> Vec<NavEntry> {
    templates.iter().filter_map(|template| template.entry(flags)).collect()
}

/// The page tabs for one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTabsModel {
    pub entries: Vec<NavEntry>,
    pub chain_name: BackendChain,
    pub should_disable_nft_routes: bool,
}

impl PageTabsModel {
    pub fn new(flags: &NavFlags) -> Self {
        Self {
            entries: entries(&PAGE_TABS, flags),
            chain_name: chain_id_to_backend_name(flags.chain_id),
            should_disable_nft_routes: flags.should_disable_nft_routes,
        }
    }
}

/// Secondary links behind the overflow menu.
pub fn dropdown_entries(flags: &NavFlags) -> Vec<NavEntry> {
    entries(&DROPDOWN, flags)
}

/// What can happen to the overflow menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    Toggle,
    ClickedOutside,
    EntryChosen,
}

impl DropdownEvent {
    /// Whether the menu is open after this event.
    pub const fn apply(self, is_open: bool) -> bool {
        match self {
            DropdownEvent::Toggle => !is_open,
            DropdownEvent::ClickedOutside | DropdownEvent::EntryChosen => false,
        }
    }
}

/// The regions of the [`crate::Navbar`], in render order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavbarRegion {
    Blur,
    Logo,
    LeftChainSelector,
    PageTabs,
    SearchBar,
    Bag,
    RightChainSelector,
    Web3Status,
}

impl NavbarRegion {
    pub const ALL: [NavbarRegion; 8] = [
        NavbarRegion::Blur,
        NavbarRegion::Logo,
        NavbarRegion::LeftChainSelector,
        NavbarRegion::PageTabs,
        NavbarRegion::SearchBar,
        NavbarRegion::Bag,
        NavbarRegion::RightChainSelector,
        NavbarRegion::Web3Status,
    ];

    /// Breakpoint rules for regions rendered inside a responsive box.
    pub const fn display(self) -> Option<DisplayMap> {
        match self {
            NavbarRegion::LeftChainSelector => Some(LEFT_CHAIN_SELECTOR_DISPLAY),
            NavbarRegion::PageTabs => Some(PAGE_TABS_DISPLAY),
            NavbarRegion::SearchBar => Some(SEARCH_BAR_DISPLAY),
            NavbarRegion::RightChainSelector => Some(RIGHT_CHAIN_SELECTOR_DISPLAY),
            NavbarRegion::Blur
            | NavbarRegion::Logo
            | NavbarRegion::Bag
            | NavbarRegion::Web3Status => None,
        }
    }
}

/// The inputs the [`crate::Navbar`] decides its mounts from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarInput {
    pub blur: bool,
    pub is_nft_page: bool,
    pub sell_page_state: ProfilePageStateType,
}

impl NavbarInput {
    pub fn shows_bag(&self) -> bool {
        self.is_nft_page && self.sell_page_state != ProfilePageStateType::Listing
    }

    pub fn shows_chain_selector(&self) -> bool {
        !self.is_nft_page
    }

    /// Whether `region` is in the tree at all. Breakpoints are applied on top by the browser.
    pub fn mounts(&self, region: NavbarRegion) -> bool {
        match region {
            NavbarRegion::Blur => self.blur,
            NavbarRegion::Bag => self.shows_bag(),
            NavbarRegion::LeftChainSelector | NavbarRegion::RightChainSelector => {
                self.shows_chain_selector()
            }
            NavbarRegion::Logo
            | NavbarRegion::PageTabs
            | NavbarRegion::SearchBar
            | NavbarRegion::Web3Status => true,
        }
    }

    pub fn is_visible(&self, region: NavbarRegion, width: u32) -> bool {
        self.mounts(region) && region.display().map_or(true, |display| display.is_visible(width))
    }
}

/// Which parts of the nav bar are visible at a given viewport width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavbarLayout {
    pub blur: bool,
    pub logo: bool,
    pub left_chain_selector: bool,
    pub page_tabs: bool,
    pub search_bar: bool,
    pub bag: bool,
    pub right_chain_selector: bool,
    pub web3_status: bool,
}

impl NavbarLayout {
    pub fn project(input: &NavbarInput, width: u32) -> Self {
        let visible = |region| input.is_visible(region, width);
        Self {
            blur: visible(NavbarRegion::Blur),
            logo: visible(NavbarRegion::Logo),
            left_chain_selector: visible(NavbarRegion::LeftChainSelector),
            page_tabs: visible(NavbarRegion::PageTabs),
            search_bar: visible(NavbarRegion::SearchBar),
            bag: visible(NavbarRegion::Bag),
            right_chain_selector: visible(NavbarRegion::RightChainSelector),
            web3_status: visible(NavbarRegion::Web3Status),
        }
    }

    pub fn chain_selectors(&self) -> usize {
        usize::from(self.left_chain_selector) + usize::from(self.right_chain_selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_and_protocol_relative_hrefs_are_external() {
        for href in ["https://example.org", "https", "//cdn.example.org/x"] {
            let kind = LinkKind::of(href);
            assert_eq!(kind, LinkKind::External, "{href}");
            assert_eq!(kind.target(), Some("_blank"));
            assert_eq!(kind.rel(), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn everything_else_is_internal() {
        for href in ["/swap", "swap", "http://example.org", "", "#/pools", "/\\/x"] {
            let kind = LinkKind::of(href);
            assert_eq!(kind, LinkKind::Internal, "{href}");
            assert_eq!(kind.target(), None);
            assert_eq!(kind.rel(), None);
        }
    }

    #[test]
    fn active_class_follows_flag() {
        assert_eq!(menu_item_class(true), ACTIVE_MENU_ITEM_CLASS);
        assert_eq!(menu_item_class(false), MENU_ITEM_CLASS);
    }

    #[test]
    fn flags_derive_page_predicates_from_path() {
        let flags = NavFlags::new("/nfts/profile", Some(1), false, ProfilePageStateType::Listing);
        assert!(flags.is_nft_page);
        assert!(!flags.is_pools_page);

        let flags = NavFlags::new("/pools", None, false, ProfilePageStateType::default());
        assert!(!flags.is_nft_page);
        assert!(flags.is_pools_page);
    }

    #[test]
    fn dropdown_hides_nfts_when_routes_disabled() {
        let enabled = NavFlags::new("/swap", None, false, ProfilePageStateType::default());
        let labels: Vec<_> = dropdown_entries(&enabled).iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Tokens", "NFTs", "Vote", "Analytics", "Docs"]);

        let disabled = NavFlags {
            should_disable_nft_routes: true,
            ..enabled
        };
        let labels: Vec<_> = dropdown_entries(&disabled).iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Tokens", "Vote", "Analytics", "Docs"]);
    }

    #[test]
    fn dropdown_closes_on_outside_click_and_choice() {
        assert!(DropdownEvent::Toggle.apply(false));
        assert!(!DropdownEvent::Toggle.apply(true));
        for is_open in [true, false] {
            assert!(!DropdownEvent::ClickedOutside.apply(is_open));
            assert!(!DropdownEvent::EntryChosen.apply(is_open));
        }
    }

    #[test]
    fn only_chain_selectors_tabs_and_search_are_responsive() {
        let responsive: Vec<_> = NavbarRegion::ALL
            .into_iter()
            .filter(|region| region.display().is_some())
            .collect();
        assert_eq!(
            responsive,
            [
                NavbarRegion::LeftChainSelector,
                NavbarRegion::PageTabs,
                NavbarRegion::SearchBar,
                NavbarRegion::RightChainSelector,
            ]
        );
    }

    #[test]
    fn internal_dropdown_link_is_active_on_its_route() {
        let flags = NavFlags::new("/tokens/ethereum", None, false, ProfilePageStateType::default());
        let entries = dropdown_entries(&flags);
        let tokens = entries.iter().find(|e| e.label == "Tokens").unwrap();
        let docs = entries.iter().find(|e| e.label == "Docs").unwrap();

        assert!(tokens.is_active);
        assert_eq!(tokens.kind(), LinkKind::Internal);
        assert!(!docs.is_active);
        assert_eq!(docs.kind(), LinkKind::External);
    }
}
