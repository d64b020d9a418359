use deltaswap_core::{
    chains::BackendChain,
    ProfilePageStateType::{self, Listing, ViewProfile},
};
use deltaswap_nav::model::{
    dropdown_entries, LinkKind, NavFlags, NavbarInput, NavbarLayout, NavbarRegion, PageTabsModel,
    POOLS_TAB_DISPLAY,
};

const SM: u32 = 375;
const MD: u32 = 800;
const LG: u32 = 1024;
const XL: u32 = 1280;
const XXL: u32 = 1536;

const WIDTHS: [u32; 5] = [SM, MD, LG, XL, XXL];

fn input(blur: bool, is_nft_page: bool, sell_page_state: ProfilePageStateType) -> NavbarInput {
    NavbarInput {
        blur,
        is_nft_page,
        sell_page_state,
    }
}

#[test]
fn bag_shows_on_nft_page_unless_listing() {
    for width in WIDTHS {
        let viewing = NavbarLayout::project(&input(false, true, ViewProfile), width);
        assert!(viewing.bag, "width {width}");

        for blur in [true, false] {
            let listing = NavbarLayout::project(&input(blur, true, Listing), width);
            assert!(!listing.bag, "width {width}, blur {blur}");
        }

        let off_nft = NavbarLayout::project(&input(false, false, ViewProfile), width);
        assert!(!off_nft.bag, "width {width}");
    }
}

#[test]
fn no_chain_selector_on_nft_page() {
    for width in WIDTHS {
        for state in [ViewProfile, Listing] {
            let layout = NavbarLayout::project(&input(false, true, state), width);
            assert_eq!(layout.chain_selectors(), 0, "width {width}");
        }
    }
}

#[test]
fn exactly_one_chain_selector_off_nft_page() {
    for width in WIDTHS {
        let layout = NavbarLayout::project(&input(false, false, ViewProfile), width);
        assert_eq!(layout.chain_selectors(), 1, "width {width}");
        assert_eq!(layout.left_chain_selector, width < LG);
        assert_eq!(layout.right_chain_selector, width >= LG);
    }
}

#[test]
fn blur_overlay_follows_flag() {
    let blurred = NavbarLayout::project(&input(true, false, ViewProfile), MD);
    assert!(blurred.blur);

    let clear = NavbarLayout::project(&input(false, false, ViewProfile), MD);
    assert!(!clear.blur);
}

#[test]
fn tabs_and_search_swap_places_by_width() {
    let narrow = NavbarLayout::project(&NavbarInput::default(), SM);
    assert!(!narrow.page_tabs);
    assert!(narrow.search_bar);

    let wide = NavbarLayout::project(&NavbarInput::default(), XL);
    assert!(wide.page_tabs);
    assert!(!wide.search_bar);

    for width in WIDTHS {
        let layout = NavbarLayout::project(&NavbarInput::default(), width);
        assert!(layout.logo);
        assert!(layout.web3_status);
    }
}

#[test]
fn page_tabs_have_three_fixed_entries_and_responsive_pools() {
    let flags = NavFlags::new("/swap", Some(1), false, ProfilePageStateType::default());
    let model = PageTabsModel::new(&flags);

    let labels: Vec<_> = model.entries.iter().map(|entry| entry.label).collect();
    assert_eq!(labels, ["Swap", "Stake", "Bridge", "Pools"]);

    let unconditional: Vec<_> = model
        .entries
        .iter()
        .filter(|entry| entry.display.is_none())
        .map(|entry| entry.label)
        .collect();
    assert_eq!(unconditional, ["Swap", "Stake", "Bridge"]);

    let pools = &model.entries[3];
    assert_eq!(pools.display, Some(POOLS_TAB_DISPLAY));
    assert!(POOLS_TAB_DISPLAY.is_visible(SM));
    assert!(!POOLS_TAB_DISPLAY.is_visible(LG));
    assert!(POOLS_TAB_DISPLAY.is_visible(XXL));
}

#[test]
fn page_tabs_link_out_of_the_app() {
    let flags = NavFlags::new("/", None, false, ProfilePageStateType::default());
    for entry in PageTabsModel::new(&flags).entries {
        assert_eq!(entry.kind(), LinkKind::External, "{}", entry.label);
    }
}

#[test]
fn pools_tab_is_active_on_pools_pages() {
    let on_pools = NavFlags::new("/pools", None, false, ProfilePageStateType::default());
    let model = PageTabsModel::new(&on_pools);
    let active: Vec<_> = model
        .entries
        .iter()
        .filter(|entry| entry.is_active)
        .map(|entry| entry.label)
        .collect();
    assert_eq!(active, ["Pools"]);

    let elsewhere = NavFlags::new("/tokens", None, false, ProfilePageStateType::default());
    assert!(PageTabsModel::new(&elsewhere)
        .entries
        .iter()
        .all(|entry| !entry.is_active));
}

#[test]
fn page_tabs_carry_chain_name_and_nft_flag() {
    let flags = NavFlags::new("/swap", Some(137), true, ProfilePageStateType::default());
    let model = PageTabsModel::new(&flags);
    assert_eq!(model.chain_name, BackendChain::Polygon);
    assert!(model.should_disable_nft_routes);
    assert_eq!(model.entries.len(), 4);

    let disconnected = NavFlags::new("/swap", None, false, ProfilePageStateType::default());
    assert_eq!(
        PageTabsModel::new(&disconnected).chain_name,
        BackendChain::UnknownChain
    );
}

#[test]
fn projection_is_pure() {
    for width in WIDTHS {
        for is_nft_page in [true, false] {
            for blur in [true, false] {
                let input = input(blur, is_nft_page, ViewProfile);
                assert_eq!(
                    NavbarLayout::project(&input, width),
                    NavbarLayout::project(&input, width)
                );
            }
        }
    }

    let flags = NavFlags::new("/nfts", Some(10), false, Listing);
    assert_eq!(PageTabsModel::new(&flags), PageTabsModel::new(&flags.clone()));
}

#[test]
fn mounted_regions_follow_page_context() {
    for blur in [true, false] {
        for is_nft_page in [true, false] {
            for state in [ViewProfile, Listing] {
                let input = input(blur, is_nft_page, state);
                let mounted: Vec<_> = NavbarRegion::ALL
                    .into_iter()
                    .filter(|region| input.mounts(*region))
                    .collect();

                let blurs = mounted
                    .iter()
                    .filter(|region| **region == NavbarRegion::Blur)
                    .count();
                assert_eq!(blurs, usize::from(blur));

                assert_eq!(
                    mounted.contains(&NavbarRegion::Bag),
                    is_nft_page && state != Listing
                );
                assert_eq!(
                    mounted.contains(&NavbarRegion::LeftChainSelector),
                    !is_nft_page
                );
                assert_eq!(
                    mounted.contains(&NavbarRegion::RightChainSelector),
                    !is_nft_page
                );
                assert!(mounted.contains(&NavbarRegion::Logo));
                assert!(mounted.contains(&NavbarRegion::Web3Status));
            }
        }
    }
}

#[test]
fn layout_agrees_with_region_visibility() {
    for width in WIDTHS {
        for is_nft_page in [true, false] {
            let input = input(true, is_nft_page, ViewProfile);
            let layout = NavbarLayout::project(&input, width);
            assert_eq!(
                layout.page_tabs,
                input.is_visible(NavbarRegion::PageTabs, width)
            );
            assert_eq!(
                layout.search_bar,
                input.is_visible(NavbarRegion::SearchBar, width)
            );
            assert_eq!(layout.bag, input.is_visible(NavbarRegion::Bag, width));
        }
    }
}

#[test]
fn dropdown_lists_secondary_links() {
    let flags = NavFlags::new("/swap", None, false, ViewProfile);
    let labels: Vec<_> = dropdown_entries(&flags)
        .iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels, ["Tokens", "NFTs", "Vote", "Analytics", "Docs"]);
}
