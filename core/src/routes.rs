use crate::constants::links::NFTS_PATH;

const POOLS_PREFIXES: [&str; 6] = ["/pools", "/pool", "/add", "/remove", "/increase", "/migrate/v2"];

pub fn is_nft_page(pathname: &str) -> bool {
    pathname.starts_with(NFTS_PATH)
}

pub fn is_pools_page(pathname: &str) -> bool {
    POOLS_PREFIXES
        .iter()
        .any(|prefix| pathname.starts_with(prefix))
}

/// Whether an in-app `href` points at the current page or one of its children.
pub fn is_current_route(pathname: &str, href: &str) -> bool {
    let href = href.trim_end_matches('/');
    if href.is_empty() {
        return pathname == "/";
    }
    match pathname.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nft_pages() {
        assert!(is_nft_page("/nfts"));
        assert!(is_nft_page("/nfts/profile"));
        assert!(!is_nft_page("/swap"));
        assert!(!is_nft_page("/"));
    }

    #[test]
    fn pools_pages() {
        assert!(is_pools_page("/pools"));
        assert!(is_pools_page("/pool/42"));
        assert!(is_pools_page("/add/ETH"));
        assert!(is_pools_page("/migrate/v2"));
        assert!(!is_pools_page("/swap"));
        assert!(!is_pools_page("/migrate/v3"));
    }

    #[test]
    fn current_route_matches_segments() {
        assert!(is_current_route("/tokens", "/tokens"));
        assert!(is_current_route("/tokens/ethereum", "/tokens"));
        assert!(!is_current_route("/tokensale", "/tokens"));
        assert!(is_current_route("/", "/"));
        assert!(!is_current_route("/swap", "/"));
    }
}
