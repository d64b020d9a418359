use crate::Error;
use leptos::prelude::window;

pub fn alert(msg: impl AsRef<str>) {
    let _ = window().alert_with_message(msg.as_ref());
}

pub fn shorten_address(address: impl ToString) -> String {
    let address = address.to_string();
    let len = address.chars().count();
    if len > 10 {
        let head: String = address.chars().take(6).collect();
        let tail: String = address.chars().skip(len - 4).collect();
        format!("{head}...{tail}")
    } else {
        address // Return the address as is if it's too short to shorten
    }
}

/// Parses a `0x`-prefixed chain id, as reported by `eth_chainId` and `chainChanged`.
pub fn parse_hex_chain_id(value: &str) -> Result<u64, Error> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| Error::generic(format!("chain id {value:?} is not hex")))?;

    u64::from_str_radix(digits, 16).map_err(Error::from)
}

/// Destination of a submitted search, or `None` if there is nothing to search for.
pub fn search_href(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(format!(
            "{}?search={}",
            crate::constants::links::TOKENS_PATH,
            urlencoding::encode(query)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses() {
        assert_eq!(
            shorten_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            "0x5aAe...eAed"
        );
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn shortens_by_characters_not_bytes() {
        assert_eq!(shorten_address("ééééééééééé"), "éééééé...éééé");
        assert_eq!(shorten_address("0xé1234567890ü"), "0xé123...890ü");
        assert_eq!(shorten_address("ü123456789"), "ü123456789");
    }

    #[test]
    fn parses_hex_chain_ids() {
        assert_eq!(parse_hex_chain_id("0x1"), Ok(1));
        assert_eq!(parse_hex_chain_id("0x89"), Ok(137));
        assert_eq!(parse_hex_chain_id("0XA4B1"), Ok(42161));
        assert!(parse_hex_chain_id("137").is_err());
        assert!(parse_hex_chain_id("0xzz").is_err());
    }

    #[test]
    fn search_href_encodes_query() {
        assert_eq!(search_href("  "), None);
        assert_eq!(search_href("usdc").as_deref(), Some("/tokens?search=usdc"));
        assert_eq!(
            search_href(" wrapped eth&co ").as_deref(),
            Some("/tokens?search=wrapped%20eth%26co")
        );
    }
}
