//! Breakpoints and declarative display maps.
//!
//! A [`DisplayMap`] says how an element is displayed from each listed breakpoint upwards. It is
//! turned into Tailwind classes for the browser to evaluate, and can be resolved against a
//! viewport width directly.

use std::fmt;

/// Named viewport-width thresholds, ordered from narrowest to widest.
///
/// `Sm` is the base condition with no minimum width. The screens in `tailwind.config.js` must
/// stay in sync with [`Breakpoint::min_width`] and [`Breakpoint::prefix`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    NavSearchInputVisible,
    Xl,
    Xxl,
    Xxxl,
}

impl Breakpoint {
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Sm => 0,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::NavSearchInputVisible => 1100,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
            Breakpoint::Xxxl => 1920,
        }
    }

    /// Tailwind screen variant, or `None` for the base condition.
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Breakpoint::Sm => None,
            Breakpoint::Md => Some("md"),
            Breakpoint::Lg => Some("lg"),
            Breakpoint::NavSearchInputVisible => Some("nav-search"),
            Breakpoint::Xl => Some("xl"),
            Breakpoint::Xxl => Some("2xl"),
            Breakpoint::Xxxl => Some("3xl"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Display {
    None,
    Flex,
    Block,
}

impl Display {
    pub const fn class(self) -> &'static str {
        match self {
            Display::None => "hidden",
            Display::Flex => "flex",
            Display::Block => "block",
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplayMap {
    rules: &'static [(Breakpoint, Display)],
}

impl DisplayMap {
    pub const fn new(rules: &'static [(Breakpoint, Display)]) -> Self {
        Self { rules }
    }

    /// Mobile-first: the widest listed breakpoint that applies wins. Elements with no
    /// applicable rule keep their default `block` display.
    pub fn resolve(&self, width: u32) -> Display {
        self.rules
            .iter()
            .filter(|(bp, _)| bp.min_width() <= width)
            .max_by_key(|(bp, _)| *bp)
            .map(|(_, display)| *display)
            .unwrap_or(Display::Block)
    }

    pub fn is_visible(&self, width: u32) -> bool {
        self.resolve(width) != Display::None
    }

    pub fn class(&self) -> String {
        let mut rules = self.rules.to_vec();
        rules.sort_by_key(|(bp, _)| *bp);
        rules
            .into_iter()
            .map(|(bp, display)| match bp.prefix() {
                Some(prefix) => format!("{prefix}:{}", display.class()),
                None => display.class().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOLS: DisplayMap = DisplayMap::new(&[
        (Breakpoint::Sm, Display::Flex),
        (Breakpoint::Lg, Display::None),
        (Breakpoint::Xxl, Display::Flex),
    ]);

    #[test]
    fn resolves_mobile_first() {
        assert_eq!(POOLS.resolve(375), Display::Flex);
        assert_eq!(POOLS.resolve(900), Display::Flex);
        assert_eq!(POOLS.resolve(1024), Display::None);
        assert_eq!(POOLS.resolve(1535), Display::None);
        assert_eq!(POOLS.resolve(1536), Display::Flex);
        assert_eq!(POOLS.resolve(2560), Display::Flex);
    }

    #[test]
    fn defaults_to_block_without_base_rule() {
        let map = DisplayMap::new(&[(Breakpoint::Lg, Display::None)]);
        assert_eq!(map.resolve(320), Display::Block);
        assert!(map.is_visible(320));
        assert!(!map.is_visible(1280));
    }

    #[test]
    fn class_is_sorted_and_prefixed() {
        assert_eq!(POOLS.class(), "flex lg:hidden 2xl:flex");

        let unordered = DisplayMap::new(&[
            (Breakpoint::NavSearchInputVisible, Display::None),
            (Breakpoint::Sm, Display::Flex),
        ]);
        assert_eq!(unordered.class(), "flex nav-search:hidden");
    }
}
