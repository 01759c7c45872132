//! UI text and selector inventory that should be available on both wasm and
//! native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! controls' value mapping on the host.

use atlas::filter::Region;

pub const TITLE: &str = "Where in the world?";
pub const SEARCH_PLACEHOLDER: &str = "Search for a country...";
pub const REGION_PLACEHOLDER: &str = "Filter by Region";
pub const BORDER_HEADING: &str = "Border Countries:";
pub const BACK_LABEL: &str = "Back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionOption {
    /// `<option value=...>`; empty for "no region".
    pub value: &'static str,
    pub label: &'static str,
}

/// The region selector's options, unset first.
pub fn region_options() -> Vec<RegionOption> {
    std::iter::once(RegionOption {
        value: "",
        label: REGION_PLACEHOLDER,
    })
    .chain(Region::all().iter().map(|r| RegionOption {
        value: r.as_str(),
        label: r.as_str(),
    }))
    .collect()
}

pub fn region_value(region: Option<Region>) -> &'static str {
    region.map(Region::as_str).unwrap_or("")
}

/// Maps a selector value back to a region choice.
///
/// `None` means the value is not one the selector offers; the change is
/// ignored rather than applied.
pub fn parse_region_value(value: &str) -> Option<Option<Region>> {
    if value.is_empty() {
        return Some(None);
    }
    Region::from_value(value).map(Some)
}
