//! Detail-view resolution: route segment -> record -> display model.

use serde::Serialize;

use crate::dataset::{CountryRecord, Dataset};
use crate::format::{join_or_na, or_na, Grouping};
use crate::route::{decode_component, Route};

/// One entry of the "Border Countries" row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BorderLink {
    /// The code resolved to a record; rendered as a navigation target.
    Country {
        code: String,
        name: String,
        href: String,
    },
    /// No record carries this code; rendered as inert text.
    Unresolved { code: String },
}

impl BorderLink {
    pub fn label(&self) -> &str {
        match self {
            BorderLink::Country { name, .. } => name.as_str(),
            BorderLink::Unresolved { code } => code.as_str(),
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            BorderLink::Country { href, .. } => Some(href.as_str()),
            BorderLink::Unresolved { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDetail {
    pub name: String,
    pub flag: String,
    pub flag_alt: String,
    pub native_name: String,
    pub population: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub top_level_domain: String,
    pub currencies: String,
    pub languages: String,
    /// Empty when the record lists no borders; the section is then omitted.
    pub borders: Vec<BorderLink>,
}

impl CountryDetail {
    pub fn from_record(dataset: &Dataset, record: &CountryRecord, grouping: Grouping) -> Self {
        let name = record.common_name().to_string();
        Self {
            flag: record.flag_url().to_string(),
            flag_alt: format!("{name} flag"),
            native_name: record.official_name().to_string(),
            population: grouping.format(record.population),
            region: record.region.clone(),
            subregion: or_na(record.subregion.as_deref()),
            capital: join_or_na(record.capitals().iter().map(String::as_str)),
            top_level_domain: join_or_na(record.top_level_domains().iter().map(String::as_str)),
            currencies: join_or_na(record.currency_names()),
            languages: join_or_na(record.language_names()),
            borders: resolve_borders(dataset, record),
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailView {
    Found(CountryDetail),
    /// `query` is the decoded route segment that matched nothing.
    NotFound { query: String },
}

impl DetailView {
    pub const NOT_FOUND_TITLE: &'static str = "Country not found";

    pub fn not_found_message(query: &str) -> String {
        format!("The country \"{query}\" could not be found.")
    }

    pub fn country(&self) -> Option<&CountryDetail> {
        match self {
            DetailView::Found(d) => Some(d),
            DetailView::NotFound { .. } => None,
        }
    }
}

/// Resolves a percent-encoded route segment against the full dataset.
///
/// Matching is exact on the common name, ignoring case. When names repeat,
/// the first record in dataset order wins.
pub fn resolve_detail(dataset: &Dataset, segment: &str, grouping: Grouping) -> DetailView {
    let query = decode_component(segment);
    match dataset.by_common_name(&query) {
        Some(record) => DetailView::Found(CountryDetail::from_record(dataset, record, grouping)),
        None => {
            tracing::debug!(%query, "no country with that name");
            DetailView::NotFound { query }
        }
    }
}

/// Maps each border code to its country's name, or keeps the raw code.
pub fn resolve_borders(dataset: &Dataset, record: &CountryRecord) -> Vec<BorderLink> {
    record
        .border_codes()
        .iter()
        .map(|code| match dataset.by_code(code) {
            Some(neighbour) => BorderLink::Country {
                code: code.clone(),
                name: neighbour.common_name().to_string(),
                href: Route::detail(neighbour.common_name()).path(),
            },
            None => {
                tracing::debug!(country = %record.cca3, %code, "dangling border code");
                BorderLink::Unresolved { code: code.clone() }
            }
        })
        .collect()
}
