//! List-view card model.

use serde::Serialize;

use crate::dataset::CountryRecord;
use crate::format::{or_na, Grouping};
use crate::route::Route;

/// What one card in the country list shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCard {
    pub name: String,
    pub flag: String,
    pub population: String,
    pub region: String,
    /// First listed capital, or "N/A".
    pub capital: String,
    /// Where clicking the card leads.
    pub href: String,
}

impl CountryCard {
    pub fn from_record(record: &CountryRecord, grouping: Grouping) -> Self {
        Self {
            name: record.common_name().to_string(),
            flag: record.flag_url().to_string(),
            population: grouping.format(record.population),
            region: record.region.clone(),
            capital: or_na(record.capitals().first().map(String::as_str)),
            href: Route::detail(record.common_name()).path(),
        }
    }
}

pub fn cards<'a>(
    records: impl IntoIterator<Item = &'a CountryRecord>,
    grouping: Grouping,
) -> Vec<CountryCard> {
    records
        .into_iter()
        .map(|r| CountryCard::from_record(r, grouping))
        .collect()
}
