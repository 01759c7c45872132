//! Search + region filtering over the full dataset.
//!
//! Always derived from the complete record list; there is no incremental
//! narrowing of a previous result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::{CountryRecord, Dataset};

/// The closed set of regions offered by the region selector.
///
/// Records may carry other region strings (e.g. "Antarctic"); those are only
/// reachable with no region selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }

    pub fn all() -> &'static [Region] {
        &[
            Region::Africa,
            Region::Americas,
            Region::Asia,
            Region::Europe,
            Region::Oceania,
        ]
    }

    /// Exact, case-sensitive match of a selector value.
    pub fn from_value(value: &str) -> Option<Region> {
        Region::all().iter().copied().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region {0:?} (expected one of Africa, Americas, Asia, Europe, Oceania)")]
pub struct UnknownRegion(pub String);

/// Lenient parse for typed input: surrounding whitespace and case are ignored.
impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Region::all()
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub search: String,
    pub region: Option<Region>,
}

impl FilterQuery {
    pub fn new(search: impl Into<String>, region: Option<Region>) -> Self {
        Self {
            search: search.into(),
            region,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty() && self.region.is_none()
    }

    pub fn matches(&self, record: &CountryRecord) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// A query with its search term normalized once.
struct Matcher {
    term: Option<String>,
    region: Option<Region>,
}

impl Matcher {
    fn new(query: &FilterQuery) -> Self {
        let trimmed = query.search.trim();
        Self {
            term: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
            region: query.region,
        }
    }

    fn matches(&self, record: &CountryRecord) -> bool {
        if let Some(term) = &self.term {
            let hit = record.name.common.to_lowercase().contains(term.as_str())
                || record.name.official.to_lowercase().contains(term.as_str());
            if !hit {
                return false;
            }
        }
        match self.region {
            Some(region) => record.region == region.as_str(),
            None => true,
        }
    }
}

/// Positions (in dataset order) of the records matching `query`.
pub fn filter_indices(dataset: &Dataset, query: &FilterQuery) -> Vec<usize> {
    if query.is_unfiltered() {
        return (0..dataset.len()).collect();
    }
    let matcher = Matcher::new(query);
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| matcher.matches(r))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn filter_countries<'a>(dataset: &'a Dataset, query: &FilterQuery) -> Vec<&'a CountryRecord> {
    let matcher = Matcher::new(query);
    dataset
        .records()
        .iter()
        .filter(|r| matcher.matches(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_countries() -> Dataset {
        Dataset::new(vec![
            CountryRecord::new("France", "French Republic", "Europe", "FRA")
                .with_population(67_000_000),
            CountryRecord::new("Peru", "Republic of Peru", "Americas", "PER")
                .with_population(33_000_000),
        ])
    }

    fn names(records: &[&CountryRecord]) -> Vec<String> {
        records.iter().map(|r| r.common_name().to_string()).collect()
    }

    fn region_choices() -> Vec<Option<Region>> {
        std::iter::once(None)
            .chain(Region::all().iter().copied().map(Some))
            .collect()
    }

    const TERMS: &[&str] = &["", "  ", "a", "fra", "REPUBLIC", " peru ", "ia", "zzz", "côte"];

    #[test]
    fn search_then_region_scenario() {
        let ds = two_countries();

        let q = FilterQuery::new("fra", None);
        assert_eq!(names(&filter_countries(&ds, &q)), ["France"]);

        let q = FilterQuery::new("fra", Some(Region::Europe));
        assert_eq!(names(&filter_countries(&ds, &q)), ["France"]);

        let q = FilterQuery::new("fra", Some(Region::Asia));
        assert!(filter_countries(&ds, &q).is_empty());
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let ds = Dataset::embedded().unwrap();
        let all = filter_indices(&ds, &FilterQuery::default());
        assert_eq!(all, (0..ds.len()).collect::<Vec<_>>());
        assert!(FilterQuery::new("   ", None).is_unfiltered());
    }

    #[test]
    fn search_is_case_insensitive() {
        let ds = Dataset::embedded().unwrap();
        let expected = filter_indices(&ds, &FilterQuery::new("France", None));
        assert!(!expected.is_empty());
        for t in ["frAnCe", "FRANCE", "  france  "] {
            assert_eq!(filter_indices(&ds, &FilterQuery::new(t, None)), expected);
        }
    }

    #[test]
    fn search_matches_official_name() {
        let ds = Dataset::embedded().unwrap();
        let hits = filter_countries(&ds, &FilterQuery::new("côte", None));
        assert_eq!(names(&hits), ["Ivory Coast"]);
    }

    #[test]
    fn region_match_is_exact() {
        let ds = Dataset::embedded().unwrap();
        let europe = filter_countries(&ds, &FilterQuery::new("", Some(Region::Europe)));
        assert!(!europe.is_empty());
        assert!(europe.iter().all(|r| r.region == "Europe"));

        // "Antarctic" is not an offered region, so it only shows unfiltered.
        for region in Region::all() {
            let q = FilterQuery::new("antarctica", Some(*region));
            assert!(filter_countries(&ds, &q).is_empty());
        }
        assert_eq!(
            filter_countries(&ds, &FilterQuery::new("antarctica", None)).len(),
            1
        );
    }

    #[test]
    fn region_match_is_case_sensitive() {
        let ds = Dataset::new(vec![
            CountryRecord::new("France", "French Republic", "Europe", "FRA"),
            CountryRecord::new("Lowland", "Lowland", "europe", "LOW"),
        ]);
        let q = FilterQuery::new("", Some(Region::Europe));
        assert_eq!(names(&filter_countries(&ds, &q)), ["France"]);
        assert_eq!(filter_indices(&ds, &q), [0]);
        assert_eq!(filter_indices(&ds, &FilterQuery::default()), [0, 1]);
    }

    #[test]
    fn combined_filter_narrows_both_ways() {
        let ds = Dataset::embedded().unwrap();
        for t in TERMS {
            for r in region_choices() {
                let both = filter_indices(&ds, &FilterQuery::new(*t, r));
                let only_search = filter_indices(&ds, &FilterQuery::new(*t, None));
                let only_region = filter_indices(&ds, &FilterQuery::new("", r));
                assert!(both.iter().all(|i| only_search.contains(i)), "{t:?} {r:?}");
                assert!(both.iter().all(|i| only_region.contains(i)), "{t:?} {r:?}");
            }
        }
    }

    #[test]
    fn filter_is_idempotent_and_order_independent() {
        let ds = Dataset::embedded().unwrap();
        for t in TERMS {
            for r in region_choices() {
                let q = FilterQuery::new(*t, r);
                let once = filter_indices(&ds, &q);
                assert_eq!(once, filter_indices(&ds, &q));

                // Region first, then search over that subset.
                let search_only = FilterQuery::new(*t, None);
                let region_then_search: Vec<usize> = filter_indices(&ds, &FilterQuery::new("", r))
                    .into_iter()
                    .filter(|&i| search_only.matches(&ds.records()[i]))
                    .collect();
                assert_eq!(once, region_then_search, "{t:?} {r:?}");
            }
        }
    }

    #[test]
    fn region_values_parse() {
        assert_eq!(Region::from_value("Asia"), Some(Region::Asia));
        assert_eq!(Region::from_value("asia"), None);
        assert_eq!(Region::from_value(""), None);
        assert_eq!(" europe ".parse::<Region>(), Ok(Region::Europe));
        assert!("Antarctic".parse::<Region>().is_err());
    }
}
