//! Country records and the read-only dataset they live in.
//!
//! Records are decoded from the REST-Countries JSON shape. The dataset is
//! built once, indexed once, and never mutated afterwards.

use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use hashbrown::HashMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The dataset bundled with the crate.
pub const EMBEDDED_JSON: &str = include_str!("../data/countries.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// A JSON object decoded into a list of pairs, keeping document order.
///
/// Currency and language names are displayed in the order the dataset lists
/// them, which a hash map would lose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts or replaces. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = OrderedMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((k, v)) = access.next_entry::<String, V>()? {
                    map.insert(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// One country's static data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    pub cca3: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tld: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<OrderedMap<Currency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<OrderedMap<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Flags,
}

impl CountryRecord {
    /// A record with the required fields set and every optional field absent.
    pub fn new(
        common: impl Into<String>,
        official: impl Into<String>,
        region: impl Into<String>,
        cca3: impl Into<String>,
    ) -> Self {
        Self {
            name: CountryName {
                common: common.into(),
                official: official.into(),
            },
            cca3: cca3.into(),
            region: region.into(),
            subregion: None,
            population: 0,
            capital: None,
            tld: None,
            currencies: None,
            languages: None,
            borders: None,
            flags: Flags::default(),
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_subregion(mut self, subregion: impl Into<String>) -> Self {
        self.subregion = Some(subregion.into());
        self
    }

    pub fn with_capital<S: Into<String>>(mut self, capital: impl IntoIterator<Item = S>) -> Self {
        self.capital = Some(capital.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_borders<S: Into<String>>(mut self, codes: impl IntoIterator<Item = S>) -> Self {
        self.borders = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_flag(mut self, svg: impl Into<String>) -> Self {
        self.flags.svg = svg.into();
        self
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn flag_url(&self) -> &str {
        &self.flags.svg
    }

    pub fn capitals(&self) -> &[String] {
        self.capital.as_deref().unwrap_or_default()
    }

    pub fn top_level_domains(&self) -> &[String] {
        self.tld.as_deref().unwrap_or_default()
    }

    pub fn border_codes(&self) -> &[String] {
        self.borders.as_deref().unwrap_or_default()
    }

    pub fn currency_names(&self) -> impl Iterator<Item = &str> {
        self.currencies
            .iter()
            .flat_map(|m| m.values())
            .map(|c| c.name.as_str())
    }

    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .flat_map(|m| m.values())
            .map(String::as_str)
    }
}

/// The full, immutable collection of records plus its lookup indexes.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CountryRecord>,
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl Dataset {
    /// Indexes `records` by code and by lowercased common name.
    ///
    /// Both indexes keep the first record in dataset order when a key repeats.
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let mut by_code = HashMap::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for (idx, r) in records.iter().enumerate() {
            if by_code.contains_key(&r.cca3) {
                tracing::warn!(code = %r.cca3, "duplicate country code; keeping first");
            } else {
                by_code.insert(r.cca3.clone(), idx);
            }

            let key = r.name.common.to_lowercase();
            if by_name.contains_key(&key) {
                tracing::warn!(name = %r.name.common, "duplicate common name; keeping first");
            } else {
                by_name.insert(key, idx);
            }
        }

        Self {
            records,
            by_code,
            by_name,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_str(json).map_err(Error::Dataset)?;
        Ok(Self::new(records))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), records = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Decodes the dataset bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_JSON)
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&CountryRecord> {
        self.records.get(idx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive lookup by 3-letter code.
    pub fn by_code(&self, code: &str) -> Option<&CountryRecord> {
        self.by_code.get(code).map(|&idx| &self.records[idx])
    }

    /// Exact, case-insensitive lookup by common name.
    pub fn by_common_name(&self, name: &str) -> Option<&CountryRecord> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.records[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_decodes() {
        let ds = Dataset::embedded().unwrap();
        assert!(ds.len() > 20);
        for r in ds.records() {
            assert!(!r.common_name().trim().is_empty());
            assert!(!r.region.trim().is_empty());
            assert_eq!(r.cca3.len(), 3, "{}", r.common_name());
        }
    }

    #[test]
    fn embedded_codes_and_names_are_unique() {
        let ds = Dataset::embedded().unwrap();
        let mut codes: Vec<&str> = ds.records().iter().map(|r| r.cca3.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ds.len());

        let mut names: Vec<String> = ds
            .records()
            .iter()
            .map(|r| r.common_name().to_lowercase())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ds.len());
    }

    #[test]
    fn mappings_keep_document_order() {
        let ds = Dataset::embedded().unwrap();
        let belgium = ds.by_code("BEL").unwrap();
        let langs: Vec<&str> = belgium.language_names().collect();
        assert_eq!(langs, ["German", "French", "Dutch"]);
    }

    #[test]
    fn missing_optional_fields_decode_as_absent() {
        let json = r#"[{
            "name": { "common": "Nowhere", "official": "Republic of Nowhere" },
            "cca3": "NWH",
            "region": "Oceania",
            "population": 12,
            "someUnknownField": true
        }]"#;
        let ds = Dataset::from_json_str(json).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.subregion, None);
        assert!(r.capitals().is_empty());
        assert!(r.border_codes().is_empty());
        assert_eq!(r.currency_names().count(), 0);
        assert_eq!(r.flag_url(), "");
    }

    #[test]
    fn invalid_json_is_a_dataset_error() {
        let err = Dataset::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn code_lookup_is_exact() {
        let ds = Dataset::embedded().unwrap();
        assert_eq!(ds.by_code("PER").map(|r| r.common_name()), Some("Peru"));
        assert!(ds.by_code("per").is_none());
        assert!(ds.by_code("XYZ").is_none());
    }

    #[test]
    fn name_lookup_ignores_case_and_keeps_first_duplicate() {
        let ds = Dataset::new(vec![
            CountryRecord::new("Georgia", "Georgia", "Asia", "GEO"),
            CountryRecord::new("georgia", "State of Georgia", "Americas", "GGA"),
        ]);
        let hit = ds.by_common_name("GEORGIA").unwrap();
        assert_eq!(hit.cca3, "GEO");
        assert!(ds.by_common_name("Georg").is_none());
    }

    #[test]
    fn ordered_map_replaces_in_place() {
        let mut m: OrderedMap<u32> = [("b", 1), ("a", 2)].into_iter().collect();
        m.insert("b", 3);
        let pairs: Vec<(&str, u32)> = m.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs, [("b", 3), ("a", 2)]);
    }
}
