//! Display formatting for record fields.

use serde::{Deserialize, Serialize};

/// Shown wherever an optional field is absent or empty.
pub const NOT_AVAILABLE: &str = "N/A";

/// Digit grouping for population figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// `en-IN`: last three digits, then pairs (`6,70,00,000`).
    #[default]
    Indian,
    /// Groups of three (`67,000,000`).
    International,
}

impl Grouping {
    pub fn label(self) -> &'static str {
        match self {
            Grouping::Indian => "indian",
            Grouping::International => "international",
        }
    }

    pub fn parse(v: &str) -> Option<Grouping> {
        match v.trim().to_ascii_lowercase().as_str() {
            "indian" | "en-in" | "in" => Some(Grouping::Indian),
            "international" | "en-us" | "western" => Some(Grouping::International),
            _ => None,
        }
    }

    pub fn format(self, n: u64) -> String {
        let digits = n.to_string();
        let len = digits.len();
        if len <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(len - 3);
        let step = match self {
            Grouping::Indian => 2,
            Grouping::International => 3,
        };

        let mut out = String::with_capacity(len + len / 2);
        // The leading group takes whatever is left over after full steps.
        let lead = match head.len() % step {
            0 => step,
            r => r,
        };
        out.push_str(&head[..lead]);
        let mut i = lead;
        while i < head.len() {
            out.push(',');
            out.push_str(&head[i..i + step]);
            i += step;
        }
        out.push(',');
        out.push_str(tail);
        out
    }
}

/// Joins with ", ", or [`NOT_AVAILABLE`] when there is nothing to join.
pub fn join_or_na<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined = items.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        let g = Grouping::Indian;
        assert_eq!(g.format(0), "0");
        assert_eq!(g.format(999), "999");
        assert_eq!(g.format(1_000), "1,000");
        assert_eq!(g.format(12_345), "12,345");
        assert_eq!(g.format(123_456), "1,23,456");
        assert_eq!(g.format(67_000_000), "6,70,00,000");
        assert_eq!(g.format(1_380_004_385), "1,38,00,04,385");
    }

    #[test]
    fn international_grouping() {
        let g = Grouping::International;
        assert_eq!(g.format(1_000), "1,000");
        assert_eq!(g.format(123_456), "123,456");
        assert_eq!(g.format(67_000_000), "67,000,000");
        assert_eq!(g.format(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn grouping_names_parse() {
        assert_eq!(Grouping::parse("en-IN"), Some(Grouping::Indian));
        assert_eq!(Grouping::parse(" International "), Some(Grouping::International));
        assert_eq!(Grouping::parse("metric"), None);
    }

    #[test]
    fn joins_fall_back_to_na() {
        assert_eq!(join_or_na(["Lima"]), "Lima");
        assert_eq!(
            join_or_na(["Pretoria", "Bloemfontein", "Cape Town"]),
            "Pretoria, Bloemfontein, Cape Town"
        );
        assert_eq!(join_or_na(std::iter::empty::<&str>()), "N/A");
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(Some("Melanesia")), "Melanesia");
    }
}
