//! Country-of-origin statistics: the summary builder that produces
//! `country_analysis.json`, and the read-side helpers the Origins tab uses.

use std::collections::{BTreeMap, HashMap};

use crate::model::{CountryStat, CountryWord, LexicalRecord, OriginSummary};

const BUILTIN_ALIASES: &str = include_str!("country_aliases.json");

/// Labels that mark a record as naming a place.
pub const PLACE_LABELS: [&str; 2] = ["origin_country", "city_region"];
/// Countries shown in the share chart and ranking.
pub const CHART_COUNTRIES: usize = 10;
/// Words listed for the highlighted country.
pub const HIGHLIGHT_WORDS: usize = 5;

/// Maps place names (countries, demonyms, cities) to a canonical country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryAliases {
    aliases: HashMap<String, String>,
}

impl CountryAliases {
    /// Parses `{ "Canonical": ["alias", ...], ... }`. When an alias is listed
    /// under several countries, the one appearing last in key order wins.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let table: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let aliases = table
            .into_iter()
            .flat_map(|(country, names)| names.into_iter().map(move |name| (name, country.clone())))
            .collect();
        Ok(Self { aliases })
    }

    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_ALIASES).unwrap_or_else(|error| {
            tracing::error!(%error, "builtin country aliases are malformed");
            Self::default()
        })
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Builds the country summary from raw (unfiltered) records.
///
/// Only records labelled as a country or city take part, and only when their
/// English text maps to a known country.
pub fn summarize_origins(records: &[LexicalRecord], aliases: &CountryAliases) -> OriginSummary {
    let mut order: Vec<&str> = Vec::new();
    let mut frequencies: HashMap<&str, u64> = HashMap::new();
    let mut words: HashMap<&str, Vec<CountryWord>> = HashMap::new();

    for record in records {
        if !PLACE_LABELS.iter().any(|label| record.has_label(label)) {
            continue;
        }
        let Some(country) = aliases.resolve(&record.translated_text) else {
            tracing::trace!(word = %record.translated_text, "no country alias");
            continue;
        };

        if !frequencies.contains_key(country) {
            order.push(country);
        }
        *frequencies.entry(country).or_insert(0) += record.frequency;
        words.entry(country).or_default().push(CountryWord {
            zh: record.source_text.clone(),
            en: record.translated_text.clone(),
            frequency: record.frequency,
        });
    }

    let total: u64 = frequencies.values().sum();
    let mut countries: Vec<CountryStat> = order
        .into_iter()
        .map(|country| {
            let frequency = frequencies.get(country).copied().unwrap_or(0);
            let mut top_words = words.remove(country).unwrap_or_default();
            top_words.sort_by(|a, b| b.frequency.cmp(&a.frequency));
            CountryStat {
                name: country.to_string(),
                frequency,
                percentage: percentage(frequency, total),
                top_words,
            }
        })
        .collect();
    countries.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    OriginSummary {
        unique_countries: countries.len(),
        countries,
        total_mentions: total,
    }
}

/// Share of `total`, in percent, rounded to two decimals.
pub fn percentage(frequency: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (frequency as f64 / total as f64 * 10_000.0).round() / 100.0
}

impl OriginSummary {
    pub fn top_origin(&self) -> Option<&CountryStat> {
        self.countries.first()
    }

    pub fn leading(&self) -> &[CountryStat] {
        &self.countries[..self.countries.len().min(CHART_COUNTRIES)]
    }

    pub fn country(&self, name: &str) -> Option<&CountryStat> {
        self.countries.iter().find(|country| country.name == name)
    }

    /// Bar length for `country` relative to the leading country, in `0..=1`.
    pub fn bar_ratio(&self, country: &CountryStat) -> f64 {
        let max = self.top_origin().map_or(1, |top| top.frequency).max(1);
        (country.frequency as f64 / max as f64).clamp(0.0, 1.0)
    }
}

impl CountryStat {
    pub fn highlight_words(&self) -> &[CountryWord] {
        &self.top_words[..self.top_words.len().min(HIGHLIGHT_WORDS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(en: &str, frequency: u64, label: &str) -> LexicalRecord {
        LexicalRecord::new(format!("zh-{en}"), en, frequency, &[label])
    }

    #[test]
    fn builtin_aliases_cover_cities_and_demonyms() {
        let aliases = CountryAliases::builtin();

        assert_eq!(aliases.resolve("Sydney"), Some("Australia"));
        assert_eq!(aliases.resolve("Japanese"), Some("Japan"));
        assert_eq!(aliases.resolve("domestic"), Some("China"));
        assert_eq!(aliases.resolve("Birmingham"), Some("United Kingdom"));
        assert_eq!(aliases.resolve("Atlantis"), None);
    }

    #[test]
    fn aggregates_by_canonical_country() {
        let records = vec![
            place("Australia", 30, "origin_country"),
            place("Sydney", 10, "city_region"),
            place("Japan", 20, "origin_country"),
            place("Tokyo", 5, "brand"),
            place("Atlantis", 50, "origin_country"),
        ];

        let summary = summarize_origins(&records, &CountryAliases::builtin());

        assert_eq!(summary.total_mentions, 60);
        assert_eq!(summary.unique_countries, 2);
        assert_eq!(summary.countries[0].name, "Australia");
        assert_eq!(summary.countries[0].frequency, 40);
        assert!((summary.countries[0].percentage - 66.67).abs() < 1e-9);
        assert_eq!(summary.countries[0].top_words[0].en, "Australia");
        assert_eq!(summary.countries[1].name, "Japan");
    }

    #[test]
    fn empty_input_has_no_countries() {
        let summary = summarize_origins(&[], &CountryAliases::builtin());

        assert_eq!(summary, OriginSummary::default());
        assert!(summary.top_origin().is_none());
    }

    #[test]
    fn bar_ratio_is_relative_to_leader() {
        let records = vec![place("Japan", 20, "origin_country"), place("Spain", 5, "origin_country")];
        let summary = summarize_origins(&records, &CountryAliases::builtin());

        assert!((summary.bar_ratio(&summary.countries[0]) - 1.0).abs() < 1e-9);
        assert!((summary.bar_ratio(&summary.countries[1]) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn percentage_handles_zero_total() {
        assert!(percentage(0, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 3) - 33.33).abs() < 1e-9);
    }
}
