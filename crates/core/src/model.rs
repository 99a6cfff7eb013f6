use serde::{Deserialize, Serialize};

/// One source-language word or phrase with its translation, frequency and
/// category labels, as shipped in `labeled.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalRecord {
    #[serde(rename = "zh")]
    pub source_text: String,
    #[serde(rename = "en", default)]
    pub translated_text: String,
    #[serde(default)]
    pub frequency: u64,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl LexicalRecord {
    pub fn new(
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
        frequency: u64,
        labels: &[&str],
    ) -> Self {
        Self {
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            frequency,
            labels: labels.iter().map(|label| (*label).to_string()).collect(),
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|candidate| candidate == label)
    }

    /// Collapses repeated labels, keeping the first occurrence of each.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let mut seen = Vec::with_capacity(self.labels.len());
        self.labels.retain(|label| {
            if seen.contains(label) {
                false
            } else {
                seen.push(label.clone());
                true
            }
        });
        self
    }
}

/// Aggregated statistics for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub label: String,
    pub total_frequency: u64,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryWord {
    pub zh: String,
    pub en: String,
    pub frequency: u64,
}

/// Pre-aggregated mentions of one country of origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryStat {
    pub name: String,
    pub frequency: u64,
    pub percentage: f64,
    #[serde(rename = "words", default)]
    pub top_words: Vec<CountryWord>,
}

/// The `country_analysis.json` document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OriginSummary {
    pub countries: Vec<CountryStat>,
    pub total_mentions: u64,
    pub unique_countries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{"zh":"牛肉","en":"beef","frequency":42,"labels":["product_meat","short_word"]}"#;
        let record: LexicalRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.source_text, "牛肉");
        assert_eq!(record.translated_text, "beef");
        assert_eq!(record.frequency, 42);
        assert_eq!(record.labels, vec!["product_meat", "short_word"]);
    }

    #[test]
    fn missing_optional_fields_default() {
        let record: LexicalRecord = serde_json::from_str(r#"{"zh":"哈哈"}"#).unwrap();

        assert_eq!(record.translated_text, "");
        assert_eq!(record.frequency, 0);
        assert!(record.labels.is_empty());
    }

    #[test]
    fn normalized_drops_repeated_labels_in_order() {
        let record = LexicalRecord::new("推荐", "recommend", 3, &["social_intent", "b", "social_intent"])
            .normalized();

        assert_eq!(record.labels, vec!["social_intent", "b"]);
    }

    #[test]
    fn country_stat_reads_words_field() {
        let json = r#"{"name":"Japan","frequency":7,"percentage":12.5,"words":[{"zh":"日本","en":"Japan","frequency":7}]}"#;
        let stat: CountryStat = serde_json::from_str(json).unwrap();

        assert_eq!(stat.top_words.len(), 1);
        assert_eq!(stat.top_words[0].en, "Japan");
    }
}
