use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::LexicalRecord;

const BUILTIN_TAXONOMY: &str = include_str!("taxonomy.json");

/// Labels the dashboards never show, and labels they hide unless contextual
/// tags are switched on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibilityRules {
    #[serde(default)]
    pub always_hidden: BTreeSet<String>,
    #[serde(default)]
    pub hidden_by_default: BTreeSet<String>,
}

impl VisibilityRules {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The taxonomy shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_TAXONOMY).unwrap_or_else(|error| {
            tracing::error!(%error, "builtin taxonomy is malformed, hiding nothing");
            Self::default()
        })
    }

    pub fn is_hidden(&self, label: &str, show_contextual: bool) -> bool {
        self.always_hidden.contains(label)
            || (!show_contextual && self.hidden_by_default.contains(label))
    }

    pub fn apply(&self, record: &LexicalRecord, show_contextual: bool) -> LexicalRecord {
        LexicalRecord {
            labels: record
                .labels
                .iter()
                .filter(|label| !self.is_hidden(label, show_contextual))
                .cloned()
                .collect(),
            ..record.clone()
        }
    }

    pub fn apply_all(&self, records: &[LexicalRecord], show_contextual: bool) -> Vec<LexicalRecord> {
        records
            .iter()
            .map(|record| self.apply(record, show_contextual))
            .collect()
    }
}
