use crate::error::LoadError;
use crate::model::{LexicalRecord, OriginSummary};

/// File name of the labeled word list.
pub const LABELED_FILE: &str = "labeled.json";
/// File name of the pre-aggregated country summary.
pub const ORIGINS_FILE: &str = "country_analysis.json";

/// Paths the browser build fetches, relative to the page.
pub const LABELED_URL: &str = "data/labeled.json";
pub const ORIGINS_URL: &str = "data/country_analysis.json";

pub fn parse_records(resource: &str, body: &str) -> Result<Vec<LexicalRecord>, LoadError> {
    let records: Vec<LexicalRecord> =
        serde_json::from_str(body).map_err(|error| LoadError::parse(resource, error))?;
    Ok(normalize_records(records))
}

pub fn normalize_records(records: Vec<LexicalRecord>) -> Vec<LexicalRecord> {
    records.into_iter().map(LexicalRecord::normalized).collect()
}

pub fn parse_origins(resource: &str, body: &str) -> Result<OriginSummary, LoadError> {
    serde_json::from_str(body).map_err(|error| LoadError::parse(resource, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_array() {
        let body = r#"[
            {"zh":"澳洲","en":"Australia","frequency":30,"labels":["origin_country","origin_country"]},
            {"zh":"便宜","en":"cheap","frequency":4,"labels":["price_value"]}
        ]"#;

        let records = parse_records(LABELED_FILE, body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].labels, vec!["origin_country"]);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let error = parse_records(LABELED_FILE, "{not json").unwrap_err();

        assert!(matches!(error, LoadError::Parse { ref resource, .. } if resource == LABELED_FILE));
    }

    #[test]
    fn parses_origin_summary() {
        let body = r#"{"countries":[{"name":"Australia","frequency":3,"percentage":100.0,"words":[]}],
                       "total_mentions":3,"unique_countries":1}"#;

        let summary = parse_origins(ORIGINS_FILE, body).unwrap();

        assert_eq!(summary.unique_countries, 1);
        assert_eq!(summary.countries[0].name, "Australia");
    }
}
