use pasture_core::origins::summarize_origins;
use pasture_core::top::TOP_N;
use pasture_core::{CountryAliases, Insights, LexicalRecord, VisibilityRules};

#[test]
fn worked_category_example() {
    let records = vec![
        LexicalRecord::new("w1", "", 10, &["a", "other"]),
        LexicalRecord::new("w2", "", 5, &["a", "b"]),
    ];

    let insights = Insights::new(records, VisibilityRules::builtin());
    let summary: Vec<_> = insights
        .categories()
        .iter()
        .map(|stat| (stat.label.as_str(), stat.total_frequency, stat.item_count))
        .collect();

    assert_eq!(summary, vec![("a", 15, 2), ("b", 5, 1)]);
}

#[test]
fn worked_top_hundred_example() {
    let records: Vec<_> = (1..=150)
        .map(|frequency| LexicalRecord::new(format!("w{frequency}"), "", frequency, &["quality"]))
        .collect();

    let insights = Insights::new(records, VisibilityRules::builtin());
    let frequencies: Vec<u64> = insights.top().iter().map(|record| record.frequency).collect();

    assert_eq!(frequencies.len(), TOP_N);
    assert_eq!(frequencies, (51..=150).rev().collect::<Vec<u64>>());
    assert_eq!(insights.top_categories()[0].item_count, TOP_N);
    assert_eq!(insights.top_filtered(Some("quality")).len(), TOP_N);
    assert!(insights.top_filtered(Some("brand")).is_empty());
}

#[test]
fn taxonomy_override_changes_what_is_hidden() {
    let records = vec![
        LexicalRecord::new("w1", "", 4, &["brand", "seasonal"]),
        LexicalRecord::new("w2", "", 2, &["other"]),
    ];
    let rules = VisibilityRules::from_json(r#"{"always_hidden":["seasonal"],"hidden_by_default":[]}"#)
        .unwrap();

    let insights = Insights::new(records, rules);
    let labels: Vec<_> = insights.categories().iter().map(|s| s.label.as_str()).collect();

    assert_eq!(labels, vec!["brand", "other"]);
}

#[test]
fn origin_summary_round_trips_through_json() {
    let records = vec![
        LexicalRecord::new("新西兰", "New Zealand", 12, &["origin_country"]),
        LexicalRecord::new("奥克兰", "Auckland", 3, &["city_region"]),
        LexicalRecord::new("澳洲", "Australia", 30, &["origin_country"]),
    ];

    let summary = summarize_origins(&records, &CountryAliases::builtin());
    let json = serde_json::to_string_pretty(&summary).unwrap();
    let parsed = pasture_core::resources::parse_origins("country_analysis.json", &json).unwrap();

    assert_eq!(parsed, summary);
    assert!(json.contains("\"words\""));
    let shares: f64 = parsed.countries.iter().map(|c| c.percentage).sum();
    assert!((shares - 100.0).abs() < 0.05);
}

#[test]
fn records_load_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labeled.json");
    std::fs::write(
        &path,
        r#"[{"zh":"牛排","en":"steak","frequency":8,"labels":["product_meat","short_word"]}]"#,
    )
    .unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    let records = pasture_core::resources::parse_records("labeled.json", &body).unwrap();
    let insights = Insights::new(records, VisibilityRules::builtin());

    assert_eq!(insights.categories().len(), 1);
    assert_eq!(insights.categories()[0].label, "product_meat");
}
