use pasture_core::top::{select_top, TOP_N};
use pasture_core::{aggregate_categories, Insights, LexicalRecord, VisibilityRules, ViewState};
use proptest::prelude::*;
use proptest::test_runner::Config;

const LABELS: [&str; 8] = [
    "origin_country",
    "price_value",
    "quality",
    "brand",
    "other",
    "not_important",
    "short_word",
    "foreign_word",
];

fn record_strategy() -> impl Strategy<Value = LexicalRecord> {
    (
        "[a-z]{1,8}",
        0_u64..10_000,
        proptest::sample::subsequence(LABELS.to_vec(), 0..=LABELS.len()),
    )
        .prop_map(|(word, frequency, labels)| LexicalRecord::new(word.clone(), word, frequency, &labels))
}

fn records_strategy() -> impl Strategy<Value = Vec<LexicalRecord>> {
    proptest::collection::vec(record_strategy(), 0..250)
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn category_totals_match_weighted_label_counts(records in records_strategy()) {
        let rules = VisibilityRules::builtin();
        let visible = rules.apply_all(&records, false);
        let stats = aggregate_categories(&visible);

        let from_stats: u64 = stats.iter().map(|stat| stat.total_frequency).sum();
        let expected: u64 = visible
            .iter()
            .map(|record| record.frequency * record.labels.len() as u64)
            .sum();
        prop_assert_eq!(from_stats, expected);
        prop_assert!(stats.windows(2).all(|pair| pair[0].total_frequency >= pair[1].total_frequency));
    }

    #[test]
    fn category_labels_come_from_visible_records(records in records_strategy()) {
        let insights = Insights::new(records, VisibilityRules::builtin());

        for stat in insights.categories() {
            prop_assert!(insights.visible().iter().any(|record| record.has_label(&stat.label)));
            prop_assert!(stat.label != "other" && stat.label != "not_important");
        }
    }

    #[test]
    fn top_selection_is_capped_and_descending(records in records_strategy()) {
        let top = select_top(&records, TOP_N);

        prop_assert_eq!(top.len(), records.len().min(TOP_N));
        prop_assert!(top.windows(2).all(|pair| pair[0].frequency >= pair[1].frequency));
    }

    #[test]
    fn visibility_filter_is_idempotent(records in records_strategy(), contextual in any::<bool>()) {
        let rules = VisibilityRules::builtin();
        let once = rules.apply_all(&records, contextual);
        let twice = rules.apply_all(&once, contextual);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn readmitting_labels_never_shrinks_statistics(records in records_strategy()) {
        let mut insights = Insights::new(records, VisibilityRules::builtin());
        let hidden = insights.categories().to_vec();

        insights.set_show_contextual(true);
        for before in hidden {
            let after = insights
                .categories()
                .iter()
                .find(|stat| stat.label == before.label);
            prop_assert!(after.is_some());
            if let Some(after) = after {
                prop_assert!(after.total_frequency >= before.total_frequency);
                prop_assert!(after.item_count >= before.item_count);
            }
        }
    }

    #[test]
    fn selecting_a_category_twice_matches_selecting_once(
        records in records_strategy(),
        pick in 0_usize..LABELS.len(),
    ) {
        let insights = Insights::new(records, VisibilityRules::builtin());
        let label = LABELS[pick];

        let mut once = ViewState::default();
        once.select_category(label);
        let mut twice = once.clone();
        twice.select_category(label);

        prop_assert_eq!(&once, &twice);
        let detail_once = once.active_label.as_deref().map(|l| insights.detail(l));
        let detail_twice = twice.active_label.as_deref().map(|l| insights.detail(l));
        prop_assert_eq!(detail_once, detail_twice);
    }
}
