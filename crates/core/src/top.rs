use crate::model::LexicalRecord;

/// Size of the highest-frequency window behind the "Top 100 Words" tab.
pub const TOP_N: usize = 100;

/// Ranks records by descending frequency and keeps the first `limit`.
///
/// Records with equal frequency keep their input order.
pub fn select_top(records: &[LexicalRecord], limit: usize) -> Vec<LexicalRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    ranked.truncate(limit);
    ranked
}

/// Narrows an already ranked window to one label, or returns it whole when no
/// filter is set. The ranking itself is never changed.
pub fn filter_by_label<'a>(ranked: &'a [LexicalRecord], filter: Option<&str>) -> Vec<&'a LexicalRecord> {
    match filter {
        Some(label) => ranked.iter().filter(|record| record.has_label(label)).collect(),
        None => ranked.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: u64) -> Vec<LexicalRecord> {
        (1..=count)
            .map(|frequency| LexicalRecord::new(format!("w{frequency}"), "", frequency, &["x"]))
            .collect()
    }

    #[test]
    fn keeps_the_hundred_highest_in_descending_order() {
        let top = select_top(&numbered(150), TOP_N);

        assert_eq!(top.len(), 100);
        assert_eq!(top.first().map(|r| r.frequency), Some(150));
        assert_eq!(top.last().map(|r| r.frequency), Some(51));
        assert!(top.windows(2).all(|pair| pair[0].frequency >= pair[1].frequency));
    }

    #[test]
    fn short_input_is_returned_whole() {
        assert_eq!(select_top(&numbered(7), TOP_N).len(), 7);
    }

    #[test]
    fn equal_frequencies_keep_input_order() {
        let records = vec![
            LexicalRecord::new("first", "", 3, &[]),
            LexicalRecord::new("second", "", 3, &[]),
            LexicalRecord::new("big", "", 9, &[]),
        ];

        let names: Vec<_> = select_top(&records, TOP_N)
            .into_iter()
            .map(|record| record.source_text)
            .collect();

        assert_eq!(names, vec!["big", "first", "second"]);
    }

    #[test]
    fn label_filter_narrows_without_reordering() {
        let ranked = vec![
            LexicalRecord::new("a", "", 9, &["price_value"]),
            LexicalRecord::new("b", "", 8, &["brand"]),
            LexicalRecord::new("c", "", 7, &["price_value", "brand"]),
        ];

        let filtered: Vec<_> = filter_by_label(&ranked, Some("price_value"))
            .into_iter()
            .map(|record| record.source_text.as_str())
            .collect();

        assert_eq!(filtered, vec!["a", "c"]);
        assert_eq!(filter_by_label(&ranked, None).len(), 3);
    }
}
