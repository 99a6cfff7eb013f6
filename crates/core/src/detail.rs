use crate::model::LexicalRecord;

/// Maximum number of words listed for a selected category.
pub const DETAIL_LIMIT: usize = 50;

/// Members of `label` among the visible records, highest frequency first.
pub fn records_for_label<'a>(
    visible: &'a [LexicalRecord],
    label: &str,
    limit: usize,
) -> Vec<&'a LexicalRecord> {
    let mut members: Vec<&LexicalRecord> = visible
        .iter()
        .filter(|record| record.has_label(label))
        .collect();
    members.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    members.truncate(limit);
    members
}
