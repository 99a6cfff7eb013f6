use std::collections::HashMap;

use crate::model::{CategoryStat, LexicalRecord};

/// Groups records by label, summing frequency and counting members.
///
/// The result is ordered by descending total frequency. The sort is stable, so
/// labels with equal totals stay in the order they were first encountered.
pub fn aggregate_categories<'a, I>(records: I) -> Vec<CategoryStat>
where
    I: IntoIterator<Item = &'a LexicalRecord>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut stats: Vec<CategoryStat> = Vec::new();

    for record in records {
        for label in &record.labels {
            let index = *positions.entry(label.as_str()).or_insert_with(|| {
                stats.push(CategoryStat {
                    label: label.clone(),
                    total_frequency: 0,
                    item_count: 0,
                });
                stats.len() - 1
            });
            let stat = &mut stats[index];
            stat.total_frequency += record.frequency;
            stat.item_count += 1;
        }
    }

    stats.sort_by(|a, b| b.total_frequency.cmp(&a.total_frequency));
    stats
}
