use crate::aggregate::aggregate_categories;
use crate::detail::{records_for_label, DETAIL_LIMIT};
use crate::model::{CategoryStat, LexicalRecord};
use crate::top::{filter_by_label, select_top, TOP_N};
use crate::visibility::VisibilityRules;

/// Loaded records together with every statistic derived from them.
///
/// The visibility filter runs exactly once, and both the category ranking and
/// the Top-N window read the filtered records. Any change to the inputs
/// rebuilds everything from scratch.
#[derive(Debug, Clone)]
pub struct Insights {
    raw: Vec<LexicalRecord>,
    rules: VisibilityRules,
    show_contextual: bool,
    visible: Vec<LexicalRecord>,
    categories: Vec<CategoryStat>,
    top: Vec<LexicalRecord>,
    top_categories: Vec<CategoryStat>,
}

impl Insights {
    pub fn new(raw: Vec<LexicalRecord>, rules: VisibilityRules) -> Self {
        let mut insights = Self {
            raw,
            rules,
            show_contextual: false,
            visible: Vec::new(),
            categories: Vec::new(),
            top: Vec::new(),
            top_categories: Vec::new(),
        };
        insights.recompute();
        insights
    }

    pub fn set_show_contextual(&mut self, show_contextual: bool) {
        if self.show_contextual != show_contextual {
            self.show_contextual = show_contextual;
            self.recompute();
        }
    }

    pub fn set_rules(&mut self, rules: VisibilityRules) {
        self.rules = rules;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = self.rules.apply_all(&self.raw, self.show_contextual);
        self.categories = aggregate_categories(&self.visible);
        self.top = select_top(&self.visible, TOP_N);
        self.top_categories = aggregate_categories(&self.top);

        tracing::debug!(
            records = self.raw.len(),
            categories = self.categories.len(),
            top = self.top.len(),
            show_contextual = self.show_contextual,
            "recomputed label statistics"
        );
    }

    pub fn record_count(&self) -> usize {
        self.raw.len()
    }

    pub const fn show_contextual(&self) -> bool {
        self.show_contextual
    }

    pub fn visible(&self) -> &[LexicalRecord] {
        &self.visible
    }

    pub fn categories(&self) -> &[CategoryStat] {
        &self.categories
    }

    pub fn top(&self) -> &[LexicalRecord] {
        &self.top
    }

    pub fn top_categories(&self) -> &[CategoryStat] {
        &self.top_categories
    }

    pub fn top_filtered(&self, filter: Option<&str>) -> Vec<&LexicalRecord> {
        filter_by_label(&self.top, filter)
    }

    pub fn detail(&self, label: &str) -> Vec<&LexicalRecord> {
        records_for_label(&self.visible, label, DETAIL_LIMIT)
    }
}
