use serde::{Deserialize, Serialize};

/// Top-level pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    ConsumerAnalysis,
    Traceability,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::Home, Self::ConsumerAnalysis, Self::Traceability];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::ConsumerAnalysis => "Consumer Analysis",
            Self::Traceability => "Traceability Journey",
        }
    }
}

/// Tabs of the consumer-analysis page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTab {
    Origins,
    #[default]
    Categories,
    Top100,
}

impl AnalysisTab {
    pub const ALL: [Self; 3] = [Self::Origins, Self::Categories, Self::Top100];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Origins => "Origin Analysis",
            Self::Categories => "Categories",
            Self::Top100 => "Top 100 Words",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Origins => 0,
            Self::Categories => 1,
            Self::Top100 => 2,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Origins),
            1 => Some(Self::Categories),
            2 => Some(Self::Top100),
            _ => None,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Origins => Self::Categories,
            Self::Categories => Self::Top100,
            Self::Top100 => Self::Origins,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Origins => Self::Top100,
            Self::Categories => Self::Origins,
            Self::Top100 => Self::Categories,
        }
    }
}

/// Everything the user has selected, kept apart from the rendering layer so
/// the derived views can be computed from `(records, view state)` alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub page: Page,
    pub tab: AnalysisTab,
    pub active_label: Option<String>,
    pub top_filter: Option<String>,
    pub highlighted_country: Option<String>,
    pub show_contextual: bool,
}

impl ViewState {
    /// Returns `true` when the selection changed.
    pub fn select_category(&mut self, label: &str) -> bool {
        if self.active_label.as_deref() == Some(label) {
            return false;
        }
        self.active_label = Some(label.to_string());
        true
    }

    pub fn clear_category(&mut self) {
        self.active_label = None;
    }

    /// `None` shows the whole Top-N window.
    pub fn set_top_filter(&mut self, label: Option<&str>) -> bool {
        let next = label.map(str::to_string);
        if self.top_filter == next {
            return false;
        }
        self.top_filter = next;
        true
    }

    pub fn highlight_country(&mut self, name: Option<&str>) {
        self.highlighted_country = name.map(str::to_string);
    }

    pub fn open_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn select_tab(&mut self, tab: AnalysisTab) {
        self.tab = tab;
    }

    pub fn toggle_contextual(&mut self) {
        self.show_contextual = !self.show_contextual;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_same_category_twice_is_a_no_op() {
        let mut state = ViewState::default();

        assert!(state.select_category("brand"));
        let snapshot = state.clone();
        assert!(!state.select_category("brand"));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn selecting_another_category_replaces_it() {
        let mut state = ViewState::default();
        state.select_category("brand");

        assert!(state.select_category("price_value"));
        assert_eq!(state.active_label.as_deref(), Some("price_value"));
    }

    #[test]
    fn tabs_cycle_both_ways() {
        for tab in AnalysisTab::ALL {
            assert_eq!(tab.next().previous(), tab);
            assert_eq!(AnalysisTab::from_index(tab.index()), Some(tab));
        }
    }

    #[test]
    fn round_trips_through_json() {
        let mut state = ViewState::default();
        state.open_page(Page::ConsumerAnalysis);
        state.select_tab(AnalysisTab::Top100);
        state.set_top_filter(Some("brand"));

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"tab\":\"top100\""));
        assert_eq!(serde_json::from_str::<ViewState>(&json).unwrap(), state);
    }
}
