use crate::app::actions::{AppActions, LoadEvent};
use crate::config::AppConfig;
use pasture_core::origins::CHART_COUNTRIES;
use pasture_core::{
    AnalysisTab, Insights, JourneyAnimator, LazyResource, OriginSummary, Page, ViewState,
    VisibilityRules,
};
use std::time::Instant;
use throbber_widgets_tui::ThrobberState;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub config: AppConfig,
    pub rules: VisibilityRules,
    pub view: ViewState,
    pub records: LazyResource<Insights>,
    pub origins: LazyResource<OriginSummary>,
    pub journey: JourneyAnimator,
    pub status_message: String,
    pub show_help: bool,
    pub home_selection_index: usize,
    pub category_index: usize,
    pub detail_scroll: usize,
    pub top_index: usize,
    /// 0 is "All"; `n` is the `n - 1`th Top-N category.
    pub top_filter_index: usize,
    pub country_index: usize,
    pub started: Instant,
    pub throbber: ThrobberState,
    pub actions: AppActions,
}

impl App {
    pub fn new(config: AppConfig, rules: VisibilityRules) -> Self {
        Self {
            running: true,
            config,
            rules,
            view: ViewState::default(),
            records: LazyResource::Idle,
            origins: LazyResource::Idle,
            journey: JourneyAnimator::mounted(),
            status_message: String::new(),
            show_help: false,
            home_selection_index: 0,
            category_index: 0,
            detail_scroll: 0,
            top_index: 0,
            top_filter_index: 0,
            country_index: 0,
            started: Instant::now(),
            throbber: ThrobberState::default(),
            actions: AppActions::new(),
        }
    }

    /// Starts the labeled-records load. Later calls are no-ops.
    pub fn load_records(&mut self) {
        if self.records.begin() {
            self.actions.spawn_records_load(self.config.labeled_path());
        }
    }

    /// Starts the origin summary load the first time the Origins tab is shown.
    pub fn ensure_origins(&mut self) {
        if self.origins.begin() {
            tracing::debug!("origins tab opened; fetching summary");
            self.actions.spawn_origins_load(self.config.origins_path());
        }
    }

    pub fn poll_loads(&mut self) {
        for event in self.actions.drain() {
            self.apply_load_event(event);
        }
    }

    pub fn apply_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Records(result) => {
                if let Err(error) = &result {
                    tracing::error!(%error, "records unavailable");
                }
                let show_contextual = self.view.show_contextual;
                let rules = self.rules.clone();
                self.records.resolve(result.map(|records| {
                    let mut insights = Insights::new(records, rules);
                    insights.set_show_contextual(show_contextual);
                    insights
                }));
            }
            LoadEvent::Origins(result) => {
                if let Err(error) = &result {
                    tracing::error!(%error, "origin summary unavailable");
                }
                self.origins.resolve(result);
                self.sync_highlighted_country();
            }
        }
    }

    pub fn update(&mut self) {
        if self.records.is_loading() || self.origins.is_loading() {
            self.throbber.calc_next();
        }

        if self.view.page == Page::Traceability {
            let seconds = self.started.elapsed().as_secs_f64();
            if self.journey.tick(seconds) {
                tracing::debug!(step = ?self.journey.active(), "journey advanced");
            }
        }
    }

    pub fn open_page(&mut self, page: Page) {
        if page == Page::Traceability && self.view.page != Page::Traceability {
            // Entering the page remounts the journey.
            self.journey = JourneyAnimator::mounted();
        }
        self.view.open_page(page);
        if page == Page::ConsumerAnalysis && self.view.tab == AnalysisTab::Origins {
            self.ensure_origins();
        }
        self.status_message.clear();
    }

    pub fn select_tab(&mut self, tab: AnalysisTab) {
        self.view.select_tab(tab);
        if tab == AnalysisTab::Origins {
            self.ensure_origins();
        }
    }

    pub fn toggle_contextual(&mut self) {
        self.view.toggle_contextual();
        let show_contextual = self.view.show_contextual;
        if let Some(insights) = self.records.ready_mut() {
            insights.set_show_contextual(show_contextual);
        }

        // A Top-N filter whose label left the window falls back to "All".
        let filter_survives = match (self.view.top_filter.as_deref(), self.records.ready()) {
            (Some(label), Some(insights)) => insights
                .top_categories()
                .iter()
                .any(|stat| stat.label == label),
            _ => true,
        };
        if !filter_survives {
            self.view.set_top_filter(None);
        }
        self.sync_top_filter_index();
        self.clamp_cursors();

        self.status_message = if show_contextual {
            "Showing contextual categories".to_string()
        } else {
            "Hiding contextual categories".to_string()
        };
    }

    pub fn category_count(&self) -> usize {
        self.records.ready().map_or(0, |insights| insights.categories().len())
    }

    pub fn top_filter_count(&self) -> usize {
        self.records
            .ready()
            .map_or(0, |insights| insights.top_categories().len())
    }

    pub fn country_count(&self) -> usize {
        self.origins
            .ready()
            .map_or(0, |summary| summary.countries.len().min(CHART_COUNTRIES))
    }

    /// Selects the category under the cursor for the detail view.
    pub fn select_focused_category(&mut self) -> bool {
        let Some(label) = self
            .records
            .ready()
            .and_then(|insights| insights.categories().get(self.category_index))
            .map(|stat| stat.label.clone())
        else {
            return false;
        };

        let changed = self.view.select_category(&label);
        if changed {
            self.detail_scroll = 0;
            tracing::debug!(%label, "category selected");
        }
        changed
    }

    pub fn clear_category(&mut self) {
        self.view.clear_category();
        self.detail_scroll = 0;
    }

    /// Applies the Top-N filter chip at `top_filter_index`.
    pub fn apply_top_filter(&mut self) {
        let label = match self.top_filter_index {
            0 => None,
            index => self
                .records
                .ready()
                .and_then(|insights| insights.top_categories().get(index - 1))
                .map(|stat| stat.label.clone()),
        };
        if self.view.set_top_filter(label.as_deref()) {
            self.top_index = 0;
        }
    }

    pub fn highlight_focused_country(&mut self) {
        let name = self
            .origins
            .ready()
            .and_then(|summary| summary.leading().get(self.country_index))
            .map(|country| country.name.clone());
        self.view.highlight_country(name.as_deref());
    }

    fn sync_highlighted_country(&mut self) {
        if self.view.highlighted_country.is_none() {
            self.country_index = 0;
            self.highlight_focused_country();
        }
    }

    fn sync_top_filter_index(&mut self) {
        self.top_filter_index = match (self.view.top_filter.as_deref(), self.records.ready()) {
            (Some(label), Some(insights)) => insights
                .top_categories()
                .iter()
                .position(|stat| stat.label == label)
                .map_or(0, |position| position + 1),
            _ => 0,
        };
    }

    fn clamp_cursors(&mut self) {
        let categories = self.category_count();
        if self.category_index >= categories {
            self.category_index = categories.saturating_sub(1);
        }
        self.top_index = 0;
        self.detail_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasture_core::{CountryStat, LexicalRecord, LoadError};

    fn records() -> Vec<LexicalRecord> {
        vec![
            LexicalRecord::new("牛肉", "beef", 40, &["meat_type", "short_word"]),
            LexicalRecord::new("新鲜", "fresh", 25, &["freshness", "other"]),
            LexicalRecord::new("好吃", "tasty", 10, &["taste", "meat_type"]),
        ]
    }

    fn loaded_app() -> App {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.records = LazyResource::Loading;
        app.apply_load_event(LoadEvent::Records(Ok(records())));
        app
    }

    #[test]
    fn loaded_records_become_insights() {
        let app = loaded_app();

        let insights = app.records.ready().unwrap();
        assert_eq!(insights.record_count(), 3);
        assert_eq!(insights.categories()[0].label, "meat_type");
    }

    #[test]
    fn failed_records_keep_the_message() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.records = LazyResource::Loading;

        app.apply_load_event(LoadEvent::Records(Err(LoadError::status("labeled.json", 404))));

        assert_eq!(app.records.error(), Some("Failed to load labeled.json (404)"));
    }

    #[test]
    fn contextual_toggle_reveals_hidden_by_default_labels() {
        let mut app = loaded_app();
        let before = app.category_count();

        app.toggle_contextual();

        assert!(app.view.show_contextual);
        assert!(app.category_count() > before);
        assert!(app
            .records
            .ready()
            .unwrap()
            .categories()
            .iter()
            .all(|stat| stat.label != "other"));
    }

    #[test]
    fn contextual_toggle_resets_a_filter_that_left_the_window() {
        let mut app = loaded_app();
        app.toggle_contextual();
        app.view.set_top_filter(Some("short_word"));

        app.toggle_contextual();

        assert!(!app.view.show_contextual);
        assert!(app.view.top_filter.is_none());
        assert_eq!(app.top_filter_index, 0);
    }

    #[test]
    fn contextual_toggle_keeps_a_filter_that_stays_in_the_window() {
        let mut app = loaded_app();
        app.toggle_contextual();
        app.view.set_top_filter(Some("taste"));

        app.toggle_contextual();

        assert_eq!(app.view.top_filter.as_deref(), Some("taste"));
        let insights = app.records.ready().unwrap();
        assert_eq!(insights.top_categories()[app.top_filter_index - 1].label, "taste");
    }

    #[test]
    fn selecting_focused_category_twice_is_a_no_op() {
        let mut app = loaded_app();

        assert!(app.select_focused_category());
        assert!(!app.select_focused_category());
        assert_eq!(app.view.active_label.as_deref(), Some("meat_type"));
    }

    #[test]
    fn top_filter_index_zero_means_all() {
        let mut app = loaded_app();
        app.top_filter_index = 1;
        app.apply_top_filter();
        assert!(app.view.top_filter.is_some());

        app.top_filter_index = 0;
        app.apply_top_filter();

        assert!(app.view.top_filter.is_none());
    }

    #[test]
    fn late_origins_highlight_the_leading_country() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.origins = LazyResource::Loading;
        let summary = OriginSummary {
            countries: vec![CountryStat {
                name: "Australia".to_string(),
                frequency: 9,
                percentage: 100.0,
                top_words: Vec::new(),
            }],
            total_mentions: 9,
            unique_countries: 1,
        };

        app.apply_load_event(LoadEvent::Origins(Ok(summary)));

        assert_eq!(app.view.highlighted_country.as_deref(), Some("Australia"));
    }

    #[test]
    fn update_leaves_the_journey_alone_off_its_page() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.started = Instant::now()
            .checked_sub(std::time::Duration::from_secs(60))
            .unwrap();

        app.update();
        app.update();

        assert_eq!(app.journey.active(), Some(0));
        assert!(app.journey.pulse().abs() < f64::EPSILON);
    }

    #[test]
    fn reopening_traceability_remounts_the_journey() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.open_page(Page::Traceability);
        app.journey.select(3).unwrap();
        app.open_page(Page::Home);

        app.open_page(Page::Traceability);

        assert_eq!(app.journey.active(), Some(0));
        assert!(app.journey.is_auto_advancing());
    }
}
