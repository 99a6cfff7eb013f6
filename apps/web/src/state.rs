use pasture_core::origins::CHART_COUNTRIES;
use pasture_core::{
    AnalysisTab, Insights, JourneyAnimator, LazyResource, LexicalRecord, LoadError,
    OriginSummary, Page, ViewState, VisibilityRules,
};

/// Keys the dashboard reacts to, decoupled from the DOM event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
    Esc,
    Backspace,
    Char(char),
}

/// Follow-up work a key press asks of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchOrigins,
}

const HOME_MENU: [Page; 2] = [Page::ConsumerAnalysis, Page::Traceability];

#[derive(Debug)]
pub struct WebState {
    pub view: ViewState,
    pub rules: VisibilityRules,
    pub records: LazyResource<Insights>,
    pub origins: LazyResource<OriginSummary>,
    pub journey: JourneyAnimator,
    pub home_index: usize,
    pub category_index: usize,
    pub detail_offset: usize,
    pub top_offset: usize,
    pub top_filter_index: usize,
    pub country_index: usize,
    pub show_help: bool,
}

impl WebState {
    pub fn new() -> Self {
        Self {
            view: ViewState::default(),
            rules: VisibilityRules::builtin(),
            records: LazyResource::Loading,
            origins: LazyResource::Idle,
            journey: JourneyAnimator::mounted(),
            home_index: 0,
            category_index: 0,
            detail_offset: 0,
            top_offset: 0,
            top_filter_index: 0,
            country_index: 0,
            show_help: false,
        }
    }

    pub fn resolve_records(&mut self, result: Result<Vec<LexicalRecord>, LoadError>) {
        let rules = self.rules.clone();
        let show_contextual = self.view.show_contextual;
        self.records.resolve(result.map(|records| {
            let mut insights = Insights::new(records, rules);
            insights.set_show_contextual(show_contextual);
            insights
        }));
    }

    pub fn resolve_origins(&mut self, result: Result<OriginSummary, LoadError>) {
        self.origins.resolve(result);
        if self.view.highlighted_country.is_none() {
            self.country_index = 0;
            self.highlight_focused_country();
        }
    }

    /// Advances the journey animation while its page is shown.
    pub fn tick(&mut self, now_seconds: f64) {
        if self.view.page == Page::Traceability {
            self.journey.tick(now_seconds);
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Effect> {
        if key == Key::Char('?') {
            self.show_help = !self.show_help;
            return None;
        }
        if self.show_help {
            if key == Key::Esc {
                self.show_help = false;
            }
            return None;
        }
        if key == Key::Esc && self.view.page != Page::Home {
            self.view.open_page(Page::Home);
            return None;
        }

        match self.view.page {
            Page::Home => self.handle_home_key(key),
            Page::ConsumerAnalysis => self.handle_analysis_key(key),
            Page::Traceability => {
                self.handle_journey_key(key);
                None
            }
        }
    }

    fn open_page(&mut self, page: Page) -> Option<Effect> {
        if page == Page::Traceability {
            self.journey = JourneyAnimator::mounted();
        }
        self.view.open_page(page);
        if page == Page::ConsumerAnalysis {
            return self.tab_effect();
        }
        None
    }

    fn handle_home_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Up => {
                self.home_index = (self.home_index + HOME_MENU.len() - 1) % HOME_MENU.len();
            }
            Key::Down => self.home_index = (self.home_index + 1) % HOME_MENU.len(),
            Key::Enter => return self.open_page(HOME_MENU[self.home_index % HOME_MENU.len()]),
            Key::Char('c') => return self.open_page(Page::ConsumerAnalysis),
            Key::Char('t') => return self.open_page(Page::Traceability),
            _ => {}
        }
        None
    }

    fn select_tab(&mut self, tab: AnalysisTab) -> Option<Effect> {
        self.view.select_tab(tab);
        self.tab_effect()
    }

    /// The origin summary is fetched the first time its tab is shown.
    fn tab_effect(&mut self) -> Option<Effect> {
        if self.view.tab == AnalysisTab::Origins && self.origins.begin() {
            return Some(Effect::FetchOrigins);
        }
        None
    }

    fn handle_analysis_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Tab | Key::Right => return self.select_tab(self.view.tab.next()),
            Key::Left => return self.select_tab(self.view.tab.previous()),
            Key::Char(digit @ '1'..='3') => {
                let index = digit as usize - '1' as usize;
                return AnalysisTab::from_index(index).and_then(|tab| self.select_tab(tab));
            }
            Key::Char('h') => {
                self.toggle_contextual();
                return None;
            }
            _ => {}
        }

        match self.view.tab {
            AnalysisTab::Categories => self.handle_categories_key(key),
            AnalysisTab::Top100 => self.handle_top_key(key),
            AnalysisTab::Origins => self.handle_origins_key(key),
        }
        None
    }

    fn toggle_contextual(&mut self) {
        self.view.toggle_contextual();
        let show_contextual = self.view.show_contextual;
        if let Some(insights) = self.records.ready_mut() {
            insights.set_show_contextual(show_contextual);
        }

        // A Top-N filter whose label left the window falls back to "All".
        let position = match (self.view.top_filter.as_deref(), self.records.ready()) {
            (Some(label), Some(insights)) => insights
                .top_categories()
                .iter()
                .position(|stat| stat.label == label),
            _ => None,
        };
        if position.is_none() {
            self.view.set_top_filter(None);
        }
        self.top_filter_index = position.map_or(0, |position| position + 1);
        self.top_offset = 0;
        self.detail_offset = 0;
        let count = self.category_count();
        self.category_index = self.category_index.min(count.saturating_sub(1));
    }

    fn category_count(&self) -> usize {
        self.records.ready().map_or(0, |insights| insights.categories().len())
    }

    fn detail_len(&self) -> usize {
        match (self.records.ready(), self.view.active_label.as_deref()) {
            (Some(insights), Some(label)) => insights.detail(label).len(),
            _ => 0,
        }
    }

    fn handle_categories_key(&mut self, key: Key) {
        let count = self.category_count();
        match key {
            Key::Up => self.category_index = self.category_index.saturating_sub(1),
            Key::Down if self.category_index + 1 < count => self.category_index += 1,
            Key::Enter => {
                let label = self
                    .records
                    .ready()
                    .and_then(|insights| insights.categories().get(self.category_index))
                    .map(|stat| stat.label.clone());
                if let Some(label) = label {
                    if self.view.select_category(&label) {
                        self.detail_offset = 0;
                    }
                }
            }
            Key::Backspace => {
                self.view.clear_category();
                self.detail_offset = 0;
            }
            Key::Char('J') => {
                let len = self.detail_len();
                self.detail_offset = step_down(self.detail_offset, len);
            }
            Key::Char('K') => self.detail_offset = self.detail_offset.saturating_sub(1),
            _ => {}
        }
    }

    fn handle_top_key(&mut self, key: Key) {
        let chips = self
            .records
            .ready()
            .map_or(0, |insights| insights.top_categories().len())
            + 1;
        match key {
            Key::Up => self.top_offset = self.top_offset.saturating_sub(1),
            Key::Down => {
                let len = self
                    .records
                    .ready()
                    .map_or(0, |insights| {
                        insights.top_filtered(self.view.top_filter.as_deref()).len()
                    });
                self.top_offset = step_down(self.top_offset, len);
            }
            Key::Char('f') => {
                self.top_filter_index = (self.top_filter_index + 1) % chips;
                self.apply_top_filter();
            }
            Key::Char('F') => {
                self.top_filter_index = (self.top_filter_index + chips - 1) % chips;
                self.apply_top_filter();
            }
            Key::Backspace => {
                self.top_filter_index = 0;
                self.apply_top_filter();
            }
            _ => {}
        }
    }

    fn apply_top_filter(&mut self) {
        let label = match self.top_filter_index {
            0 => None,
            index => self
                .records
                .ready()
                .and_then(|insights| insights.top_categories().get(index - 1))
                .map(|stat| stat.label.clone()),
        };
        if self.view.set_top_filter(label.as_deref()) {
            self.top_offset = 0;
        }
    }

    fn handle_origins_key(&mut self, key: Key) {
        let count = self
            .origins
            .ready()
            .map_or(0, |summary| summary.countries.len().min(CHART_COUNTRIES));
        if count == 0 {
            return;
        }
        match key {
            Key::Up => self.country_index = (self.country_index + count - 1) % count,
            Key::Down => self.country_index = (self.country_index + 1) % count,
            _ => return,
        }
        self.highlight_focused_country();
    }

    fn highlight_focused_country(&mut self) {
        let name = self
            .origins
            .ready()
            .and_then(|summary| summary.leading().get(self.country_index))
            .map(|country| country.name.clone());
        self.view.highlight_country(name.as_deref());
    }

    fn handle_journey_key(&mut self, key: Key) {
        match key {
            Key::Right | Key::Down => {
                self.journey.next_step();
            }
            Key::Left | Key::Up => {
                self.journey.previous_step();
            }
            Key::Char(' ') => self.journey.toggle_auto_advance(),
            Key::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if let Err(error) = self.journey.select(index) {
                    web_log(&error.to_string());
                }
            }
            _ => {}
        }
    }
}

/// Moves a list offset without running past the last row.
const fn step_down(index: usize, len: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        index
    }
}

impl Default for WebState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn web_log(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn web_log(message: &str) {
    eprintln!("{message}");
}
