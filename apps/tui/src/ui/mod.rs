// UI module for the pasture dashboard
// Handles all rendering; reads `App` and never mutates it

pub mod screens;
pub mod widgets;

use crate::app::App;
use pasture_core::Page;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.view.page {
        Page::Home => screens::home::render_home(app, f),
        Page::ConsumerAnalysis => screens::analysis::render_analysis(app, f),
        Page::Traceability => screens::traceability::render_traceability(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(app, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadEvent;
    use crate::config::AppConfig;
    use pasture_core::{AnalysisTab, LazyResource, LexicalRecord, LoadError, VisibilityRules};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_with_records() -> App {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.records = LazyResource::Loading;
        app.apply_load_event(LoadEvent::Records(Ok(vec![
            LexicalRecord::new("牛肉", "beef", 40, &["meat_type"]),
            LexicalRecord::new("新鲜", "fresh", 25, &["freshness"]),
        ])));
        app
    }

    #[test]
    fn home_lists_both_pages() {
        let app = App::new(AppConfig::default(), VisibilityRules::builtin());

        let screen = render_to_string(&app, 100, 30);

        assert!(screen.contains("Consumer Analysis"));
        assert!(screen.contains("Traceability"));
    }

    #[test]
    fn load_failure_replaces_the_dashboard_body() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.view.page = Page::ConsumerAnalysis;
        app.records = LazyResource::Loading;
        app.apply_load_event(LoadEvent::Records(Err(LoadError::status("labeled.json", 500))));

        let screen = render_to_string(&app, 100, 30);

        assert!(screen.contains("Failed to load labeled.json (500)"));
    }

    #[test]
    fn categories_prompt_until_a_label_is_chosen() {
        let mut app = app_with_records();
        app.view.page = Page::ConsumerAnalysis;

        let screen = render_to_string(&app, 120, 30);

        assert!(screen.contains("Select a category to explore"));
    }

    #[test]
    fn top_words_reports_window_size() {
        let mut app = app_with_records();
        app.view.page = Page::ConsumerAnalysis;
        app.view.tab = AnalysisTab::Top100;

        let screen = render_to_string(&app, 120, 30);

        assert!(screen.contains("Showing 2 / 100 words"));
    }

    #[test]
    fn disabled_map_shows_placeholder() {
        let mut app = App::new(
            AppConfig {
                map_enabled: false,
                ..AppConfig::default()
            },
            VisibilityRules::builtin(),
        );
        app.view.page = Page::Traceability;

        let screen = render_to_string(&app, 120, 40);

        assert!(screen.contains("Interactive map temporarily unavailable"));
        assert!(screen.contains("Farm"));
    }

    #[test]
    fn help_popup_draws_over_any_page() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.show_help = true;

        let screen = render_to_string(&app, 100, 30);

        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
