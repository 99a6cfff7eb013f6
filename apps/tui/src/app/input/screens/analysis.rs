use crate::app::input::helpers::{step_down, wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;
use pasture_core::AnalysisTab;

pub fn handle_analysis_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Tab | KeyCode::Right => {
            app.select_tab(app.view.tab.next());
            return;
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.select_tab(app.view.tab.previous());
            return;
        }
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;
            if let Some(tab) = AnalysisTab::from_index(index) {
                app.select_tab(tab);
            }
            return;
        }
        KeyCode::Char('h') => {
            app.toggle_contextual();
            return;
        }
        _ => {}
    }

    match app.view.tab {
        AnalysisTab::Categories => handle_categories_input(app, key),
        AnalysisTab::Top100 => handle_top_words_input(app, key),
        AnalysisTab::Origins => handle_origins_input(app, key),
    }
}

fn handle_categories_input(app: &mut App, key: KeyCode) {
    let count = app.category_count();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.category_index = app.category_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.category_index = step_down(app.category_index, count);
        }
        KeyCode::Enter => {
            app.select_focused_category();
        }
        KeyCode::Backspace | KeyCode::Delete => app.clear_category(),
        KeyCode::PageDown | KeyCode::Char('J') => {
            let rows = app
                .view
                .active_label
                .as_deref()
                .zip(app.records.ready())
                .map_or(0, |(label, insights)| insights.detail(label).len());
            app.detail_scroll = step_down(app.detail_scroll, rows);
        }
        KeyCode::PageUp | KeyCode::Char('K') => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_top_words_input(app: &mut App, key: KeyCode) {
    // "All" plus one chip per Top-N category.
    let chips = app.top_filter_count() + 1;
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.top_index = app.top_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let rows = app.records.ready().map_or(0, |insights| {
                insights.top_filtered(app.view.top_filter.as_deref()).len()
            });
            app.top_index = step_down(app.top_index, rows);
        }
        KeyCode::Char('f') => {
            app.top_filter_index = wrap_increment(app.top_filter_index, chips);
            app.apply_top_filter();
        }
        KeyCode::Char('F') => {
            app.top_filter_index = wrap_decrement(app.top_filter_index, chips);
            app.apply_top_filter();
        }
        KeyCode::Backspace | KeyCode::Delete => {
            app.top_filter_index = 0;
            app.apply_top_filter();
        }
        _ => {}
    }
}

fn handle_origins_input(app: &mut App, key: KeyCode) {
    let count = app.country_count();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.country_index = wrap_decrement(app.country_index, count);
            app.highlight_focused_country();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.country_index = wrap_increment(app.country_index, count);
            app.highlight_focused_country();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::LoadEvent;
    use crate::config::AppConfig;
    use pasture_core::{LazyResource, LexicalRecord, Page, VisibilityRules};

    fn analysis_app() -> App {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.view.page = Page::ConsumerAnalysis;
        // Keep the origins resource out of `Idle` so switching tabs never spawns.
        app.origins = LazyResource::Failed("not under test".to_string());
        app.records = LazyResource::Loading;
        app.apply_load_event(LoadEvent::Records(Ok(vec![
            LexicalRecord::new("牛肉", "beef", 40, &["meat_type"]),
            LexicalRecord::new("新鲜", "fresh", 25, &["freshness"]),
            LexicalRecord::new("好吃", "tasty", 10, &["taste", "meat_type"]),
        ])));
        app
    }

    #[test]
    fn tab_cycles_through_views() {
        let mut app = analysis_app();
        assert_eq!(app.view.tab, AnalysisTab::Categories);

        handle_analysis_input(&mut app, KeyCode::Tab);
        assert_eq!(app.view.tab, AnalysisTab::Top100);

        handle_analysis_input(&mut app, KeyCode::Tab);
        assert_eq!(app.view.tab, AnalysisTab::Origins);
    }

    #[test]
    fn enter_selects_and_backspace_clears_category() {
        let mut app = analysis_app();

        handle_analysis_input(&mut app, KeyCode::Down);
        handle_analysis_input(&mut app, KeyCode::Enter);
        assert_eq!(app.view.active_label.as_deref(), Some("freshness"));

        handle_analysis_input(&mut app, KeyCode::Backspace);
        assert!(app.view.active_label.is_none());
    }

    #[test]
    fn category_cursor_stays_in_bounds() {
        let mut app = analysis_app();

        for _ in 0..10 {
            handle_analysis_input(&mut app, KeyCode::Down);
        }

        assert_eq!(app.category_index, app.category_count() - 1);
    }

    #[test]
    fn filter_chips_cycle_back_to_all() {
        let mut app = analysis_app();
        app.view.tab = AnalysisTab::Top100;
        let chips = app.top_filter_count() + 1;

        handle_analysis_input(&mut app, KeyCode::Char('f'));
        assert_eq!(app.view.top_filter.as_deref(), Some("meat_type"));

        for _ in 1..chips {
            handle_analysis_input(&mut app, KeyCode::Char('f'));
        }
        assert!(app.view.top_filter.is_none());
    }

    #[test]
    fn origins_tab_reuses_a_settled_load() {
        let mut app = analysis_app();

        handle_analysis_input(&mut app, KeyCode::Char('1'));

        assert_eq!(app.view.tab, AnalysisTab::Origins);
        assert_eq!(app.origins.error(), Some("not under test"));
    }
}
