use crate::app::state::App;
use crossterm::event::KeyCode;
use pasture_core::Page;

mod analysis;
mod help;
pub mod home;
mod traceability;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Esc if app.view.page != Page::Home => {
            app.open_page(Page::Home);
            return;
        }
        _ => {}
    }

    match app.view.page {
        Page::Home => home::handle_home_input(app, key),
        Page::ConsumerAnalysis => analysis::handle_analysis_input(app, key),
        Page::Traceability => traceability::handle_traceability_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use pasture_core::VisibilityRules;

    #[test]
    fn q_quits_from_any_page() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.view.page = Page::Traceability;

        dispatch_input(&mut app, KeyCode::Char('q'));

        assert!(!app.running);
    }

    #[test]
    fn escape_returns_home() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());
        app.view.page = Page::ConsumerAnalysis;

        dispatch_input(&mut app, KeyCode::Esc);

        assert_eq!(app.view.page, Page::Home);
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());

        dispatch_input(&mut app, KeyCode::F(1));
        dispatch_input(&mut app, KeyCode::Char('q'));

        assert!(app.show_help);
        assert!(app.running);
    }
}
