use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;
use pasture_core::Page;

/// Pages reachable from the home menu, in menu order.
pub const MENU: [Page; 2] = [Page::ConsumerAnalysis, Page::Traceability];

pub fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.home_selection_index = wrap_decrement(app.home_selection_index, MENU.len());
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.home_selection_index = wrap_increment(app.home_selection_index, MENU.len());
        }
        KeyCode::Enter => {
            if let Some(page) = MENU.get(app.home_selection_index) {
                app.open_page(*page);
            }
        }
        KeyCode::Char('c') => app.open_page(Page::ConsumerAnalysis),
        KeyCode::Char('t') => app.open_page(Page::Traceability),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use pasture_core::VisibilityRules;

    #[test]
    fn enter_opens_the_focused_page() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());

        handle_home_input(&mut app, KeyCode::Down);
        handle_home_input(&mut app, KeyCode::Enter);

        assert_eq!(app.view.page, Page::Traceability);
    }

    #[test]
    fn menu_cursor_wraps() {
        let mut app = App::new(AppConfig::default(), VisibilityRules::builtin());

        handle_home_input(&mut app, KeyCode::Up);

        assert_eq!(app.home_selection_index, MENU.len() - 1);
    }
}
