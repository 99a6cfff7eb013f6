use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_traceability_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => {
            app.journey.next_step();
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => {
            app.journey.previous_step();
        }
        KeyCode::Char(' ') => {
            app.journey.toggle_auto_advance();
            app.status_message = if app.journey.is_auto_advancing() {
                "Journey playing".to_string()
            } else {
                "Journey paused".to_string()
            };
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            if let Err(error) = app.journey.select(index) {
                app.status_message = error.to_string();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use pasture_core::VisibilityRules;

    fn app() -> App {
        App::new(AppConfig::default(), VisibilityRules::builtin())
    }

    #[test]
    fn number_keys_pick_a_step_and_stop_auto_advance() {
        let mut app = app();

        handle_traceability_input(&mut app, KeyCode::Char('3'));

        assert_eq!(app.journey.active(), Some(2));
        assert!(!app.journey.is_auto_advancing());
    }

    #[test]
    fn out_of_range_step_is_reported() {
        let mut app = app();

        handle_traceability_input(&mut app, KeyCode::Char('9'));

        assert_eq!(app.journey.active(), Some(0));
        assert!(app.status_message.contains("out of range"));
    }

    #[test]
    fn arrows_walk_the_route() {
        let mut app = app();

        handle_traceability_input(&mut app, KeyCode::Right);
        handle_traceability_input(&mut app, KeyCode::Right);
        handle_traceability_input(&mut app, KeyCode::Left);

        assert_eq!(app.journey.active(), Some(1));
    }

    #[test]
    fn space_toggles_playback() {
        let mut app = app();

        handle_traceability_input(&mut app, KeyCode::Char(' '));

        assert!(!app.journey.is_auto_advancing());
        assert_eq!(app.status_message, "Journey paused");
    }
}
