use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::event::KeyCode;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

mod fetch;
mod render;
mod state;

use state::{Effect, Key, WebState};

fn main() -> io::Result<()> {
    let store = Rc::new(RefCell::new(WebState::new()));

    spawn_local(fetch::fetch_records(store.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let store = store.clone();
        move |event| {
            let Some(key) = map_key(event.code) else {
                return;
            };
            // Release the borrow before any fetch is queued.
            let effect = store.borrow_mut().handle_key(key);
            if effect == Some(Effect::FetchOrigins) {
                spawn_local(fetch::fetch_origins(store.clone()));
            }
        }
    });

    terminal.draw_web(move |f| {
        let now_seconds = js_sys::Date::now() / 1000.0;
        store.borrow_mut().tick(now_seconds);
        render::render(&store.borrow(), f);
    });

    Ok(())
}

fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => return None,
    };
    Some(key)
}
