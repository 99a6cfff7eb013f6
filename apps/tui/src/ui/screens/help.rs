use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, open_popup};
use pasture_core::Page;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const GLOBAL_KEYS: [(&str, &str); 4] = [
    ("F1 / ?", "Toggle this help"),
    ("Esc", "Back to home"),
    ("q", "Quit"),
    ("c / t", "Open analysis / traceability (from home)"),
];

const ANALYSIS_KEYS: [(&str, &str); 7] = [
    ("Tab / ←→ / 1-3", "Switch tab"),
    ("↑/↓", "Move cursor"),
    ("Enter", "Explore the focused category"),
    ("Backspace", "Clear category or word filter"),
    ("PgUp/PgDn", "Scroll category words"),
    ("f / F", "Next / previous word filter"),
    ("h", "Show or hide contextual categories"),
];

const JOURNEY_KEYS: [(&str, &str); 3] = [
    ("←/→", "Previous / next step"),
    ("1-4", "Jump to step"),
    ("Space", "Play or pause the journey"),
];

fn section(title: &str, keys: &[(&str, &str)], lines: &mut Vec<TextLine<'static>>) {
    lines.push(TextLine::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for (key, action) in keys {
        lines.push(TextLine::from(vec![
            Span::styled(
                format!("  {key:<16}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw((*action).to_string()),
        ]));
    }
    lines.push(TextLine::from(""));
}

pub fn render_help_popup(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());
    let inner = open_popup(
        f,
        area,
        Block::default()
            .title("Keyboard Shortcuts")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    let mut lines = Vec::new();
    section("General", &GLOBAL_KEYS, &mut lines);
    // The current page's keys come first after the globals.
    match app.view.page {
        Page::Traceability => {
            section("Traceability", &JOURNEY_KEYS, &mut lines);
            section("Consumer Analysis", &ANALYSIS_KEYS, &mut lines);
        }
        Page::Home | Page::ConsumerAnalysis => {
            section("Consumer Analysis", &ANALYSIS_KEYS, &mut lines);
            section("Traceability", &JOURNEY_KEYS, &mut lines);
        }
    }

    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
        inner,
    );
}
