pub mod analysis;
pub mod categories;
pub mod help;
pub mod home;
pub mod origins;
pub mod top_words;
pub mod traceability;

use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::rc::Rc;

/// Title, content, status line and shortcut hints, top to bottom.
pub fn page_layout(f: &Frame<'_>) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)))
}

pub fn render_title(f: &mut Frame<'_>, area: Rect, title: &str, subtitle: &str) {
    let line = TextLine::from(vec![
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ]);
    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.status_message.is_empty() {
        return;
    }
    let paragraph = Paragraph::new(Span::styled(
        app.status_message.clone(),
        Style::default().fg(Color::Green),
    ));
    f.render_widget(paragraph, area);
}

/// Key hints in the footer: keys in bold yellow, then their action.
pub fn render_shortcuts(f: &mut Frame<'_>, area: Rect, shortcuts: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(shortcuts.len() * 2);
    for (key, action) in shortcuts {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(": {action}   ")));
    }
    let paragraph = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
