use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_SIX};

pub fn render_loading(f: &mut Frame<'_>, area: Rect, state: &ThrobberState, label: &str) {
    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX);

    let paragraph = Paragraph::new(Text::from(vec![TextLine::from(""), throbber.to_line(state)]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// A failed load replaces the panel body; nothing retries it.
pub fn render_load_error(f: &mut Frame<'_>, area: Rect, message: &str) {
    let text = Text::from(vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ]);
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
