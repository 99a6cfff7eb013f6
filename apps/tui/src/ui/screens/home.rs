use crate::app::input::screens::home::MENU;
use crate::app::App;
use crate::ui::screens::{page_layout, render_shortcuts, render_status, render_title};
use pasture_core::Page;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const INTRO: &str = "Premium New Zealand beef, traced from pasture to plate. \
                     See what Chinese consumers say about imported meat, \
                     then follow a shipment from the farm gate to Shanghai.";

fn page_blurb(page: Page) -> &'static str {
    match page {
        Page::ConsumerAnalysis => "Categories, top words and countries of origin in consumer reviews",
        Page::Traceability => "Follow one shipment from Dunedin to Shanghai",
        Page::Home => "",
    }
}

pub fn render_home(app: &App, f: &mut Frame<'_>) {
    let layout = page_layout(f);
    render_title(f, layout[0], "Pasture to Plate", "Insights & Traceability");

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(layout[1]);

    let intro = Paragraph::new(INTRO)
        .block(Block::default().borders(Borders::ALL).title("Welcome"))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    f.render_widget(intro, body[0]);

    let mut lines = vec![TextLine::from("")];
    for (index, page) in MENU.iter().enumerate() {
        let selected = index == app.home_selection_index;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(TextLine::from(Span::styled(
            format!("{marker}{}", page.label()),
            style,
        )));
        lines.push(TextLine::from(Span::styled(
            format!("    {}", page_blurb(*page)),
            Style::default().fg(Color::Gray),
        )));
        lines.push(TextLine::from(""));
    }

    let menu = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Explore")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(menu, body[1]);

    render_status(app, f, layout[2]);
    render_shortcuts(
        f,
        layout[3],
        &[("↑/↓", "Navigate"), ("Enter", "Open"), ("F1", "Help"), ("q", "Quit")],
    );
}
