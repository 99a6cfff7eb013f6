use crate::app::App;
use crate::ui::widgets::charts::{ratio_bar, render_country_share};
use crate::ui::widgets::loading::{render_load_error, render_loading};
use crate::ui::widgets::tables::{format_count, header_style, selected_row_style};
use pasture_core::origins::HIGHLIGHT_WORDS;
use pasture_core::{LazyResource, OriginSummary};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

const BAR_WIDTH: usize = 16;

pub fn render_origins(app: &App, f: &mut Frame<'_>, area: Rect) {
    match &app.origins {
        LazyResource::Idle | LazyResource::Loading => {
            render_loading(f, area, &app.throbber, "Loading country data...");
        }
        LazyResource::Failed(message) => render_load_error(f, area, message),
        LazyResource::Ready(summary) => render_summary(app, summary, f, area),
    }
}

fn render_summary(app: &App, summary: &OriginSummary, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    render_cards(summary, f, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_country_share(
        f,
        columns[0],
        summary.leading(),
        app.view.highlighted_country.as_deref(),
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(columns[1]);

    render_ranking(app, summary, f, right[0]);
    render_highlight(app, summary, f, right[1]);
}

fn render_cards(summary: &OriginSummary, f: &mut Frame<'_>, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let top_origin = summary.top_origin().map_or_else(
        || "N/A".to_string(),
        |country| format!("{} ({:.1}%)", country.name, country.percentage),
    );

    let values = [
        ("Total Mentions", format_count(summary.total_mentions)),
        ("Countries", summary.unique_countries.to_string()),
        ("Top Origin", top_origin),
    ];

    for ((title, value), card) in values.into_iter().zip(cards.iter()) {
        let paragraph = Paragraph::new(Span::styled(
            value,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().title(title).borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(paragraph, *card);
    }
}

fn render_ranking(app: &App, summary: &OriginSummary, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Country"),
        Cell::from("Mentions"),
        Cell::from(""),
    ])
    .style(header_style());

    let rows = summary
        .leading()
        .iter()
        .enumerate()
        .map(|(index, country)| {
            let style = if app.view.highlighted_country.as_deref() == Some(country.name.as_str())
            {
                selected_row_style()
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from((index + 1).to_string()),
                Cell::from(country.name.clone()),
                Cell::from(format_count(country.frequency)),
                Cell::from(ratio_bar(summary.bar_ratio(country), BAR_WIDTH))
                    .style(Style::default().fg(Color::Cyan)),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(Block::default().title("Top Countries").borders(Borders::ALL))
    .column_spacing(1);

    f.render_widget(table, area);
}

fn render_highlight(app: &App, summary: &OriginSummary, f: &mut Frame<'_>, area: Rect) {
    let country = app
        .view
        .highlighted_country
        .as_deref()
        .and_then(|name| summary.country(name));

    let Some(country) = country else {
        let paragraph = Paragraph::new("Highlight a country to see its top words")
            .block(Block::default().title("Top Words").borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let lines: Vec<TextLine<'_>> = country
        .highlight_words()
        .iter()
        .map(|word| {
            TextLine::from(vec![
                Span::styled(
                    format!("{} ", word.zh),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("({}) ", word.en), Style::default().fg(Color::Gray)),
                Span::styled(
                    format_count(word.frequency),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(format!(
                "Top {HIGHLIGHT_WORDS} words: {} ({:.2}%)",
                country.name, country.percentage
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}
