use crate::app::App;
use crate::ui::widgets::charts::series_color;
use crate::ui::widgets::tables::{format_count, header_style, scroll_offset, selected_row_style};
use pasture_core::top::TOP_N;
use pasture_core::Insights;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

pub fn render_top_words(app: &App, insights: &Insights, f: &mut Frame<'_>, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Filter chips
            Constraint::Length(1), // Counter
            Constraint::Min(3),    // Word table
        ])
        .split(area);

    render_filter_chips(app, insights, f, sections[0]);

    let words = insights.top_filtered(app.view.top_filter.as_deref());
    let counter = Paragraph::new(format!("Showing {} / {TOP_N} words", words.len()))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Right);
    f.render_widget(counter, sections[1]);

    if words.is_empty() {
        let paragraph = Paragraph::new("No words match this filter")
            .block(Block::default().title("Top Words").borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, sections[2]);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Rank"),
        Cell::from("Word"),
        Cell::from("Translation"),
        Cell::from("Mentions"),
        Cell::from("Categories"),
    ])
    .style(header_style());

    let max_visible_rows = usize::from(sections[2].height.saturating_sub(3));
    let offset = scroll_offset(words.len(), max_visible_rows, app.top_index);

    let rows = words
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, record)| {
            let style = if index == app.top_index {
                selected_row_style()
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}", index + 1)),
                Cell::from(record.source_text.clone()),
                Cell::from(record.translated_text.clone()),
                Cell::from(format_count(record.frequency)),
                Cell::from(record.labels.join(", ")),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("Top {TOP_N} Words"))
            .borders(Borders::ALL),
    )
    .column_spacing(1);

    f.render_widget(table, sections[2]);
}

fn render_filter_chips(app: &App, insights: &Insights, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![chip(
        format!(" All ({}) ", insights.top().len()),
        app.top_filter_index == 0,
        Color::Gray,
    )];
    for (index, stat) in insights.top_categories().iter().enumerate() {
        spans.push(Span::raw(" "));
        spans.push(chip(
            format!(" {} ({}) ", stat.label, stat.item_count),
            app.top_filter_index == index + 1,
            series_color(index),
        ));
    }

    let paragraph = Paragraph::new(TextLine::from(spans))
        .block(Block::default().title("Filter").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn chip(text: String, selected: bool, color: Color) -> Span<'static> {
    if selected {
        Span::styled(
            text,
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(color))
    }
}
