use crate::app::App;
use crate::ui::widgets::charts::render_category_bars;
use crate::ui::widgets::tables::{format_count, header_style, scroll_offset, selected_row_style};
use pasture_core::detail::DETAIL_LIMIT;
use pasture_core::Insights;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_categories(app: &App, insights: &Insights, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(columns[0]);

    render_category_bars(
        f,
        left[0],
        insights.categories(),
        app.view.active_label.as_deref(),
    );
    render_category_table(app, insights, f, left[1]);
    render_detail(app, insights, f, columns[1]);
}

fn render_category_table(app: &App, insights: &Insights, f: &mut Frame<'_>, area: Rect) {
    let stats = insights.categories();
    if stats.is_empty() {
        let paragraph = Paragraph::new("No visible categories")
            .block(Block::default().title("Categories").borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from("Mentions"),
        Cell::from("Words"),
    ])
    .style(header_style());

    let max_visible_rows = usize::from(area.height.saturating_sub(3));
    let offset = scroll_offset(stats.len(), max_visible_rows, app.category_index);

    let rows = stats
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, stat)| {
            let active = app.view.active_label.as_deref() == Some(stat.label.as_str());
            let style = if index == app.category_index {
                selected_row_style()
            } else if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if active { "● " } else { "  " };
            Row::new(vec![
                Cell::from(format!("{marker}{}", stat.label)),
                Cell::from(format_count(stat.total_frequency)),
                Cell::from(stat.item_count.to_string()),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("Categories ({})", stats.len()))
            .borders(Borders::ALL),
    )
    .column_spacing(1);

    f.render_widget(table, area);
}

fn render_detail(app: &App, insights: &Insights, f: &mut Frame<'_>, area: Rect) {
    let Some(label) = app.view.active_label.as_deref() else {
        let text = Text::from(vec![
            TextLine::from(""),
            TextLine::from(Span::styled(
                "Select a category to explore",
                Style::default().fg(Color::Gray),
            )),
        ]);
        let paragraph = Paragraph::new(text)
            .block(Block::default().title("Category Words").borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let records = insights.detail(label);
    let block = Block::default()
        .title(format!(
            "{label}: top {} of at most {DETAIL_LIMIT} words",
            records.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if records.is_empty() {
        let paragraph = Paragraph::new("No visible words carry this category")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Word"),
        Cell::from("Translation"),
        Cell::from("Mentions"),
    ])
    .style(header_style());

    let max_visible_rows = usize::from(area.height.saturating_sub(3));
    let offset = app
        .detail_scroll
        .min(records.len().saturating_sub(max_visible_rows));

    let rows = records
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, record)| {
            Row::new(vec![
                Cell::from((index + 1).to_string()),
                Cell::from(record.source_text.clone()),
                Cell::from(record.translated_text.clone()),
                Cell::from(format_count(record.frequency)),
            ])
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Min(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);

    f.render_widget(table, area);
}
