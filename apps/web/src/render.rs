use pasture_core::detail::DETAIL_LIMIT;
use pasture_core::journey::FARM;
use pasture_core::origins::HIGHLIGHT_WORDS;
use pasture_core::top::TOP_N;
use pasture_core::{AnalysisTab, Insights, LazyResource, MarkerState, OriginSummary, Page, WAYPOINTS};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span, Text},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Map, MapResolution},
        Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap,
    },
    Frame,
};

use crate::state::WebState;

const HIGHLIGHT: Color = Color::Rgb(0, 0, 238);
const MIN_MAP_WIDTH: u16 = 26;
const MIN_MAP_HEIGHT: u16 = 10;

pub fn render(state: &WebState, f: &mut Frame<'_>) {
    let area = f.area();
    let block = Block::default()
        .title(format!("Pasture to Plate · {}", state.view.page.label()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(inner);

    match state.view.page {
        Page::Home => render_home(state, f, layout[0]),
        Page::ConsumerAnalysis => render_analysis(state, f, layout[0]),
        Page::Traceability => render_traceability(state, f, layout[0]),
    }
    render_footer(state, f, layout[1]);

    if state.show_help {
        render_help(f, area);
    }
}

fn key_hint(key: &str, action: &str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(": {action}   ")),
    ]
}

fn render_footer(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let hints: &[(&str, &str)] = match state.view.page {
        Page::Home => &[("↑/↓", "Navigate"), ("Enter", "Open"), ("?", "Help")],
        Page::ConsumerAnalysis => &[
            ("←/→", "Tab"),
            ("↑/↓", "Move"),
            ("Enter", "Explore"),
            ("f", "Filter"),
            ("h", "Contextual"),
            ("Esc", "Home"),
        ],
        Page::Traceability => &[
            ("←/→", "Step"),
            ("1-4", "Jump"),
            ("Space", "Play/Pause"),
            ("Esc", "Home"),
        ],
    };
    let spans: Vec<Span<'static>> = hints
        .iter()
        .flat_map(|(key, action)| key_hint(key, action))
        .collect();
    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_help(f: &mut Frame<'_>, area: Rect) {
    let popup = area.inner(Margin::new(area.width / 5, area.height / 5));
    let lines = vec![
        TextLine::from(key_hint("c / t", "Consumer analysis / traceability (home)").to_vec()),
        TextLine::from(key_hint("Esc", "Back to home").to_vec()),
        TextLine::from(key_hint("←/→ 1-3", "Switch analysis tab").to_vec()),
        TextLine::from(key_hint("Enter / Bksp", "Explore / clear category").to_vec()),
        TextLine::from(key_hint("J / K", "Scroll category words").to_vec()),
        TextLine::from(key_hint("f / F", "Cycle word filter").to_vec()),
        TextLine::from(key_hint("h", "Show or hide contextual categories").to_vec()),
        TextLine::from(key_hint("1-4 / Space", "Journey step / play-pause").to_vec()),
    ];
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .title("Keyboard Shortcuts")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        popup,
    );
}

fn render_home(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let entries = [
        (Page::ConsumerAnalysis, "What Chinese consumers say about imported meat"),
        (Page::Traceability, "Follow one shipment from Dunedin to Shanghai"),
    ];
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Premium New Zealand beef, traced from pasture to plate.",
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(""),
    ];
    for (index, (page, blurb)) in entries.iter().enumerate() {
        let style = if index == state.home_index {
            Style::default()
                .bg(HIGHLIGHT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(TextLine::from(Span::styled(format!("  {}  ", page.label()), style)));
        lines.push(TextLine::from(Span::styled(
            format!("    {blurb}"),
            Style::default().fg(Color::Gray),
        )));
        lines.push(TextLine::from(""));
    }
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().title("Explore").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn message_panel(f: &mut Frame<'_>, area: Rect, message: String, color: Color) {
    f.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(color)))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_analysis(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let titles = AnalysisTab::ALL
        .iter()
        .map(|tab| TextLine::from(tab.label()))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(state.view.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"));
    f.render_widget(tabs, layout[0]);

    match &state.records {
        LazyResource::Idle | LazyResource::Loading => {
            message_panel(f, layout[1], "Loading data...".to_string(), Color::Cyan);
        }
        LazyResource::Failed(message) => {
            message_panel(f, layout[1], format!("Error: {message}"), Color::Red);
        }
        LazyResource::Ready(insights) => match state.view.tab {
            AnalysisTab::Categories => render_categories(state, insights, f, layout[1]),
            AnalysisTab::Top100 => render_top(state, insights, f, layout[1]),
            AnalysisTab::Origins => render_origins(state, f, layout[1]),
        },
    }
}

fn header(cells: &[&'static str]) -> Row<'static> {
    Row::new(cells.iter().map(|cell| Cell::from(*cell)).collect::<Vec<_>>()).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_categories(state: &WebState, insights: &Insights, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let visible_rows = usize::from(columns[0].height.saturating_sub(3)).max(1);
    let offset = state.category_index.saturating_sub(visible_rows - 1);
    let rows = insights
        .categories()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, stat)| {
            let active = state.view.active_label.as_deref() == Some(stat.label.as_str());
            let style = if index == state.category_index {
                Style::default().bg(HIGHLIGHT).fg(Color::White)
            } else if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(stat.label.clone()),
                Cell::from(stat.total_frequency.to_string()),
                Cell::from(stat.item_count.to_string()),
            ])
            .style(style)
        });
    f.render_widget(
        Table::new(
            rows,
            [Constraint::Min(14), Constraint::Length(9), Constraint::Length(6)],
        )
        .header(header(&["Category", "Mentions", "Words"]))
        .block(
            Block::default()
                .title(format!("Categories ({})", insights.categories().len()))
                .borders(Borders::ALL),
        ),
        columns[0],
    );

    let Some(label) = state.view.active_label.as_deref() else {
        message_panel(
            f,
            columns[1],
            "Select a category to explore".to_string(),
            Color::Gray,
        );
        return;
    };

    let records = insights.detail(label);
    let visible_rows = usize::from(columns[1].height.saturating_sub(3));
    let offset = state
        .detail_offset
        .min(records.len().saturating_sub(visible_rows));
    let rows = records
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, record)| {
            Row::new(vec![
                Cell::from((index + 1).to_string()),
                Cell::from(record.source_text.clone()),
                Cell::from(record.translated_text.clone()),
                Cell::from(record.frequency.to_string()),
            ])
        });
    f.render_widget(
        Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Min(10),
                Constraint::Length(9),
            ],
        )
        .header(header(&["#", "Word", "Translation", "Mentions"]))
        .block(
            Block::default()
                .title(format!("{label}: {} of at most {DETAIL_LIMIT}", records.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        columns[1],
    );
}

fn render_top(state: &WebState, insights: &Insights, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let mut chips = vec![Span::styled(
        " All ",
        chip_style(state.top_filter_index == 0),
    )];
    for (index, stat) in insights.top_categories().iter().enumerate() {
        chips.push(Span::raw(" "));
        chips.push(Span::styled(
            format!(" {} ({}) ", stat.label, stat.item_count),
            chip_style(state.top_filter_index == index + 1),
        ));
    }
    f.render_widget(
        Paragraph::new(TextLine::from(chips))
            .block(Block::default().title("Filter").borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        layout[0],
    );

    let words = insights.top_filtered(state.view.top_filter.as_deref());
    let visible_rows = usize::from(layout[1].height.saturating_sub(3));
    let offset = state.top_offset.min(words.len().saturating_sub(visible_rows));
    let rows = words
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, record)| {
            Row::new(vec![
                Cell::from((index + 1).to_string()),
                Cell::from(record.source_text.clone()),
                Cell::from(record.translated_text.clone()),
                Cell::from(record.frequency.to_string()),
                Cell::from(record.labels.join(", ")),
            ])
        });
    f.render_widget(
        Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(10),
                Constraint::Length(16),
                Constraint::Length(9),
                Constraint::Min(10),
            ],
        )
        .header(header(&["#", "Word", "Translation", "Mentions", "Categories"]))
        .block(
            Block::default()
                .title(format!("Showing {} / {TOP_N} words", words.len()))
                .borders(Borders::ALL),
        ),
        layout[1],
    );
}

fn chip_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(HIGHLIGHT)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_origins(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    match &state.origins {
        LazyResource::Idle | LazyResource::Loading => {
            message_panel(f, area, "Loading country data...".to_string(), Color::Cyan);
        }
        LazyResource::Failed(message) => {
            message_panel(f, area, format!("Error: {message}"), Color::Red);
        }
        LazyResource::Ready(summary) => render_origin_summary(state, summary, f, area),
    }
}

fn render_origin_summary(state: &WebState, summary: &OriginSummary, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    let top_origin = summary.top_origin().map_or_else(
        || "N/A".to_string(),
        |country| format!("{} ({:.1}%)", country.name, country.percentage),
    );
    f.render_widget(
        Paragraph::new(format!(
            "Total mentions: {}   Countries: {}   Top origin: {top_origin}",
            summary.total_mentions, summary.unique_countries
        ))
        .block(Block::default().title("Overview").borders(Borders::ALL))
        .alignment(Alignment::Center),
        layout[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout[1]);

    let highlighted = state.view.highlighted_country.as_deref();
    let bars: Vec<Bar<'_>> = summary
        .leading()
        .iter()
        .map(|country| {
            let color = if highlighted == Some(country.name.as_str()) {
                HIGHLIGHT
            } else {
                Color::Cyan
            };
            Bar::default()
                .value(country.frequency)
                .label(TextLine::from(country.name.clone()))
                .text_value(format!("{} ({:.1}%)", country.frequency, country.percentage))
                .style(Style::default().fg(color))
        })
        .collect();
    f.render_widget(
        BarChart::default()
            .block(Block::default().title("Top Countries").borders(Borders::ALL))
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .max(summary.top_origin().map_or(1, |top| top.frequency).max(1))
            .bar_width(1)
            .bar_gap(0),
        columns[0],
    );

    let country = highlighted.and_then(|name| summary.country(name));
    let lines: Vec<TextLine<'_>> = country.map_or_else(
        || vec![TextLine::from("Highlight a country with ↑/↓")],
        |country| {
            country
                .highlight_words()
                .iter()
                .map(|word| TextLine::from(format!("{} ({})  {}", word.zh, word.en, word.frequency)))
                .collect()
        },
    );
    let title = country.map_or_else(
        || format!("Top {HIGHLIGHT_WORDS} words"),
        |country| format!("Top {HIGHLIGHT_WORDS} words: {}", country.name),
    );
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(Block::default().title(title).borders(Borders::ALL)),
        columns[1],
    );
}

fn marker_color(state: MarkerState) -> Color {
    match state {
        MarkerState::Active => Color::LightRed,
        MarkerState::Visited => Color::Green,
        MarkerState::Upcoming => Color::DarkGray,
    }
}

fn render_traceability(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(columns[0]);

    render_map(state, f, left[0]);

    let journey = &state.journey;
    let timeline: Vec<Span<'_>> = WAYPOINTS
        .iter()
        .enumerate()
        .map(|(index, waypoint)| {
            let marker = journey.marker_state(index);
            Span::styled(
                format!(" {} {} ({}) ", index + 1, waypoint.title, waypoint.duration),
                Style::default().fg(marker_color(marker)),
            )
        })
        .collect();
    let timeline_title = if journey.is_auto_advancing() {
        "Timeline (playing)"
    } else {
        "Timeline"
    };
    f.render_widget(
        Paragraph::new(TextLine::from(timeline))
            .block(Block::default().title(timeline_title).borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        left[1],
    );

    let mut lines = Vec::new();
    if let Some(waypoint) = journey.active_waypoint() {
        lines.push(TextLine::from(Span::styled(
            waypoint.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(TextLine::from(waypoint.description));
        lines.push(TextLine::from(format!("{} · {}", waypoint.location, waypoint.duration)));
        for detail in waypoint.details {
            lines.push(TextLine::from(format!("  • {detail}")));
        }
        lines.push(TextLine::from(""));
    }
    lines.push(TextLine::from(Span::styled(
        FARM.name,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(TextLine::from(format!("{} · {}", FARM.location, FARM.farmer)));
    lines.push(TextLine::from(FARM.story));
    lines.push(TextLine::from(format!("Practices: {}", FARM.practices.join(", "))));
    lines.push(TextLine::from(format!(
        "Certifications: {}",
        FARM.certifications.join(", ")
    )));
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().title("Journey").borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        columns[1],
    );
}

fn render_map(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    if area.width < MIN_MAP_WIDTH || area.height < MIN_MAP_HEIGHT {
        let text = Text::from(vec![
            TextLine::from(Span::styled(
                "Interactive map temporarily unavailable",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(
                "Please check back later",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        f.render_widget(
            Paragraph::new(text)
                .block(Block::default().title("Route").borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let journey = &state.journey;
    let camera = journey.camera();
    let travelled = journey.path_prefix().len();
    let canvas = Canvas::default()
        .block(Block::default().title("Route").borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds(camera.x_bounds())
        .y_bounds(camera.y_bounds())
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Color::Rgb(60, 90, 60),
                resolution: MapResolution::High,
            });
            ctx.layer();
            for (index, pair) in WAYPOINTS.windows(2).enumerate() {
                ctx.draw(&CanvasLine {
                    x1: pair[0].coordinates.lng,
                    y1: pair[0].coordinates.lat,
                    x2: pair[1].coordinates.lng,
                    y2: pair[1].coordinates.lat,
                    color: if index + 1 < travelled {
                        Color::Yellow
                    } else {
                        Color::DarkGray
                    },
                });
            }
            ctx.layer();
            let radius = camera.lng_span * 0.012;
            for (index, waypoint) in WAYPOINTS.iter().enumerate() {
                if !camera.contains(waypoint.coordinates) {
                    continue;
                }
                let marker = journey.marker_state(index);
                let pulse = if marker == MarkerState::Active {
                    1.0 + 0.35 * journey.pulse().sin()
                } else {
                    1.0
                };
                ctx.draw(&Circle {
                    x: waypoint.coordinates.lng,
                    y: waypoint.coordinates.lat,
                    radius: radius * pulse,
                    color: marker_color(marker),
                });
            }
        });
    f.render_widget(canvas, area);
}
