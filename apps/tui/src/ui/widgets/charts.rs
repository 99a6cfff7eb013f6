use pasture_core::{CategoryStat, CountryStat};
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::LightBlue,
    Color::LightRed,
];

pub fn series_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

fn empty_chart(f: &mut Frame<'_>, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(message.to_string())
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Horizontal bars of category frequency; `active` is drawn highlighted.
pub fn render_category_bars(
    f: &mut Frame<'_>,
    area: Rect,
    stats: &[CategoryStat],
    active: Option<&str>,
) {
    if stats.is_empty() {
        empty_chart(f, area, "Category Mentions", "No categories available");
        return;
    }

    // One bar per inner row.
    let rows = usize::from(area.height.saturating_sub(2)).max(1);
    let bars: Vec<Bar<'_>> = stats
        .iter()
        .take(rows)
        .enumerate()
        .map(|(index, stat)| {
            let color = if active == Some(stat.label.as_str()) {
                Color::Rgb(0, 0, 238)
            } else {
                series_color(index)
            };
            Bar::default()
                .value(stat.total_frequency)
                .label(TextLine::from(stat.label.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let max_value = stats
        .iter()
        .map(|stat| stat.total_frequency)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Category Mentions")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(0)
        .bar_width(1);

    f.render_widget(chart, area);
}

/// Share of mentions for the leading countries, in hundredths of a percent.
pub fn render_country_share(
    f: &mut Frame<'_>,
    area: Rect,
    countries: &[CountryStat],
    highlighted: Option<&str>,
) {
    if countries.is_empty() {
        empty_chart(f, area, "Share of Mentions", "No country data available");
        return;
    }

    let bars: Vec<Bar<'_>> = countries
        .iter()
        .enumerate()
        .map(|(index, country)| {
            let color = if highlighted == Some(country.name.as_str()) {
                Color::Rgb(0, 0, 238)
            } else {
                series_color(index)
            };
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let hundredths = (country.percentage * 100.0).round().max(0.0) as u64;
            Bar::default()
                .value(hundredths)
                .text_value(format!("{:.1}%", country.percentage))
                .label(TextLine::from(short_label(&country.name)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Share of Mentions")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(10_000)
        .bar_gap(1)
        .bar_width(6);

    f.render_widget(chart, area);
}

fn short_label(name: &str) -> String {
    name.chars().take(6).collect()
}

/// Text bar `width` cells long, filled to `ratio`.
pub fn ratio_bar(ratio: f64, width: usize) -> String {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_bar_fills_proportionally() {
        assert_eq!(ratio_bar(0.5, 4), "██░░");
        assert_eq!(ratio_bar(1.5, 2), "██");
        assert_eq!(ratio_bar(-1.0, 3), "░░░");
    }

    #[test]
    fn short_label_respects_char_boundaries() {
        assert_eq!(short_label("New Zealand"), "New Ze");
        assert_eq!(short_label("中国"), "中国");
    }
}
