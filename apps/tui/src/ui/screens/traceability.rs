use crate::app::App;
use crate::ui::screens::{page_layout, render_shortcuts, render_status, render_title};
use crate::ui::widgets::map::{marker_color, render_journey_map};
use pasture_core::journey::FARM;
use pasture_core::{JourneyAnimator, MarkerState, WAYPOINTS};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_traceability(app: &App, f: &mut Frame<'_>) {
    let layout = page_layout(f);
    render_title(
        f,
        layout[0],
        "Traceability Journey",
        "From New Zealand pasture to your plate",
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(columns[0]);

    render_journey_map(f, left[0], &app.journey, app.config.map_enabled);
    render_timeline(&app.journey, f, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(columns[1]);

    render_step_details(&app.journey, f, right[0]);
    render_farm(f, right[1]);

    render_status(app, f, layout[2]);
    let play = if app.journey.is_auto_advancing() {
        "Pause"
    } else {
        "Play"
    };
    render_shortcuts(
        f,
        layout[3],
        &[
            ("←/→", "Step"),
            ("1-4", "Jump"),
            ("Space", play),
            ("Esc", "Home"),
            ("F1", "Help"),
        ],
    );
}

fn render_timeline(journey: &JourneyAnimator, f: &mut Frame<'_>, area: Rect) {
    let mut markers = Vec::new();
    let mut captions = Vec::new();
    for (index, waypoint) in WAYPOINTS.iter().enumerate() {
        let state = journey.marker_state(index);
        let symbol = match state {
            MarkerState::Active => "◉",
            MarkerState::Visited => "●",
            MarkerState::Upcoming => "○",
        };
        let mut style = Style::default().fg(marker_color(state));
        if state == MarkerState::Active {
            style = style.add_modifier(Modifier::BOLD);
        }
        if index > 0 {
            let connector_color = if state == MarkerState::Upcoming {
                Color::DarkGray
            } else {
                Color::Yellow
            };
            markers.push(Span::styled("──────", Style::default().fg(connector_color)));
        }
        markers.push(Span::styled(format!("{symbol} {}", index + 1), style));
        captions.push(Span::styled(
            format!("{:<9}", format!("{} {}", waypoint.title, waypoint.duration)),
            style,
        ));
    }

    let text = Text::from(vec![
        TextLine::from(markers),
        TextLine::from(""),
        TextLine::from(captions),
    ]);
    let status = if journey.is_auto_advancing() {
        "Timeline (playing)"
    } else {
        "Timeline"
    };
    let paragraph = Paragraph::new(text)
        .block(Block::default().title(status).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_step_details(journey: &JourneyAnimator, f: &mut Frame<'_>, area: Rect) {
    let Some(waypoint) = journey.active_waypoint() else {
        let paragraph = Paragraph::new("Pick a step to see where the shipment is")
            .block(Block::default().title("Step").borders(Borders::ALL));
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        TextLine::from(Span::styled(
            waypoint.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(waypoint.description),
        TextLine::from(vec![
            Span::styled("Location: ", Style::default().fg(Color::Gray)),
            Span::raw(waypoint.location),
        ]),
        TextLine::from(vec![
            Span::styled("Duration: ", Style::default().fg(Color::Gray)),
            Span::raw(waypoint.duration),
        ]),
    ];
    for detail in waypoint.details {
        lines.push(TextLine::from(format!("  • {detail}")));
    }

    let title = format!(
        "Step {} of {}",
        journey.active().map_or(0, |index| index + 1),
        WAYPOINTS.len()
    );
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_farm(f: &mut Frame<'_>, area: Rect) {
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(Span::styled(
            FARM.name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(FARM.location, Style::default().fg(Color::Gray))),
        TextLine::from(vec![Span::styled("Farmers: ", label), Span::raw(FARM.farmer)]),
        TextLine::from(""),
        TextLine::from(FARM.story),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Practices: ", label),
            Span::raw(FARM.practices.join(", ")),
        ]),
        TextLine::from(Span::styled("Certifications:", label)),
    ];
    for certification in FARM.certifications {
        lines.push(TextLine::from(format!("  ✓ {certification}")));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Our Farm").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
