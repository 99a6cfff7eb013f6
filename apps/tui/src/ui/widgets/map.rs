use pasture_core::journey::Camera;
use pasture_core::{JourneyAnimator, MarkerState, WAYPOINTS};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Map, MapResolution};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Smallest inner area, in cells, the world map is drawn into.
pub const MIN_MAP_WIDTH: u16 = 24;
pub const MIN_MAP_HEIGHT: u16 = 8;

pub const fn map_available(enabled: bool, area: Rect) -> bool {
    enabled && area.width >= MIN_MAP_WIDTH + 2 && area.height >= MIN_MAP_HEIGHT + 2
}

pub fn marker_color(state: MarkerState) -> Color {
    match state {
        MarkerState::Active => Color::LightRed,
        MarkerState::Visited => Color::Green,
        MarkerState::Upcoming => Color::DarkGray,
    }
}

pub fn render_journey_map(f: &mut Frame<'_>, area: Rect, journey: &JourneyAnimator, enabled: bool) {
    if !map_available(enabled, area) {
        render_map_placeholder(f, area);
        return;
    }

    let camera = journey.camera();
    let title = journey
        .active_waypoint()
        .map_or_else(|| "Route".to_string(), |waypoint| format!("Route: {}", waypoint.location));

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds(camera.x_bounds())
        .y_bounds(camera.y_bounds())
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::Rgb(60, 90, 60),
                resolution: MapResolution::High,
            });
            ctx.layer();

            draw_route(ctx, journey);
            ctx.layer();

            draw_markers(ctx, journey, &camera);
        });

    f.render_widget(canvas, area);
}

fn draw_route(ctx: &mut ratatui::widgets::canvas::Context<'_>, journey: &JourneyAnimator) {
    let travelled = journey.path_prefix().len();
    for (index, pair) in WAYPOINTS.windows(2).enumerate() {
        let color = if index + 1 < travelled {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        ctx.draw(&CanvasLine {
            x1: pair[0].coordinates.lng,
            y1: pair[0].coordinates.lat,
            x2: pair[1].coordinates.lng,
            y2: pair[1].coordinates.lat,
            color,
        });
    }
}

fn draw_markers(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    journey: &JourneyAnimator,
    camera: &Camera,
) {
    let base_radius = camera.lng_span * 0.012;
    for (index, waypoint) in WAYPOINTS.iter().enumerate() {
        if !camera.contains(waypoint.coordinates) {
            continue;
        }
        let state = journey.marker_state(index);
        let radius = if state == MarkerState::Active {
            base_radius * (1.0 + 0.35 * journey.pulse().sin())
        } else {
            base_radius
        };
        ctx.draw(&Circle {
            x: waypoint.coordinates.lng,
            y: waypoint.coordinates.lat,
            radius,
            color: marker_color(state),
        });
        ctx.print(
            waypoint.coordinates.lng + base_radius * 1.5,
            waypoint.coordinates.lat,
            TextLine::from(Span::styled(
                format!("{} {}", index + 1, waypoint.title),
                Style::default().fg(marker_color(state)),
            )),
        );
    }
}

pub fn render_map_placeholder(f: &mut Frame<'_>, area: Rect) {
    let text = Text::from(vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Interactive map temporarily unavailable",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            "Please check back later",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title("Route")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_needs_room_and_configuration() {
        let roomy = Rect::new(0, 0, 80, 24);
        let cramped = Rect::new(0, 0, 20, 6);

        assert!(map_available(true, roomy));
        assert!(!map_available(false, roomy));
        assert!(!map_available(true, cramped));
    }

    #[test]
    fn marker_states_have_distinct_colors() {
        let colors = [
            marker_color(MarkerState::Active),
            marker_color(MarkerState::Visited),
            marker_color(MarkerState::Upcoming),
        ];

        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
