//! The farm-to-destination shipping route and the timeline animation that
//! walks it.

use crate::clock::FrameClock;
use crate::error::JourneyError;

/// Seconds each waypoint stays active while auto-advancing.
pub const AUTO_ADVANCE_SECONDS: f64 = 2.5;
const PULSE_SPEED: f64 = 3.0;
const OVERVIEW_PADDING: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaypointKind {
    Farm,
    Port,
    Ocean,
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub id: &'static str,
    pub kind: WaypointKind,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub coordinates: GeoPoint,
    pub details: &'static [&'static str],
    /// `None` frames the whole route instead of zooming on the waypoint.
    pub zoom: Option<u8>,
}

pub const WAYPOINTS: [Waypoint; 4] = [
    Waypoint {
        id: "step-1",
        kind: WaypointKind::Farm,
        title: "Farm",
        description: "Grass-fed beef from our certified farm",
        location: "Dunedin, New Zealand",
        duration: "Day 1",
        coordinates: GeoPoint { lat: -45.8788, lng: 170.5028 },
        details: &["Quality inspection", "Processing"],
        zoom: Some(7),
    },
    Waypoint {
        id: "step-2",
        kind: WaypointKind::Port,
        title: "Port",
        description: "Shipment departs New Zealand",
        location: "Port of Otago",
        duration: "Day 2",
        coordinates: GeoPoint { lat: -45.8167, lng: 170.6167 },
        details: &["Refrigerated containers", "Customs clearance"],
        zoom: Some(7),
    },
    Waypoint {
        id: "step-3",
        kind: WaypointKind::Ocean,
        title: "Ocean",
        description: "Sustainable sea transport",
        location: "Pacific Ocean",
        duration: "Days 3-20",
        coordinates: GeoPoint { lat: -20.0, lng: 160.0 },
        details: &["Temperature monitoring", "Quality checks"],
        zoom: None,
    },
    Waypoint {
        id: "step-4",
        kind: WaypointKind::Destination,
        title: "Destination",
        description: "Beef arrives in Shanghai",
        location: "Shanghai, China",
        duration: "Day 21",
        coordinates: GeoPoint { lat: 31.2304, lng: 121.4737 },
        details: &["Final inspection", "Distribution"],
        zoom: Some(5),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmProfile {
    pub name: &'static str,
    pub location: &'static str,
    pub farmer: &'static str,
    pub story: &'static str,
    pub practices: &'static [&'static str],
    pub certifications: &'static [&'static str],
}

pub const FARM: FarmProfile = FarmProfile {
    name: "Southern Cross Farm",
    location: "Dunedin, South Island, New Zealand",
    farmer: "Sarah & Michael Thompson",
    story: "Our family has been farming this land for three generations. We believe in \
            sustainable practices that respect both the animals and the environment. Our \
            cattle graze freely on lush pastures, ensuring the highest quality beef while \
            maintaining the natural ecosystem.",
    practices: &[
        "Grass-fed",
        "Free-range",
        "Sustainable farming",
        "Animal welfare focused",
    ],
    certifications: &[
        "NZ Beef + Lamb Quality Mark",
        "Organic Certification",
        "Animal Welfare Approved",
    ],
};

/// Visible window of the map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: GeoPoint,
    pub lng_span: f64,
    pub lat_span: f64,
}

impl Camera {
    /// Web-map style zoom: every level halves the visible span.
    pub fn at(center: GeoPoint, zoom: u8) -> Self {
        let lng_span = 360.0 / 2_f64.powi(i32::from(zoom));
        Self {
            center,
            lng_span,
            lat_span: lng_span / 2.0,
        }
    }

    /// Smallest window holding every point, widened by `padding` degrees.
    pub fn fit(points: &[GeoPoint], padding: f64) -> Self {
        let (mut min_lat, mut max_lat) = (f64::MAX, f64::MIN);
        let (mut min_lng, mut max_lng) = (f64::MAX, f64::MIN);
        for point in points {
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
        }
        if points.is_empty() {
            return Self::world();
        }

        Self {
            center: GeoPoint {
                lat: (min_lat + max_lat) / 2.0,
                lng: (min_lng + max_lng) / 2.0,
            },
            lng_span: 2.0f64.mul_add(padding, max_lng - min_lng),
            lat_span: 2.0f64.mul_add(padding, max_lat - min_lat),
        }
    }

    pub const fn world() -> Self {
        Self {
            center: GeoPoint { lat: 0.0, lng: 0.0 },
            lng_span: 360.0,
            lat_span: 180.0,
        }
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lng_span / 2.0;
        [self.center.lng - half, self.center.lng + half]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        (west..=east).contains(&point.lng) && (south..=north).contains(&point.lat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Active,
    Visited,
    Upcoming,
}

/// Which waypoint is active, plus the clock that advances it on its own
/// until the user picks a step.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyAnimator {
    active: Option<usize>,
    auto_advance: bool,
    clock: FrameClock,
    elapsed: f64,
    pulse: f64,
}

impl Default for JourneyAnimator {
    fn default() -> Self {
        Self::mounted()
    }
}

impl JourneyAnimator {
    /// State right after the page appears: first waypoint active and
    /// auto-advance running.
    pub const fn mounted() -> Self {
        Self {
            active: Some(0),
            auto_advance: true,
            clock: FrameClock::new(),
            elapsed: 0.0,
            pulse: 0.0,
        }
    }

    /// Explicit user choice. Stops auto-advance; returns whether the active
    /// step changed.
    pub fn select(&mut self, index: usize) -> Result<bool, JourneyError> {
        if index >= WAYPOINTS.len() {
            return Err(JourneyError::OutOfRange {
                index,
                len: WAYPOINTS.len(),
            });
        }
        self.auto_advance = false;
        self.elapsed = 0.0;
        let changed = self.active != Some(index);
        self.active = Some(index);
        Ok(changed)
    }

    pub fn next_step(&mut self) -> bool {
        let next = self.active.map_or(0, |index| (index + 1).min(WAYPOINTS.len() - 1));
        self.select(next).unwrap_or(false)
    }

    pub fn previous_step(&mut self) -> bool {
        let previous = self.active.map_or(0, |index| index.saturating_sub(1));
        self.select(previous).unwrap_or(false)
    }

    /// Pauses or resumes auto-advance. Resuming from the last step replays
    /// the journey from the farm.
    pub fn toggle_auto_advance(&mut self) {
        if self.auto_advance {
            self.auto_advance = false;
            return;
        }
        if self.active == Some(WAYPOINTS.len() - 1) {
            self.active = Some(0);
        }
        self.elapsed = 0.0;
        self.auto_advance = true;
    }

    /// Feeds a wall-clock sample; returns `true` when the active step moved.
    pub fn tick(&mut self, now_seconds: f64) -> bool {
        let delta = self.clock.advance(now_seconds);
        self.pulse = delta
            .mul_add(PULSE_SPEED, self.pulse)
            .rem_euclid(std::f64::consts::TAU);

        if !self.auto_advance {
            return false;
        }

        self.elapsed += delta;
        if self.elapsed < AUTO_ADVANCE_SECONDS {
            return false;
        }
        self.elapsed -= AUTO_ADVANCE_SECONDS;

        match self.active {
            None => {
                self.active = Some(0);
                true
            }
            Some(index) if index + 1 < WAYPOINTS.len() => {
                self.active = Some(index + 1);
                if index + 2 == WAYPOINTS.len() {
                    self.auto_advance = false;
                }
                true
            }
            Some(_) => {
                self.auto_advance = false;
                false
            }
        }
    }

    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_waypoint(&self) -> Option<&'static Waypoint> {
        self.active.and_then(|index| WAYPOINTS.get(index))
    }

    pub const fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    /// Phase in `0..TAU` for pulsing the active marker.
    pub const fn pulse(&self) -> f64 {
        self.pulse
    }

    /// Waypoints of the highlighted route, farm through the active step.
    pub fn path_prefix(&self) -> &'static [Waypoint] {
        match self.active {
            Some(index) => &WAYPOINTS[..=index.min(WAYPOINTS.len() - 1)],
            None => &[],
        }
    }

    pub fn marker_state(&self, index: usize) -> MarkerState {
        match self.active {
            Some(active) if index == active => MarkerState::Active,
            Some(active) if index < active => MarkerState::Visited,
            _ => MarkerState::Upcoming,
        }
    }

    pub fn camera(&self) -> Camera {
        match self.active_waypoint() {
            Some(Waypoint {
                coordinates,
                zoom: Some(zoom),
                ..
            }) => Camera::at(*coordinates, *zoom),
            _ => route_overview(),
        }
    }
}

pub fn route_overview() -> Camera {
    let points: Vec<GeoPoint> = WAYPOINTS.iter().map(|waypoint| waypoint.coordinates).collect();
    Camera::fit(&points, OVERVIEW_PADDING)
}
