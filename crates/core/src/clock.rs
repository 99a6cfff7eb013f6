/// Longest frame gap the animations will honour, in seconds.
pub const MAX_FRAME_DELTA: f64 = 0.25;

/// Turns wall-clock samples into clamped frame deltas.
///
/// The first sample only starts the clock. Gaps are clamped so a suspended
/// tab or a stalled terminal does not fast-forward animations, and time
/// running backwards never yields a negative delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    last_tick: Option<f64>,
}

impl FrameClock {
    pub const fn new() -> Self {
        Self { last_tick: None }
    }

    pub fn advance(&mut self, now_seconds: f64) -> f64 {
        let delta = self
            .last_tick
            .map_or(0.0, |last| (now_seconds - last).clamp(0.0, MAX_FRAME_DELTA));
        self.last_tick = Some(now_seconds);
        delta
    }

    pub const fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }
}
