use crate::components::Side;

/// Tick counter for the fixed-cadence simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, winner: Side) {
        match winner {
            Side::Human => self.human += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// A point was scored this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub winner: Side,
}

/// Events that occurred during this tick, for render/audio consumers
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.scored = None;
    }
}

/// Pointer targets queued for the human paddle (desired vertical centers).
///
/// Pointer events may arrive at any rate between ticks; only the newest
/// target matters, so draining discards everything but the last write.
#[derive(Debug, Clone, Default)]
pub struct PointerQueue {
    targets: Vec<f32>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_target(&mut self, target: f32) {
        self.targets.push(target);
    }

    /// Drain the queue, returning the newest target if any arrived.
    pub fn take_latest(&mut self) -> Option<f32> {
        let latest = self.targets.last().copied();
        self.targets.clear();
        latest
    }
}
