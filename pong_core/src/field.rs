use glam::Vec2;

use crate::params::Params;

/// The playable boundary. Conceptually owned by the driver; the simulation
/// only ever reads it.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the field.
    ///
    /// This rule defines the human paddle invariant; pointer adapters must
    /// apply it (or delegate here) on every update.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.height - paddle_height)
    }
}
