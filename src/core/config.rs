use super::mood::Mood;
use crate::constants::{DEFAULT_SCALE, SURFACE_SIZE};

/// Construction inputs for an orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbConfig {
    pub mood: Mood,
    /// Linear size multiplier; the surface is `300 * scale` pixels square.
    pub scale: f32,
    /// Fixed RNG seed for reproducible particles; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            mood: Mood::Idle,
            scale: DEFAULT_SCALE,
            seed: None,
        }
    }
}

impl OrbConfig {
    pub fn new(mood: Mood, scale: f32) -> Self {
        Self::default().with_mood(mood).with_scale(scale)
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = sanitize_scale(scale);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Side length of the square surface in whole pixels (truncated, like a
    /// canvas `width` attribute), never less than 1.
    pub fn surface_px(&self) -> u32 {
        ((SURFACE_SIZE * self.scale) as u32).max(1)
    }
}

/// Scale must be finite and positive; anything else falls back to the default.
pub fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        log::warn!("[orb] invalid scale {scale}, using {DEFAULT_SCALE}");
        DEFAULT_SCALE
    }
}
