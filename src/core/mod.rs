pub mod color;
pub mod config;
pub mod field;
pub mod mood;
pub mod particle;
pub mod renderer;
pub mod surface;

pub use color::Hsla;
pub use config::OrbConfig;
pub use field::{
    connections, core_radius, particle_depth, particle_position, FrameGeometry, Link,
    ParticleField,
};
pub use mood::{Mood, MoodParams, UnknownMood};
pub use particle::Particle;
pub use renderer::{FrameRequest, FrameScheduler, OrbRenderer};
pub use surface::{ColorStop, DisplayList, DrawCommand, Surface};
