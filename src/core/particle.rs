use crate::constants::{
    PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN, PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN,
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One orbiting dot. Particles are independent of each other and immutable
/// once seeded; only the clock moves them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Seed position in surface pixels. Motion is derived from the orbit
    /// parameters, so this only matters before the first frame.
    pub position: Vec2,
    pub radius: f32,
    pub angular_speed: f32,
    pub phase_offset: f32,
}

impl Particle {
    /// Draw a particle uniformly inside a `width x height` surface.
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
            angular_speed: rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX),
            phase_offset: rng.gen_range(0.0..TAU),
        }
    }
}

/// Seed `count` particles for a surface of the given size.
pub fn seed_particles<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng, width, height)).collect()
}
