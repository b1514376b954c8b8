//! Per-frame geometry of the orb: breathing halo, rings, orbiting particles
//! and the proximity graph between them.

use super::color::Hsla;
use super::mood::{Mood, MoodParams};
use super::particle::{seed_particles, Particle};
use super::surface::{ColorStop, DrawCommand, Surface};
use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Particle set plus clock for one orb configuration.
///
/// The field is rebuilt from scratch whenever mood or scale changes, so
/// neither motion nor time carries over between configurations.
#[derive(Clone, Debug)]
pub struct ParticleField {
    mood: Mood,
    scale: f32,
    particles: Vec<Particle>,
    frames: u64,
}

/// Everything derived from `(mood, scale, time)` that one frame needs.
#[derive(Clone, Debug)]
pub struct FrameGeometry {
    pub time: f32,
    pub params: MoodParams,
    pub center: Vec2,
    pub radius: f32,
    pub positions: Vec<Vec2>,
    pub depths: Vec<f32>,
}

/// A proximity line between particles `a < b`, `distance` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

impl ParticleField {
    /// Seed a field for a `side x side` pixel surface.
    pub fn new<R: Rng>(mood: Mood, scale: f32, side: u32, rng: &mut R) -> Self {
        let side = side as f32;
        Self {
            mood,
            scale,
            particles: seed_particles(rng, PARTICLE_COUNT, side, side),
            frames: 0,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clock value; advances by [`TIME_STEP`] per frame. Derived from the
    /// frame count so that it does not accumulate rounding error.
    pub fn time(&self) -> f32 {
        self.frames as f32 * TIME_STEP
    }

    pub fn advance(&mut self) {
        self.frames += 1;
    }

    pub fn geometry(&self, center: Vec2) -> FrameGeometry {
        let time = self.time();
        let params = self.mood.params();
        let radius = core_radius(time, self.scale, params.pulse_speed);
        let orbit = radius * ORBIT_DISTANCE_FRACTION;
        let positions = self
            .particles
            .iter()
            .enumerate()
            .map(|(i, p)| particle_position(p, i, time, center, orbit, params.rotation_speed))
            .collect();
        let depths = (0..self.particles.len())
            .map(|i| particle_depth(i, time))
            .collect();
        FrameGeometry {
            time,
            params,
            center,
            radius,
            positions,
            depths,
        }
    }

    /// Paint the current frame onto `surface`. Does not advance the clock.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = surface.size();
        let g = self.geometry(Vec2::new(w as f32, h as f32) * 0.5);
        let MoodParams {
            base_hue,
            intensity,
            rotation_speed,
            ..
        } = g.params;

        surface.draw(&DrawCommand::Clear);

        surface.draw(&DrawCommand::FillRadialGradient {
            center: g.center,
            inner_radius: g.radius * HALO_INNER_FRACTION,
            outer_radius: g.radius * HALO_OUTER_FRACTION,
            stops: vec![
                ColorStop {
                    offset: 0.0,
                    color: Hsla::new(base_hue, 80.0, 60.0, HALO_INNER_ALPHA * intensity),
                },
                ColorStop {
                    offset: 0.5,
                    color: Hsla::new(base_hue, 90.0, 50.0, HALO_MID_ALPHA * intensity),
                },
                ColorStop {
                    offset: 1.0,
                    color: Hsla::TRANSPARENT,
                },
            ],
        });

        let group_rotation = g.time * RING_GROUP_SPIN * rotation_speed;
        for i in 0..RING_COUNT {
            let k = i as f32;
            surface.draw(&DrawCommand::StrokeEllipse {
                center: g.center,
                radii: Vec2::new(
                    g.radius * (1.0 + RING_SPREAD_X * k),
                    g.radius * (RING_BASE_Y - RING_SHRINK_Y * k),
                ),
                rotation: group_rotation + g.time + k,
                color: Hsla::new(
                    base_hue + RING_HUE_STEP * k,
                    70.0,
                    60.0,
                    RING_ALPHA * intensity,
                ),
                width: RING_LINE_WIDTH,
            });
        }

        for ((p, &pos), &z) in self.particles.iter().zip(&g.positions).zip(&g.depths) {
            surface.draw(&DrawCommand::FillCircle {
                center: pos,
                radius: p.radius * self.scale * (z + 2.0) / 2.0,
                color: Hsla::new(base_hue, 90.0, 70.0, (z + 1.5) / 3.0 * intensity),
            });
        }

        for link in connections(&g.positions, LINK_DISTANCE * self.scale) {
            surface.draw(&DrawCommand::StrokeLine {
                from: g.positions[link.a],
                to: g.positions[link.b],
                // fades over the unscaled link distance
                color: Hsla::new(
                    base_hue,
                    80.0,
                    80.0,
                    LINK_ALPHA * (1.0 - link.distance / LINK_DISTANCE),
                ),
                width: LINK_LINE_WIDTH,
            });
        }
    }
}

/// Breathing core radius at `time`.
#[inline]
pub fn core_radius(time: f32, scale: f32, pulse_speed: f32) -> f32 {
    CORE_RADIUS * scale + (time * pulse_speed).sin() * CORE_PULSE_AMPLITUDE * scale
}

/// Surface position of particle `index`. The `sin` wobble applies to x only;
/// it is a stylised squash, not a projection.
#[inline]
pub fn particle_position(
    particle: &Particle,
    index: usize,
    time: f32,
    center: Vec2,
    orbit: f32,
    rotation_speed: f32,
) -> Vec2 {
    let angle = particle.phase_offset + time * particle.angular_speed * rotation_speed;
    let wobble = (time * WOBBLE_RATE + index as f32).sin();
    Vec2::new(
        center.x + angle.cos() * orbit * wobble,
        center.y + angle.sin() * orbit,
    )
}

/// Depth proxy in `[-1, 1]`; nearer particles are larger and more opaque.
#[inline]
pub fn particle_depth(index: usize, time: f32) -> f32 {
    (time * WOBBLE_RATE + index as f32).cos()
}

/// All unordered pairs closer than `max_distance`, in `(a, b)` order with
/// `a < b`.
pub fn connections(positions: &[Vec2], max_distance: f32) -> Vec<Link> {
    // all-pairs; fine for a few dozen particles
    let mut links = Vec::new();
    for (a, pa) in positions.iter().enumerate() {
        for (b, pb) in positions.iter().enumerate().skip(a + 1) {
            let distance = pa.distance(*pb);
            if distance < max_distance {
                links.push(Link { a, b, distance });
            }
        }
    }
    links
}
