/// Orb geometry and animation tuning constants.
///
/// All lengths are in surface pixels at `scale = 1`; the renderer multiplies
/// them by the configured scale.
// Surface edge length (square canvas)
pub const SURFACE_SIZE: f32 = 300.0;

// Clock advance per frame
pub const TIME_STEP: f32 = 0.01;

// Particle set
pub const PARTICLE_COUNT: usize = 60;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.2;
pub const PARTICLE_SPEED_MAX: f32 = 0.7;

// Breathing core
pub const CORE_RADIUS: f32 = 60.0;
pub const CORE_PULSE_AMPLITUDE: f32 = 5.0;

// Halo gradient (fractions of the core radius)
pub const HALO_INNER_FRACTION: f32 = 0.2;
pub const HALO_OUTER_FRACTION: f32 = 2.0;
pub const HALO_INNER_ALPHA: f32 = 0.1;
pub const HALO_MID_ALPHA: f32 = 0.05;

// Rings
pub const RING_COUNT: usize = 3;
pub const RING_SPREAD_X: f32 = 0.3; // semi-axis-x grows by this per ring
pub const RING_BASE_Y: f32 = 0.8;
pub const RING_SHRINK_Y: f32 = 0.1; // semi-axis-y shrinks by this per ring
pub const RING_GROUP_SPIN: f32 = 0.2; // group rotation per time unit
pub const RING_HUE_STEP: f32 = 20.0;
pub const RING_ALPHA: f32 = 0.15;
pub const RING_LINE_WIDTH: f32 = 1.0;

// Orbiting particles
pub const ORBIT_DISTANCE_FRACTION: f32 = 1.2;
pub const WOBBLE_RATE: f32 = 0.5; // drives both the x wobble and the depth proxy

// Connective lines
pub const LINK_DISTANCE: f32 = 40.0;
pub const LINK_ALPHA: f32 = 0.1;
pub const LINK_LINE_WIDTH: f32 = 0.5;

// Scale used when the host passes something unusable
pub const DEFAULT_SCALE: f32 = 1.0;
