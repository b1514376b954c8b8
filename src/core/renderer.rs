use super::config::{sanitize_scale, OrbConfig};
use super::field::ParticleField;
use super::mood::Mood;
use super::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Handle for one pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub i32);

/// Source of display-refresh ticks. The host calls [`OrbRenderer::tick`]
/// when a scheduled frame fires.
pub trait FrameScheduler {
    /// Ask for one more tick. `None` means no tick will come.
    fn schedule_next_frame(&mut self) -> Option<FrameRequest>;

    /// Drop a request. Cancelling one that already fired must be a no-op.
    fn cancel(&mut self, request: FrameRequest);
}

/// Owns an orb's particle field, its surface and its frame scheduler.
///
/// At most one frame request is outstanding at a time. After [`stop`] no
/// request is pending, the particles and clock are gone, and [`tick`] is a
/// no-op until [`start`] is called again.
///
/// [`start`]: OrbRenderer::start
/// [`stop`]: OrbRenderer::stop
/// [`tick`]: OrbRenderer::tick
pub struct OrbRenderer<S: Surface, K: FrameScheduler> {
    config: OrbConfig,
    field: ParticleField,
    surface: S,
    scheduler: K,
    rng: StdRng,
    pending: Option<FrameRequest>,
    running: bool,
}

impl<S: Surface, K: FrameScheduler> OrbRenderer<S, K> {
    /// Size the surface for `config` and seed the particles. The renderer is
    /// created stopped.
    pub fn new(config: OrbConfig, mut surface: S, scheduler: K) -> Self {
        let config = config.with_scale(config.scale);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let side = config.surface_px();
        surface.resize(side, side);
        let field = ParticleField::new(config.mood, config.scale, side, &mut rng);
        log::debug!(
            "[orb] new mood={} scale={} surface={}px",
            config.mood,
            config.scale,
            side
        );
        Self {
            config,
            field,
            surface,
            scheduler,
            rng,
            pending: None,
            running: false,
        }
    }

    pub fn config(&self) -> &OrbConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &K {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut K {
        &mut self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Paint the first frame right away and keep requesting frames. A field
    /// that has already run (e.g. one halted by an unavailable surface) is
    /// replaced first. No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if self.field.frames() > 0 {
            self.reseed();
        }
        self.running = true;
        log::debug!("[orb] start mood={}", self.config.mood);
        self.frame();
    }

    /// Cancel the pending frame and discard the particle set and clock; a
    /// later [`start`](OrbRenderer::start) begins from fresh particles at
    /// time zero. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.cancel_pending();
        if self.running {
            log::debug!("[orb] stop after {} frames", self.field.frames());
            self.running = false;
        }
        if self.field.frames() > 0 {
            self.reseed();
        }
    }

    /// Run one frame: advance the clock, repaint and schedule the next one.
    /// Returns whether a frame was drawn.
    ///
    /// Any request still outstanding is cancelled first, so an eager call
    /// between refreshes does not leave a second loop running.
    pub fn tick(&mut self) -> bool {
        self.cancel_pending();
        if !self.running {
            return false;
        }
        self.frame()
    }

    /// Switch to a new mood and scale. A change rebuilds the particle field
    /// and resizes the surface; an identical configuration is ignored.
    /// Returns whether anything changed.
    pub fn reconfigure(&mut self, mood: Mood, scale: f32) -> bool {
        let scale = sanitize_scale(scale);
        if mood == self.config.mood && scale == self.config.scale {
            return false;
        }
        let was_running = self.running;
        self.cancel_pending();
        self.running = false;

        self.config = self.config.with_mood(mood).with_scale(scale);
        let side = self.config.surface_px();
        self.surface.resize(side, side);
        self.reseed();
        log::info!("[orb] reconfigured mood={} scale={}", mood, scale);

        if was_running {
            self.start();
        }
        true
    }

    pub fn set_mood(&mut self, mood: Mood) -> bool {
        self.reconfigure(mood, self.config.scale)
    }

    pub fn set_scale(&mut self, scale: f32) -> bool {
        self.reconfigure(self.config.mood, scale)
    }

    /// Pick the mood from the host page's activity, see [`Mood::from_activity`].
    pub fn set_activity(&mut self, busy: bool, listening: bool) -> bool {
        self.set_mood(Mood::from_activity(busy, listening))
    }

    fn frame(&mut self) -> bool {
        if !self.surface.is_available() {
            log::debug!("[orb] surface unavailable, halting");
            self.running = false;
            return false;
        }
        self.field.advance();
        self.field.draw(&mut self.surface);
        self.request_frame();
        true
    }

    fn reseed(&mut self) {
        let side = self.config.surface_px();
        self.field = ParticleField::new(self.config.mood, self.config.scale, side, &mut self.rng);
    }

    fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel(request);
        }
    }

    fn request_frame(&mut self) {
        match self.scheduler.schedule_next_frame() {
            Some(request) => self.pending = Some(request),
            None => {
                log::debug!("[orb] scheduler refused frame, halting");
                self.running = false;
            }
        }
    }
}

impl<S: Surface, K: FrameScheduler> Drop for OrbRenderer<S, K> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
