// Per-frame driver for the cursor trail. Owns the particle store, the tracker
// settings and the latest pointer snapshot. Drawing and frame scheduling go
// through the PointRenderer and Scheduler traits so a frame can be stepped
// without a browser

use crate::color::Color;
use crate::config::TrackerConfig;
use crate::motion::{self, MotionMode};
use crate::particle::{create_particles, Particle};
use crate::pointer::PointerState;
use crate::surface::Surface;

// Something that can draw round, flat colored points
pub trait PointRenderer {
    fn clear(&mut self);
    // position is in normalized device coordinates, size in pixels
    fn draw_point(&mut self, position: [f64; 2], size: f64, color: Color);
}

// Arranges for the next frame to run, one frame at a time
pub trait Scheduler {
    fn schedule_next_tick(&mut self);
    fn cancel_pending(&mut self);
}

pub struct FrameDriver {
    particles: Vec<Particle>,
    config: TrackerConfig,
    pointer: PointerState,
    surface: Surface,
    frames: u64,
}

impl FrameDriver {
    pub fn new(config: TrackerConfig, surface: Surface) -> Self {
        FrameDriver {
            particles: create_particles(config.particle_count()),
            config,
            pointer: PointerState::default(),
            surface,
            frames: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn set_motion_mode(&mut self, mode: MotionMode) {
        self.config.set_motion_mode(mode);
    }

    pub fn set_sluggish(&mut self, sluggish: bool) {
        self.config.set_sluggish(sluggish);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, movement_x: f64, movement_y: f64) {
        self.pointer.on_move(x, y, movement_x, movement_y);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_leave();
    }

    // Newest particle first so the trail leader ends up on top
    pub fn tick<R: PointRenderer>(&mut self, renderer: &mut R) {
        renderer.clear();
        let mode = self.config.motion_mode();
        let sluggish = self.config.sluggish();
        for particle in self.particles.iter_mut().rev() {
            motion::update_particle(particle, mode, &self.pointer, &self.surface, sluggish);
            renderer.draw_point(particle.pos, particle.size, particle.color);
        }
        self.frames += 1;
    }

    // Any pending request is dropped before the frame runs and a new one is
    // made after it
    pub fn run_frame<R: PointRenderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) {
        scheduler.cancel_pending();
        self.tick(renderer);
        scheduler.schedule_next_tick();
    }
}
