// The five rules a particle can use to chase the cursor. Every rule is a pure
// function of the particle and the pointer snapshot for the current frame:
// it writes a fresh velocity and then steps the position by it.
//
// Two singularities are kept as is in `Galaxy`. The perpendicular pull is
// divided by the distance to the cursor, and the direct pull is divided by
// the particle's scale, which is zero for the trail leader. Either one makes
// the velocity non-finite, and since the next frame measures from the
// corrupted position the particle stays non-finite afterwards.

use std::convert::TryFrom;
use vecmath::{vec2_add, vec2_len, vec2_scale, vec2_sub, Vector2};

use crate::error::TrackerError;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionMode {
    Follow,
    Circle,
    SloppyOrbit,
    SharpOrbit,
    Galaxy,
}

impl MotionMode {
    pub const ALL: [MotionMode; 5] = [
        MotionMode::Follow,
        MotionMode::Circle,
        MotionMode::SloppyOrbit,
        MotionMode::SharpOrbit,
        MotionMode::Galaxy,
    ];

    pub fn index(self) -> u32 {
        match self {
            MotionMode::Follow => 0,
            MotionMode::Circle => 1,
            MotionMode::SloppyOrbit => 2,
            MotionMode::SharpOrbit => 3,
            MotionMode::Galaxy => 4,
        }
    }

    pub fn apply(self, particle: &mut Particle, steering: &Steering) {
        let vel = match self {
            MotionMode::Follow => follow(particle, steering),
            MotionMode::Circle => circle(particle, steering),
            MotionMode::SloppyOrbit => sloppy_orbit(particle, steering),
            MotionMode::SharpOrbit => sharp_orbit(particle, steering),
            MotionMode::Galaxy => galaxy(particle, steering),
        };
        particle.vel = vel;
        particle.pos = vec2_add(particle.pos, vel);
    }
}

impl Default for MotionMode {
    fn default() -> Self {
        MotionMode::Follow
    }
}

impl TryFrom<u32> for MotionMode {
    type Error = TrackerError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        MotionMode::ALL
            .get(index as usize)
            .copied()
            .ok_or(TrackerError::InvalidMotionMode(index))
    }
}

// Everything a rule reads besides the particle itself
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Steering {
    // Cursor position in normalized device coordinates
    pub target: Vector2<f64>,
    // Last mouse movement in surface pixels, y down
    pub movement: Vector2<f64>,
    pub sluggish: bool,
}

impl Steering {
    // Mouse movement as a small NDC displacement, y flipped to point up
    fn drift(&self) -> Vector2<f64> {
        [self.movement[0] / 1000.0, -self.movement[1] / 1000.0]
    }
}

// Runs the active rule, or leaves the particle untouched while the cursor is
// outside the surface
pub fn update_particle(
    particle: &mut Particle,
    mode: MotionMode,
    pointer: &PointerState,
    surface: &Surface,
    sluggish: bool,
) {
    if let Some(position) = pointer.position {
        let steering = Steering {
            target: surface.to_ndc(position),
            movement: pointer.movement,
            sluggish,
        };
        mode.apply(particle, &steering);
    }
}

fn perpendicular(v: Vector2<f64>) -> Vector2<f64> {
    [-v[1], v[0]]
}

fn follow(particle: &Particle, steering: &Steering) -> Vector2<f64> {
    let toward = vec2_sub(steering.target, particle.pos);
    if steering.sluggish {
        vec2_scale(toward, 0.98 / (particle.scale + 1.0))
    } else {
        vec2_scale(toward, 1.0 / (particle.scale + 5.0).ln())
    }
}

fn circle(particle: &Particle, steering: &Steering) -> Vector2<f64> {
    let toward = vec2_sub(steering.target, particle.pos);
    let perp = perpendicular(toward);
    vec2_scale(vec2_add(toward, perp), particle.scale)
}

fn sloppy_orbit(particle: &Particle, steering: &Steering) -> Vector2<f64> {
    let mut toward = vec2_sub(steering.target, particle.pos);
    let perp = perpendicular(toward);
    if vec2_len(toward) < 0.2 {
        toward = [0.0, 0.0];
    }
    orbit_velocity(steering.drift(), perp, particle.scale * 0.2, toward)
}

fn sharp_orbit(particle: &Particle, steering: &Steering) -> Vector2<f64> {
    let mut toward = vec2_sub(steering.target, particle.pos);
    let perp = perpendicular(toward);
    let mag = vec2_len(toward);
    if mag > 0.15 && mag < 0.2 {
        toward = [0.0, 0.0];
    } else if mag <= 0.15 {
        // Push back out from the cursor
        toward = vec2_scale(toward, -0.5);
    }
    // mag >= 0.2 keeps the full pull
    orbit_velocity(steering.drift(), perp, particle.scale * 0.3, toward)
}

fn orbit_velocity(
    drift: Vector2<f64>,
    perp: Vector2<f64>,
    perp_weight: f64,
    toward: Vector2<f64>,
) -> Vector2<f64> {
    vec2_add(
        vec2_add(drift, vec2_scale(perp, perp_weight)),
        vec2_scale(toward, 0.02),
    )
}

fn galaxy(particle: &Particle, steering: &Steering) -> Vector2<f64> {
    let toward = vec2_sub(steering.target, particle.pos);
    let mag = vec2_len(toward);
    let perp = vec2_scale(perpendicular(toward), 1.0 / mag);
    let pull = [
        toward[0] / particle.scale * 0.01,
        toward[1] / particle.scale * 0.01,
    ];
    vec2_add(
        vec2_add(steering.drift(), vec2_scale(perp, particle.scale * 0.1)),
        pull,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::create_particles;

    const EPSILON: f64 = 1e-9;

    fn assert_vec_close(actual: Vector2<f64>, expected: Vector2<f64>) {
        assert!(
            (actual[0] - expected[0]).abs() < EPSILON && (actual[1] - expected[1]).abs() < EPSILON,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    fn particle_with_scale(scale: u32) -> Particle {
        Particle::new(scale, 10)
    }

    fn steering(target: Vector2<f64>) -> Steering {
        Steering {
            target,
            movement: [0.0, 0.0],
            sluggish: false,
        }
    }

    #[test]
    fn mode_indices_round_trip() {
        for (i, mode) in MotionMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i as u32);
            assert_eq!(MotionMode::try_from(i as u32).ok(), Some(*mode));
        }
        assert!(matches!(
            MotionMode::try_from(5),
            Err(TrackerError::InvalidMotionMode(5))
        ));
        assert_eq!(MotionMode::default(), MotionMode::Follow);
    }

    #[test]
    fn absent_pointer_leaves_particles_untouched() {
        let surface = Surface::new(800.0, 600.0);
        let pointer = PointerState {
            position: None,
            movement: [12.0, -7.0],
        };
        for &mode in MotionMode::ALL.iter() {
            for sluggish in [false, true].iter() {
                let mut particles = create_particles(10);
                for p in particles.iter_mut() {
                    p.pos = [0.3, -0.4];
                    p.vel = [0.01, 0.02];
                }
                let before = particles.clone();
                for p in particles.iter_mut() {
                    update_particle(p, mode, &pointer, &surface, *sluggish);
                }
                assert_eq!(particles, before, "mode {:?} moved particles", mode);
            }
        }
    }

    #[test]
    fn update_projects_pointer_into_ndc() {
        let surface = Surface::new(800.0, 600.0);
        let mut pointer = PointerState::default();
        // Top right corner of the surface
        pointer.on_move(800.0, 0.0, 0.0, 0.0);
        let mut p = particle_with_scale(0);
        update_particle(&mut p, MotionMode::Follow, &pointer, &surface, false);
        let expected = 1.0 / 5f64.ln();
        assert_vec_close(p.vel, [expected, expected]);
        assert_vec_close(p.pos, p.vel);
    }

    #[test]
    fn follow_divides_by_log_of_scale() {
        let mut p = particle_with_scale(0);
        MotionMode::Follow.apply(&mut p, &steering([1.0, 1.0]));
        assert!((p.vel[0] - 0.6213).abs() < 1e-4);
        assert_vec_close(p.vel, [1.0 / 5f64.ln(), 1.0 / 5f64.ln()]);
        assert_vec_close(p.pos, p.vel);

        let mut p = particle_with_scale(3);
        p.pos = [0.5, 0.5];
        MotionMode::Follow.apply(&mut p, &steering([-0.5, 1.5]));
        let k = 1.0 / 8f64.ln();
        assert_vec_close(p.vel, [-k, k]);
        assert_vec_close(p.pos, [0.5 - k, 0.5 + k]);
    }

    #[test]
    fn sluggish_follow_damps_by_scale() {
        let mut s = steering([1.0, -1.0]);
        s.sluggish = true;

        let mut leader = particle_with_scale(0);
        MotionMode::Follow.apply(&mut leader, &s);
        assert_vec_close(leader.vel, [0.98, -0.98]);

        let mut follower = particle_with_scale(4);
        MotionMode::Follow.apply(&mut follower, &s);
        assert_vec_close(follower.vel, [0.98 / 5.0, -0.98 / 5.0]);
    }

    #[test]
    fn circle_adds_perpendicular_pull() {
        let mut p = particle_with_scale(2);
        MotionMode::Circle.apply(&mut p, &steering([0.0, 1.0]));
        assert_vec_close(p.vel, [-2.0, 2.0]);
        assert_vec_close(p.pos, [-2.0, 2.0]);
    }

    #[test]
    fn circle_leader_never_moves() {
        let mut p = particle_with_scale(0);
        MotionMode::Circle.apply(&mut p, &steering([0.7, -0.2]));
        assert_vec_close(p.vel, [0.0, 0.0]);
        assert_vec_close(p.pos, [0.0, 0.0]);
    }

    #[test]
    fn sloppy_orbit_ignores_pull_near_cursor() {
        let mut p = particle_with_scale(3);
        MotionMode::SloppyOrbit.apply(&mut p, &steering([0.1, 0.0]));
        // toward (0.1, 0) is dropped, perp (0, 0.1) weighted by 3 * 0.2
        assert_vec_close(p.vel, [0.0, 0.06]);
        assert_vec_close(p.pos, [0.0, 0.06]);
    }

    #[test]
    fn sloppy_orbit_far_from_cursor() {
        let mut p = particle_with_scale(1);
        let s = Steering {
            target: [0.5, 0.0],
            movement: [10.0, 20.0],
            sluggish: false,
        };
        MotionMode::SloppyOrbit.apply(&mut p, &s);
        // drift (0.01, -0.02), perp (0, 0.5) * 0.2, toward (0.5, 0) * 0.02
        assert_vec_close(p.vel, [0.01 + 0.01, -0.02 + 0.1]);
    }

    #[test]
    fn sloppy_orbit_pull_starts_at_point_two() {
        let mut p = particle_with_scale(0);
        MotionMode::SloppyOrbit.apply(&mut p, &steering([0.2, 0.0]));
        assert_vec_close(p.vel, [0.004, 0.0]);

        let mut p = particle_with_scale(0);
        MotionMode::SloppyOrbit.apply(&mut p, &steering([0.1999, 0.0]));
        assert_vec_close(p.vel, [0.0, 0.0]);
    }

    #[test]
    fn sharp_orbit_region_edges() {
        // 0.15 still pushes out
        let mut p = particle_with_scale(0);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.15, 0.0]));
        assert_vec_close(p.vel, [-0.0015, 0.0]);

        // just past it the pull is dropped
        let mut p = particle_with_scale(0);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.1501, 0.0]));
        assert_vec_close(p.vel, [0.0, 0.0]);

        let mut p = particle_with_scale(0);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.1999, 0.0]));
        assert_vec_close(p.vel, [0.0, 0.0]);

        // 0.2 keeps the full pull
        let mut p = particle_with_scale(0);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.2, 0.0]));
        assert_vec_close(p.vel, [0.004, 0.0]);
    }

    #[test]
    fn sharp_orbit_band_zeroes_pull() {
        let mut p = particle_with_scale(0);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.18, 0.0]));
        assert_vec_close(p.vel, [0.0, 0.0]);
    }

    #[test]
    fn sharp_orbit_inner_region_pushes_out() {
        let mut p = particle_with_scale(0);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.1, 0.0]));
        assert_vec_close(p.vel, [-0.05 * 0.02, 0.0]);

        let mut p = particle_with_scale(2);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.0, 0.1]));
        // perp (-0.1, 0) * 2 * 0.3, toward (0, -0.05) * 0.02
        assert_vec_close(p.vel, [-0.06, -0.001]);
    }

    #[test]
    fn sharp_orbit_outer_region_keeps_pull() {
        let mut p = particle_with_scale(0);
        MotionMode::SharpOrbit.apply(&mut p, &steering([0.5, 0.0]));
        assert_vec_close(p.vel, [0.01, 0.0]);
    }

    #[test]
    fn galaxy_normalizes_perpendicular() {
        let mut p = particle_with_scale(2);
        MotionMode::Galaxy.apply(&mut p, &steering([0.0, 1.0]));
        // perp (-1, 0) * 2 * 0.1, toward (0, 1) / 2 * 0.01
        assert_vec_close(p.vel, [-0.2, 0.005]);

        let mut p = particle_with_scale(2);
        MotionMode::Galaxy.apply(&mut p, &steering([0.0, 4.0]));
        assert_vec_close(p.vel, [-0.2, 0.02]);
    }

    #[test]
    fn galaxy_at_cursor_is_not_finite() {
        // Distance zero divides the perpendicular by zero, kept unguarded
        let mut p = particle_with_scale(1);
        p.pos = [0.25, 0.25];
        MotionMode::Galaxy.apply(&mut p, &steering([0.25, 0.25]));
        assert!(p.vel[0].is_nan() && p.vel[1].is_nan());
        assert!(p.pos[0].is_nan() && p.pos[1].is_nan());

        // and the corruption sticks once the cursor moves away
        MotionMode::Galaxy.apply(&mut p, &steering([0.9, -0.9]));
        assert!(p.pos[0].is_nan());
    }

    #[test]
    fn galaxy_leader_divides_by_zero_scale() {
        let mut p = particle_with_scale(0);
        MotionMode::Galaxy.apply(&mut p, &steering([0.0, 1.0]));
        // 0 / 0 on x, 1 / 0 on y
        assert!(p.vel[0].is_nan());
        assert!(p.vel[1].is_infinite() && p.vel[1] > 0.0);
    }
}
