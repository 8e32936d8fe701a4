// Particle record for the cursor trail. Size, color and scale are fixed at
// creation, position and velocity are rewritten every frame by the active
// motion rule

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub color: Color,
    pub scale: f64,
}

impl Particle {
    // Log scale keeps the point size nearly constant (~11.5px) across the trail
    const SIZE_OFFSET: f64 = 100000.0;

    pub fn new(index: u32, count: u32) -> Particle {
        Particle {
            size: (index as f64 + Particle::SIZE_OFFSET).ln(),
            pos: [0.0, 0.0],
            vel: [0.0, 0.0],
            color: Color::trail(index, count),
            scale: index as f64,
        }
    }
}

pub fn create_particles(count: u32) -> Vec<Particle> {
    (0..count).map(|i| Particle::new(i, count)).collect()
}
