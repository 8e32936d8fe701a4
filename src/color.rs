// Simple float color struct, channels in [0, 1]. Particle colors come from
// their place in the trail
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    // Color of the particle at `index` in a trail of `count` particles.
    // Leaders are bright and opaque, followers fade out in both the blue
    // channel and alpha
    pub fn trail(index: u32, count: u32) -> Color {
        let i = index as f64;
        let n = count as f64;
        let b = 1.0 - (i + 1.0) / (n + 1.0) * 0.8 + 0.2;
        let a = 1.0 / (1.0 + 2.0 * i);
        Color::new(0.0, 0.0, b as f32, a as f32)
    }

    pub fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
