/// A linear RGBA color with float channels, nominally in 0.0..=1.0
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ColorRGBA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for ColorRGBA {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

impl ColorRGBA {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From a 0xRRGGBB integer, fully opaque
    pub fn from_u32(u: u32) -> Self {
        let channel = |shift: u32| ((u >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0), 1.0)
    }
}
