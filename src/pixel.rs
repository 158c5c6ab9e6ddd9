/// Luminance weights applied to normalized red, green and blue.
pub const LUMINANCE_WEIGHTS: [f32; 3] = [0.229, 0.587, 0.114];

/// Channels above this normalized value count toward "white".
pub const WHITE_THRESHOLD: f32 = 0.70;

/// A colour with `f32` channels, nominally in `0.0..=1.0`.
///
/// Values outside that range are legal and are passed through to the
/// canvas unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Same value in all three channels.
    pub const fn grey(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Weighted greyscale intensity.
    pub fn luminance(&self) -> f32 {
        luminance(self.r, self.g, self.b)
    }

    /// Whether this colour is treated as transparent white.
    ///
    /// Only red and blue are compared against the threshold; green is not
    /// consulted.
    pub fn is_white(&self) -> bool {
        self.r > WHITE_THRESHOLD && self.b > WHITE_THRESHOLD && self.b > WHITE_THRESHOLD
    }
}

/// Weighted greyscale intensity of three channel values.
///
/// Works on any scale: normalized floats give a normalized result, byte
/// values give a byte-scale result.
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    r * wr + g * wg + b * wb
}
