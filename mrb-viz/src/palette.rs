//! Fixed color palettes and RGB interpolation.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear interpolation, `t` in `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Yellow-to-red buckets for population and average scarcity.
pub const SCARCITY: [Rgb; 8] = [
    Rgb::new(0xFF, 0xED, 0xA0),
    Rgb::new(0xFE, 0xD9, 0x76),
    Rgb::new(0xFE, 0xB2, 0x4C),
    Rgb::new(0xFD, 0x8D, 0x3C),
    Rgb::new(0xFC, 0x4E, 0x2A),
    Rgb::new(0xE3, 0x1A, 0x1C),
    Rgb::new(0xBD, 0x00, 0x26),
    Rgb::new(0x80, 0x00, 0x26),
];

/// Light-to-dark blue stops for the continuous monthly scale.
pub const MONTHLY_BLUES: [Rgb; 8] = [
    Rgb::new(0xef, 0xf3, 0xff),
    Rgb::new(0xde, 0xeb, 0xf7),
    Rgb::new(0xc6, 0xdb, 0xef),
    Rgb::new(0x9e, 0xca, 0xe1),
    Rgb::new(0x6b, 0xae, 0xd6),
    Rgb::new(0x42, 0x92, 0xc6),
    Rgb::new(0x21, 0x71, 0xb5),
    Rgb::new(0x08, 0x51, 0x9c),
];

/// Returned by the sentinel scale and for values that cannot be placed.
pub const NO_DATA: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

/// Sample a piecewise-linear ramp through `stops` at `t`, clamped to `[0, 1]`.
///
/// `t = 0` yields the first stop and `t = 1` the last, exactly.
pub fn sample(stops: &[Rgb], t: f64) -> Rgb {
    match stops {
        [] => NO_DATA,
        [only] => *only,
        _ => {
            let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
            let segments = stops.len() - 1;
            let pos = t * segments as f64;
            let i = (pos.floor() as usize).min(segments - 1);
            stops[i].lerp(stops[i + 1], pos - i as f64)
        }
    }
}
