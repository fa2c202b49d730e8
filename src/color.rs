use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Continuous colour maps
// ---------------------------------------------------------------------------

/// `RdYlGn` from ColorBrewer, reversed: green at 0, red at 1.
const RD_YL_GN_R: [u32; 11] = [
    0x006837, 0x1a9850, 0x66bd63, 0xa6d96a, 0xd9ef8b, 0xffffbf, 0xfee08b, 0xfdae61, 0xf46d43,
    0xd73027, 0xa50026,
];

const PLASMA: [u32; 10] = [
    0x0d0887, 0x46039f, 0x7201a8, 0x9c179e, 0xbd3786, 0xd8576b, 0xed7953, 0xfb9f3a, 0xfdca26,
    0xf0f921,
];

/// A gradient sampled on `[0, 1]`, built from evenly spaced colour stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    RdYlGnR,
    Plasma,
}

impl ColorMap {
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::RdYlGnR => "RdYlGn_r",
            ColorMap::Plasma => "plasma",
        }
    }

    fn stops(self) -> &'static [u32] {
        match self {
            ColorMap::RdYlGnR => &RD_YL_GN_R,
            ColorMap::Plasma => &PLASMA,
        }
    }

    /// Colour at position `t`, clamped to `[0, 1]`. NaN maps to the first stop.
    pub fn sample(self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = t as f32;

        let scaled = t * (stops.len() - 1) as f32;
        let lo = (scaled.floor() as usize).min(stops.len() - 1);
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = scaled - lo as f32;

        // Interpolate in linear light so midpoints don't turn muddy.
        let mixed = linear(stops[lo]).mix(linear(stops[hi]), frac);
        let rgb: Srgb<f32> = Srgb::from_linear(mixed);
        let rgb: Srgb<u8> = rgb.into_format();
        Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

fn linear(hex: u32) -> LinSrgb {
    Srgb::<u8>::from(hex).into_format::<f32>().into_linear()
}

/// Scale `values` onto `[0, 1]` using their min and max.
///
/// Constant input maps every value to `0.0`.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if !range.is_finite() || range.abs() < f64::EPSILON {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| (v - min) / range).collect()
}
