//!
//! Continuous color gradients.
//!

use crate::error::ColorError;
use crate::parse::{parse_color, srgb_to_hex};
use palette::Srgb;

/// Piecewise-linear gradient through a list of colors.
///
/// The colors are spaced evenly over `0..=1` and interpolated
/// channel-wise in sRGB.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Srgb<f64>>,
}

impl Gradient {
    /// Gradient through the given colors. Any notation known
    /// to [to_hex](crate::to_hex) works.
    pub fn new<I, S>(colors: I) -> Result<Gradient, ColorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stops = colors
            .into_iter()
            .map(|v| parse_color(v.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if stops.is_empty() {
            return Err(ColorError::InvalidArgument(
                "gradient needs at least one color".into(),
            ));
        }
        Ok(Gradient { stops })
    }

    /// The colors the gradient runs through.
    pub fn stops(&self) -> Vec<String> {
        self.stops.iter().map(|v| srgb_to_hex(*v)).collect()
    }

    /// Color at `t`. `t` is clamped to `0..=1`.
    pub fn at(&self, t: f64) -> Srgb<f64> {
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let pos = t * last as f64;
        let seg = (pos.floor() as usize).min(last - 1);
        let f = pos - seg as f64;

        let (r0, g0, b0) = self.stops[seg].into_components();
        let (r1, g1, b1) = self.stops[seg + 1].into_components();
        Srgb::new(
            r0 + (r1 - r0) * f, //
            g0 + (g1 - g0) * f,
            b0 + (b1 - b0) * f,
        )
    }

    /// Color at `t` as `#RRGGBB`.
    pub fn hex_at(&self, t: f64) -> String {
        srgb_to_hex(self.at(t))
    }

    /// `n` evenly spaced colors, both ends included.
    pub fn samples(&self, n: usize) -> Vec<String> {
        match n {
            0 => Vec::new(),
            1 => vec![self.hex_at(0.0)],
            n => (0..n)
                .map(|i| self.hex_at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    /// Same gradient, running backwards.
    pub fn reversed(&self) -> Gradient {
        let mut stops = self.stops.clone();
        stops.reverse();
        Gradient { stops }
    }
}

/// A colormap for a built-in palette.
#[derive(Debug, Clone, PartialEq)]
pub enum Colormap {
    /// Sequential and diverging palettes.
    Continuous(Gradient),
    /// Qualitative palettes.
    Listed(Vec<String>),
}

impl Colormap {
    /// `n` colors from the map. A listed map is cycled.
    pub fn colors(&self, n: usize) -> Vec<String> {
        match self {
            Colormap::Continuous(g) => g.samples(n),
            Colormap::Listed(c) => c.iter().cycle().take(n).cloned().collect(),
        }
    }
}
