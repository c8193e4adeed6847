//!
//! Converts textual color notations to the canonical `#RRGGBB` form.
//!
//! Recognized, in this order:
//! * `#RGB`, `#RRGGBB`, `#RRGGBBAA`. The `#` is optional, alpha is dropped.
//! * `rgb(r, g, b)` and `rgba(r, g, b, a)`. Components are 0..255, 0..1 or
//!   percentages. If any component is above 1 all are taken as 0..255.
//! * `hsv(h, s, v)` and `hsl(h, s, l)`. Hue in degrees or as a 0..1 fraction.
//! * `hcl(h, c, l)`. CIE LCh(uv) with chroma and lightness 0..100 or 0..1.
//! * color names.
//!

use crate::error::ColorError;
use crate::named;
use log::warn;
use palette::encoding;
use palette::white_point::D65;
use palette::{FromColor, Hsl, Hsv, Lchuv, Srgb};
use std::fmt::{Display, Formatter};

/// Parse any supported color notation to `#RRGGBB`.
pub fn to_hex(text: &str) -> Result<String, ColorError> {
    parse_color(text).map(srgb_to_hex)
}

/// Parse any supported color notation.
pub fn parse_color(text: &str) -> Result<Srgb<f64>, ColorError> {
    let c = text.trim();

    if let Some(hex) = hex_digits(c) {
        return parse_hex(hex).ok_or_else(|| ColorError::InvalidColorFormat(text.into()));
    }

    let lower = c.to_lowercase();
    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        return parse_rgb(components(c, text)?);
    }
    if lower.starts_with("hsv(") {
        return parse_hsv(components(c, text)?);
    }
    if lower.starts_with("hsl(") {
        return parse_hsl(components(c, text)?);
    }
    if lower.starts_with("hcl(") {
        return parse_hcl(components(c, text)?);
    }

    match named::lookup(c) {
        Some(v) => Ok(v.into_format()),
        None => Err(ColorError::InvalidColorFormat(text.into())),
    }
}

/// Map every color through [to_hex]. Fails with the first invalid one.
pub fn validate_colors<I, S>(colors: I) -> Result<Vec<String>, ColorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    colors.into_iter().map(|v| to_hex(v.as_ref())).collect()
}

/// Clamps each channel to `0..=1` and formats as `#RRGGBB`.
pub fn srgb_to_hex(color: Srgb<f64>) -> String {
    let (r, g, b) = color.into_components();
    format!(
        "#{:02X}{:02X}{:02X}",
        channel_to_u8(r),
        channel_to_u8(g),
        channel_to_u8(b)
    )
}

fn channel_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Accepts something that looks like a hex color, with or without `#`.
/// Five digits pass here and fail later.
fn hex_digits(c: &str) -> Option<&str> {
    let digits = c.strip_prefix('#').unwrap_or(c);
    if matches!(digits.len(), 3 | 5 | 6 | 8) && digits.chars().all(|v| v.is_ascii_hexdigit()) {
        Some(digits)
    } else {
        None
    }
}

fn parse_hex(digits: &str) -> Option<Srgb<f64>> {
    let v = match digits.len() {
        3 => {
            let v = u32::from_str_radix(digits, 16).ok()?;
            let r = (v >> 8) & 0xf;
            let g = (v >> 4) & 0xf;
            let b = v & 0xf;
            ((r * 0x11) << 16) + ((g * 0x11) << 8) + (b * 0x11)
        }
        6 | 8 => u32::from_str_radix(&digits[0..6], 16).ok()?,
        _ => return None,
    };
    let rgb = Srgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8);
    Some(rgb.into_format())
}

/// Numbers between the parens. Percentages are divided by 100.
struct Components([f64; 3]);

fn components(c: &str, text: &str) -> Result<Components, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(text.into());

    let Some(start) = c.find('(') else {
        return Err(invalid());
    };
    let Some(inner) = c[start + 1..].strip_suffix(')') else {
        return Err(invalid());
    };

    let mut parts = inner.split(',');
    let mut v = [0f64; 3];
    for slot in v.iter_mut() {
        let Some(part) = parts.next() else {
            return Err(invalid());
        };
        *slot = parse_number(part).ok_or_else(invalid)?;
    }
    Ok(Components(v))
}

fn parse_number(tok: &str) -> Option<f64> {
    let tok = tok.trim();
    let v = if let Some(pct) = tok.strip_suffix('%') {
        pct.trim().parse::<f64>().ok()? / 100.0
    } else {
        tok.parse::<f64>().ok()?
    };
    v.is_finite().then_some(v)
}

/// Hue in degrees or as fraction of the circle, gives the fraction.
fn hue_fraction(h: f64) -> f64 {
    if h > 1.0 {
        h.rem_euclid(360.0) / 360.0
    } else {
        h
    }
}

fn parse_rgb(c: Components) -> Result<Srgb<f64>, ColorError> {
    let [r, g, b] = c.0;
    if r > 1.0 || g > 1.0 || b > 1.0 {
        Ok(Srgb::new(r / 255.0, g / 255.0, b / 255.0))
    } else {
        Ok(Srgb::new(r, g, b))
    }
}

fn parse_hsv(c: Components) -> Result<Srgb<f64>, ColorError> {
    let [h, s, v] = c.0;
    let hsv = Hsv::<encoding::Srgb, f64>::new(hue_fraction(h) * 360.0, s, v);
    Ok(Srgb::from_color(hsv))
}

fn parse_hsl(c: Components) -> Result<Srgb<f64>, ColorError> {
    let [h, s, l] = c.0;
    let hsl = Hsl::<encoding::Srgb, f64>::new(hue_fraction(h) * 360.0, s, l);
    Ok(Srgb::from_color(hsl))
}

fn parse_hcl(c: Components) -> Result<Srgb<f64>, ColorError> {
    let [h, c, l] = c.0;
    let h = if h > 1.0 { h.rem_euclid(360.0) } else { h * 360.0 };
    let c = if c <= 1.0 { c * 100.0 } else { c };
    let l = if l <= 1.0 { l * 100.0 } else { l };

    match lchuv_to_srgb(l, c, h) {
        Ok(v) => Ok(v),
        Err(e) => {
            warn!("hcl({}, {}, {}): {}, using hsl approximation", h, c, l, e);
            Ok(lch_approx_srgb(l, c, h))
        }
    }
}

/// Failures of the LCh(uv) to sRGB conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LchError {
    /// Some input component is NaN or infinite.
    NonFiniteInput,
    /// The conversion produced NaN or infinite channels.
    /// Finite input converts cleanly with palette 0.7, this guards
    /// against NaN from the Luv to Xyz step for degenerate values.
    NonFiniteOutput,
}

impl Display for LchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LchError::NonFiniteInput => write!(f, "non-finite lch input"),
            LchError::NonFiniteOutput => write!(f, "non-finite srgb output"),
        }
    }
}

impl std::error::Error for LchError {}

/// CIE LCh(uv) with D65 white point to sRGB. Channels are clamped to `0..=1`.
///
/// `l` and `c` are 0..100, `h` is in degrees.
pub fn lchuv_to_srgb(l: f64, c: f64, h: f64) -> Result<Srgb<f64>, LchError> {
    if !(l.is_finite() && c.is_finite() && h.is_finite()) {
        return Err(LchError::NonFiniteInput);
    }
    let lch = Lchuv::<D65, f64>::new(l, c, h);
    let rgb: Srgb<f64> = Srgb::from_color(lch);
    let (r, g, b) = rgb.into_components();
    if !(r.is_finite() && g.is_finite() && b.is_finite()) {
        return Err(LchError::NonFiniteOutput);
    }
    Ok(Srgb::new(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)))
}

/// Rough stand-in for LCh: HSL with the chroma used as saturation.
pub fn lch_approx_srgb(l: f64, c: f64, h: f64) -> Srgb<f64> {
    let s = (c / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);
    let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
    Srgb::from_color(Hsl::<encoding::Srgb, f64>::new(h, s, l))
}
