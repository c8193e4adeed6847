//!
//! Resampling of a palette to the requested number of colors.
//!

use crate::dataset::{PaletteKind, PaletteRecord};
use crate::error::ColorError;
use crate::gradient::Gradient;

/// Order of the resulting colors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl From<i32> for Direction {
    /// `-1` reverses, everything else is taken as forward.
    fn from(value: i32) -> Self {
        if value == -1 {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

impl Direction {
    /// Apply to a list of colors.
    pub fn apply<T>(self, mut colors: Vec<T>) -> Vec<T> {
        if self == Direction::Reverse {
            colors.reverse();
        }
        colors
    }
}

/// Resample a palette.
///
/// * No count gives the palette colors.
/// * More colors than the palette has are interpolated for sequential
///   and diverging palettes, and cycled for qualitative ones.
/// * Fewer colors are taken from the start. Diverging palettes keep
///   the colors around the center instead.
pub fn sample(
    palette: &PaletteRecord,
    count: Option<usize>,
    direction: Direction,
) -> Result<Vec<String>, ColorError> {
    let base = &palette.colors;

    let colors = match count {
        None => base.clone(),
        Some(n) if n > base.len() => {
            if base.is_empty() {
                return Err(ColorError::InvalidArgument(format!(
                    "palette {:?} has no colors",
                    palette.key
                )));
            }
            if palette.kind.is_continuous() {
                Gradient::new(base)?.samples(n)
            } else {
                cycle(base, n)
            }
        }
        Some(n) => match palette.kind {
            PaletteKind::Diverging => center_out(base, n),
            PaletteKind::Sequential | PaletteKind::Qualitative => base[..n].to_vec(),
        },
    };

    Ok(direction.apply(colors))
}

/// Repeat the colors until there are `n`.
pub fn cycle(colors: &[String], n: usize) -> Vec<String> {
    colors.iter().cycle().take(n).cloned().collect()
}

/// Pick `n` colors around the center, alternating left and right.
/// The result keeps the original order.
pub fn center_out(colors: &[String], n: usize) -> Vec<String> {
    center_out_range(colors.len(), n)
        .map(|i| colors[i].clone())
        .collect()
}

/// Index range of the center-out selection.
///
/// Starts with the middle (lower middle for even lengths) and
/// adds left first, then right.
pub fn center_out_range(len: usize, n: usize) -> std::ops::Range<usize> {
    if n >= len {
        return 0..len;
    }
    if n == 0 {
        return 0..0;
    }

    let mid = (len - 1) / 2;
    let mut lo = mid;
    let mut hi = mid + 1;
    let mut left = true;
    while hi - lo < n {
        if left && lo > 0 {
            lo -= 1;
        } else if !left && hi < len {
            hi += 1;
        }
        left = !left;
    }
    lo..hi
}
