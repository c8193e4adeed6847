//!
//! Traditional chinese colors and color palettes.
//!
//! Provides
//! * a table of named colors, grouped by group and subgroup.
//! * built-in sequential, diverging and qualitative palettes that
//!   can be resampled to any number of colors.
//! * custom palettes picked from the color table.
//! * a parser for the usual textual color notations, see [to_hex].
//!
//! ## Usage
//!
//! ```rust no_run
//! use chinacolor::{get_palette, to_hex, PaletteIdent};
//!
//! let colors = get_palette(PaletteIdent::Index(1), Some(12), 1)?;
//! let red = to_hex("hsv(0, 100%, 100%)")?;
//! # Ok::<(), chinacolor::ColorError>(())
//! ```
//!
//! ## Data
//!
//! The color and palette tables are read once per process from the
//! directory given by [Config::load]. An application that brings
//! its own data can use [install_colors] and [install_palettes]
//! before the first access.
//!

mod config;
mod custom;
mod dataset;
mod error;
mod gradient;
pub mod named;
mod parse;
mod recommend;
mod resolve;
mod sample;
pub mod table_io;

pub use config::{COLORS_CSV, COLORS_JSON, Config, DATA_ENV, PALETTES_JSON};
pub use custom::{ColorPick, CustomPalette, OrderRule, SubgroupSel};
pub use dataset::{
    ColorRecord, ColorTable, PaletteInfo, PaletteKind, PaletteRecord, PaletteTable, colors,
    config, install_colors, install_palettes, load_colors, load_palettes, palettes, set_config,
};
pub use error::ColorError;
pub use gradient::{Colormap, Gradient};
pub use parse::{
    LchError, lch_approx_srgb, lchuv_to_srgb, parse_color, srgb_to_hex, to_hex, validate_colors,
};
pub use recommend::{Recommendation, themes};
pub use resolve::PaletteIdent;
pub use sample::{Direction, center_out, center_out_range, cycle, sample};

/// Metadata of all built-in palettes in declaration order.
pub fn list_palettes() -> Result<Vec<PaletteInfo>, ColorError> {
    Ok(palettes()?.info())
}

/// All colors with their metadata, sorted by `color_id`.
pub fn list_colors() -> Result<Vec<ColorRecord>, ColorError> {
    Ok(colors()?.as_slice().to_vec())
}

/// Find a built-in palette.
pub fn find_palette(ident: impl Into<PaletteIdent>) -> Result<&'static PaletteRecord, ColorError> {
    palettes()?.resolve(&ident.into())
}

/// Colors of a built-in palette.
///
/// * `n` resamples the palette to `n` colors. See [sample].
/// * `direction` `-1` reverses the colors, any other value is
///   taken as `1`.
pub fn get_palette(
    ident: impl Into<PaletteIdent>,
    n: Option<usize>,
    direction: i32,
) -> Result<Vec<String>, ColorError> {
    let p = find_palette(ident)?;
    sample(p, n, Direction::from(direction))
}

/// Title for a palette preview: `[NN key] name name_e`.
pub fn palette_title(ident: impl Into<PaletteIdent>) -> Result<String, ColorError> {
    Ok(palettes()?.title(&ident.into()))
}

/// Create a [ColorPick].
///
/// * `order_rule` is `1` to keep the order, `0` for ascending
///   and `-1` for descending `color_id`.
/// * `subgroups` are per group, or a single one for all groups.
pub fn create_color_pick(
    color_ids: Option<Vec<u32>>,
    groups: Option<Vec<u32>>,
    subgroups: Option<Vec<SubgroupSel>>,
    order_rule: i32,
) -> Result<ColorPick, ColorError> {
    let mut pick = ColorPick::new().order(OrderRule::from_code(order_rule)?);
    if let Some(color_ids) = color_ids {
        pick = pick.color_ids(color_ids);
    }
    if let Some(groups) = groups {
        pick = pick.groups(groups, subgroups)?;
    }
    Ok(pick)
}

/// Build a custom palette from the color table.
pub fn custom_palette(custom: &CustomPalette) -> Result<Vec<String>, ColorError> {
    custom.build(colors()?)
}

/// Build a custom palette from a [ColorPick].
pub fn custom_palette_pick(
    pick: &ColorPick,
    n: Option<usize>,
    direction: i32,
) -> Result<Vec<String>, ColorError> {
    CustomPalette::from(pick)
        .count(n)
        .direction(Direction::from(direction))
        .build(colors()?)
}

/// Either kind of palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteRequest {
    /// A built-in palette.
    BuiltIn {
        palette: PaletteIdent,
        n: Option<usize>,
        direction: i32,
    },
    /// A custom palette.
    Custom {
        pick: ColorPick,
        n: Option<usize>,
        direction: i32,
    },
}

/// Colors for a built-in or custom palette.
pub fn ctc_palette(request: &PaletteRequest) -> Result<Vec<String>, ColorError> {
    match request {
        PaletteRequest::BuiltIn {
            palette,
            n,
            direction,
        } => get_palette(palette, *n, *direction),
        PaletteRequest::Custom { pick, n, direction } => custom_palette_pick(pick, *n, *direction),
    }
}

/// Colormap for a built-in palette.
///
/// Sequential and diverging palettes give a continuous map,
/// qualitative ones a listed map with `n` colors if given.
pub fn get_cmap(
    ident: impl Into<PaletteIdent>,
    n: Option<usize>,
    direction: i32,
) -> Result<Colormap, ColorError> {
    let p = find_palette(ident)?;
    let direction = Direction::from(direction);
    if p.kind.is_continuous() {
        let colors = sample(p, None, direction)?;
        Ok(Colormap::Continuous(Gradient::new(colors)?))
    } else {
        Ok(Colormap::Listed(sample(p, n, direction)?))
    }
}

/// Recommended palettes for one of the [themes].
pub fn recommended_palettes_for_theme(theme: &str) -> Result<Recommendation, ColorError> {
    palettes()?.recommended(theme)
}

/// Colors of the first palette recommended for the theme.
pub fn pick_palette_for_theme(
    theme: &str,
    kind: PaletteKind,
    n: Option<usize>,
    direction: i32,
) -> Result<Vec<String>, ColorError> {
    let rec = recommended_palettes_for_theme(theme)?;
    let Some(key) = rec.get(kind).first() else {
        return Err(ColorError::InvalidArgument(format!(
            "no recommended palettes for theme={} kind={}",
            theme, kind
        )));
    };
    get_palette(PaletteIdent::Key(key.clone()), n, direction)
}

/// Colormap of the first palette recommended for the theme.
/// Only for sequential and diverging palettes.
pub fn pick_cmap_for_theme(
    theme: &str,
    kind: PaletteKind,
    direction: i32,
) -> Result<Colormap, ColorError> {
    if !kind.is_continuous() {
        return Err(ColorError::InvalidArgument(
            "kind must be sequential or diverging".into(),
        ));
    }
    let rec = recommended_palettes_for_theme(theme)?;
    let Some(key) = rec.get(kind).first() else {
        return Err(ColorError::InvalidArgument(format!(
            "no recommended {} palettes for theme={}",
            kind, theme
        )));
    };
    get_cmap(PaletteIdent::Key(key.clone()), None, direction)
}
