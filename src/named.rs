//!
//! Lookup of color names.
//!
//! With the `css-names` feature the full CSS/SVG table from
//! [palette](https://docs.rs/palette) is used. The matplotlib
//! style `tab:` names and single letter base colors are always
//! available, and a short table of common names backs everything.
//!

use palette::Srgb;

/// Common color names. Used when nothing else matches.
const COMMON: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("blue", 0x0000FF),
    ("brown", 0xA52A2A),
    ("cyan", 0x00FFFF),
    ("gold", 0xFFD700),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("grey", 0x808080),
    ("lime", 0x00FF00),
    ("magenta", 0xFF00FF),
    ("maroon", 0x800000),
    ("navy", 0x000080),
    ("olive", 0x808000),
    ("orange", 0xFFA500),
    ("pink", 0xFFC0CB),
    ("purple", 0x800080),
    ("red", 0xFF0000),
    ("silver", 0xC0C0C0),
    ("teal", 0x008080),
    ("white", 0xFFFFFF),
    ("yellow", 0xFFFF00),
];

/// Tableau colors as used by matplotlib.
const TABLEAU: &[(&str, u32)] = &[
    ("tab:blue", 0x1F77B4),
    ("tab:brown", 0x8C564B),
    ("tab:cyan", 0x17BECF),
    ("tab:gray", 0x7F7F7F),
    ("tab:green", 0x2CA02C),
    ("tab:grey", 0x7F7F7F),
    ("tab:olive", 0xBCBD22),
    ("tab:orange", 0xFF7F0E),
    ("tab:pink", 0xE377C2),
    ("tab:purple", 0x9467BD),
    ("tab:red", 0xD62728),
];

/// Single letter base colors.
const BASE: &[(&str, u32)] = &[
    ("b", 0x0000FF),
    ("c", 0x00BFBF),
    ("g", 0x008000),
    ("k", 0x000000),
    ("m", 0xBF00BF),
    ("r", 0xFF0000),
    ("w", 0xFFFFFF),
    ("y", 0xBFBF00),
];

/// Find a named color. Matches case-insensitive.
pub fn lookup(name: &str) -> Option<Srgb<u8>> {
    let name = name.trim().to_lowercase();

    css(&name)
        .or_else(|| find(TABLEAU, &name))
        .or_else(|| find(BASE, &name))
        .or_else(|| find(COMMON, &name))
}

#[cfg(feature = "css-names")]
fn css(name: &str) -> Option<Srgb<u8>> {
    palette::named::from_str(name)
}

#[cfg(not(feature = "css-names"))]
fn css(_name: &str) -> Option<Srgb<u8>> {
    None
}

/// Only the built-in table of common names.
pub fn lookup_common(name: &str) -> Option<Srgb<u8>> {
    find(COMMON, &name.trim().to_lowercase())
}

fn find(table: &[(&str, u32)], name: &str) -> Option<Srgb<u8>> {
    match table.binary_search_by_key(&name, |v| v.0) {
        Ok(n) => Some(color_from_u32(table[n].1)),
        Err(_) => None,
    }
}

const fn color_from_u32(c: u32) -> Srgb<u8> {
    Srgb::new((c >> 16) as u8, (c >> 8) as u8, c as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        for table in [COMMON, TABLEAU, BASE] {
            assert!(table.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }

    #[test]
    fn common_names() {
        assert_eq!(lookup_common("Gold"), Some(Srgb::new(0xff, 0xd7, 0x00)));
        assert_eq!(lookup_common("chartreuse"), None);
        assert_eq!(lookup("tab:blue"), Some(Srgb::new(0x1f, 0x77, 0xb4)));
    }
}
