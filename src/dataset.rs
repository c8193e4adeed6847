//!
//! The color and palette data.
//!
//! Both tables are read once per process and then shared read-only.
//! Use [install_colors] and [install_palettes] to provide the data
//! directly, otherwise the files are found via [Config::load].
//!

use crate::config::Config;
use crate::error::ColorError;
use crate::parse::to_hex;
use crate::table_io::read_table;
use indexmap::IndexMap;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Kind of palette.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Ordered values, one gradient.
    Sequential,
    /// Two ends meeting at a neutral center.
    Diverging,
    /// Unordered categories.
    #[default]
    Qualitative,
}

impl PaletteKind {
    pub const fn name(self) -> &'static str {
        match self {
            PaletteKind::Sequential => "sequential",
            PaletteKind::Diverging => "diverging",
            PaletteKind::Qualitative => "qualitative",
        }
    }

    /// Palettes of this kind can be interpolated.
    pub const fn is_continuous(self) -> bool {
        matches!(self, PaletteKind::Sequential | PaletteKind::Diverging)
    }
}

impl Display for PaletteKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = ColorError;

    /// Accepts `categorical` as alias for `qualitative`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(PaletteKind::Sequential),
            "diverging" => Ok(PaletteKind::Diverging),
            "qualitative" | "categorical" => Ok(PaletteKind::Qualitative),
            _ => Err(ColorError::InvalidArgument(format!(
                "unknown palette kind {:?}",
                s
            ))),
        }
    }
}

/// One of the named colors.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ColorRecord {
    pub color_id: Option<u32>,
    pub name: String,
    /// Canonical `#RRGGBB`.
    pub hex: String,
    pub group_id: Option<u32>,
    /// `1..=4`
    pub subgroup_id: Option<u32>,
    /// Numeric channel columns like `RGB_R` or `LAB_L`.
    pub channels: IndexMap<String, Option<f64>>,
    /// Any other columns.
    pub extra: IndexMap<String, String>,
}

/// A built-in palette.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteRecord {
    pub key: String,
    /// Primary (chinese) name.
    pub name: String,
    /// Secondary (english) name.
    pub name_e: String,
    pub kind: PaletteKind,
    /// Canonical `#RRGGBB` colors.
    pub colors: Vec<String>,
    /// Declared number of colors.
    pub color_count: usize,
}

/// Palette metadata as returned by [list_palettes](crate::list_palettes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteInfo {
    /// 1-based
    pub index: usize,
    pub key: String,
    pub name: String,
    pub name_e: String,
    pub kind: PaletteKind,
    pub color_count: usize,
}

const CORE_COLUMNS: &[&str] = &["color_id", "name", "hex", "group_id", "subgroup_id"];

const CHANNEL_PREFIXES: &[&str] = &["RGB_", "HSV_", "HSL_", "LAB_", "LUV_", "CMYK_"];

/// All named colors, sorted by `color_id`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ColorTable {
    colors: Vec<ColorRecord>,
}

impl ColorTable {
    /// Read the colors from the data directory.
    ///
    /// Prefers the csv table, uses the json list if that's missing.
    pub fn load(cfg: &Config) -> Result<ColorTable, ColorError> {
        if let Some(text) = read_optional(&cfg.colors_csv())? {
            debug!("load colors from {:?}", cfg.colors_csv());
            return Ok(Self::from_csv(&text));
        }
        if let Some(text) = read_optional(&cfg.colors_json())? {
            debug!("load colors from {:?}", cfg.colors_json());
            return Self::from_json(&text);
        }
        Err(ColorError::DatasetNotFound(format!(
            "{} or {} in {:?}",
            crate::config::COLORS_CSV,
            crate::config::COLORS_JSON,
            cfg.data_dir
        )))
    }

    /// Read from a csv table.
    ///
    /// Missing or invalid numbers become `None`. Rows without
    /// a valid hex color are skipped.
    pub fn from_csv(text: &str) -> ColorTable {
        let table = read_table(text);

        let c_id = table.column("color_id");
        let c_name = table.column("name");
        let c_hex = table.column("hex");
        let c_group = table.column("group_id");
        let c_subgroup = table.column("subgroup_id");

        let mut colors = Vec::new();
        for (n, row) in table.rows.iter().enumerate() {
            let hex = table.field(row, c_hex);
            let hex = match to_hex(&prefix_hash(hex)) {
                Ok(v) => v,
                Err(e) => {
                    warn!("skip color row {}: {}", n + 1, e);
                    continue;
                }
            };

            let mut color = ColorRecord {
                color_id: parse_id(table.field(row, c_id)),
                name: table.field(row, c_name).to_string(),
                hex,
                group_id: parse_id(table.field(row, c_group)),
                subgroup_id: parse_id(table.field(row, c_subgroup)),
                ..Default::default()
            };

            for (col, head) in table.header.iter().enumerate() {
                if CORE_COLUMNS.contains(&head.as_str()) {
                    continue;
                }
                let value = table.field(row, Some(col));
                if CHANNEL_PREFIXES.iter().any(|v| head.starts_with(v)) {
                    color.channels.insert(head.clone(), parse_float(value));
                } else {
                    color.extra.insert(head.clone(), value.to_string());
                }
            }

            colors.push(color);
        }

        Self::sorted(colors)
    }

    /// Read from a json list of colors.
    ///
    /// Missing `color_id` values are numbered by position, starting at 1.
    pub fn from_json(text: &str) -> Result<ColorTable, ColorError> {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct RawColor {
            color_id: Option<u32>,
            name: String,
            hex: Option<String>,
            #[serde(alias = "group")]
            group_id: Option<u32>,
            #[serde(alias = "subgroup")]
            subgroup_id: Option<u32>,
        }

        let items: Vec<serde_json::Value> =
            serde_json::from_str(text).map_err(|e| ColorError::Format(e.to_string()))?;

        let mut colors = Vec::new();
        for (n, item) in items.into_iter().enumerate() {
            let raw = match serde_json::from_value::<RawColor>(item) {
                Ok(v) => v,
                Err(e) => {
                    warn!("skip color {}: {}", n + 1, e);
                    continue;
                }
            };
            let hex = match to_hex(&prefix_hash(raw.hex.as_deref().unwrap_or_default())) {
                Ok(v) => v,
                Err(e) => {
                    warn!("skip color {}: {}", n + 1, e);
                    continue;
                }
            };
            colors.push(ColorRecord {
                color_id: Some(raw.color_id.unwrap_or(n as u32 + 1)),
                name: raw.name,
                hex,
                group_id: raw.group_id,
                subgroup_id: raw.subgroup_id,
                ..Default::default()
            });
        }

        Ok(Self::sorted(colors))
    }

    /// Create from records. Sorts by `color_id`, missing ids last.
    pub fn new(colors: Vec<ColorRecord>) -> ColorTable {
        Self::sorted(colors)
    }

    fn sorted(mut colors: Vec<ColorRecord>) -> ColorTable {
        colors.sort_by_key(|v| (v.color_id.is_none(), v.color_id));
        ColorTable { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[ColorRecord] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorRecord> {
        self.colors.iter()
    }

    /// First color with this id.
    pub fn by_id(&self, color_id: u32) -> Option<&ColorRecord> {
        self.colors.iter().find(|v| v.color_id == Some(color_id))
    }

    /// First color with exactly this name.
    pub fn by_name(&self, name: &str) -> Option<&ColorRecord> {
        self.colors.iter().find(|v| v.name == name)
    }
}

/// The built-in palettes in declaration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    palettes: IndexMap<String, PaletteRecord>,
}

impl PaletteTable {
    /// Read the palettes from the data directory.
    pub fn load(cfg: &Config) -> Result<PaletteTable, ColorError> {
        let path = cfg.palettes_json();
        match read_optional(&path)? {
            Some(text) => {
                debug!("load palettes from {:?}", path);
                Self::from_json(&text)
            }
            None => Err(ColorError::DatasetNotFound(format!("{:?}", path))),
        }
    }

    /// Read from a json object keyed by the palette key.
    ///
    /// Invalid colors are dropped. Entries that are not
    /// palette objects are skipped.
    pub fn from_json(text: &str) -> Result<PaletteTable, ColorError> {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct RawPalette {
            palette_name: Option<String>,
            palette_name_e: Option<String>,
            #[serde(rename = "type")]
            kind: Option<String>,
            color_count: Option<usize>,
            hex: Vec<String>,
        }

        let items: IndexMap<String, serde_json::Value> =
            serde_json::from_str(text).map_err(|e| ColorError::Format(e.to_string()))?;

        let mut palettes = IndexMap::new();
        for (key, item) in items {
            let raw = match serde_json::from_value::<RawPalette>(item) {
                Ok(v) => v,
                Err(e) => {
                    warn!("skip palette {:?}: {}", key, e);
                    continue;
                }
            };

            let kind = match raw.kind.as_deref().map(PaletteKind::from_str) {
                Some(Ok(v)) => v,
                Some(Err(e)) => {
                    warn!("palette {:?}: {}", key, e);
                    PaletteKind::default()
                }
                None => PaletteKind::default(),
            };

            let mut colors = Vec::with_capacity(raw.hex.len());
            for c in &raw.hex {
                match to_hex(c) {
                    Ok(v) => colors.push(v),
                    Err(e) => warn!("palette {:?}: {}", key, e),
                }
            }

            let record = PaletteRecord {
                key: key.clone(),
                name: raw.palette_name.unwrap_or_default(),
                name_e: raw.palette_name_e.unwrap_or_default(),
                kind,
                color_count: raw.color_count.unwrap_or(colors.len()),
                colors,
            };
            palettes.insert(key, record);
        }

        Ok(PaletteTable { palettes })
    }

    /// Create from records. Keeps the given order.
    pub fn new(palettes: impl IntoIterator<Item = PaletteRecord>) -> PaletteTable {
        PaletteTable {
            palettes: palettes.into_iter().map(|v| (v.key.clone(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, PaletteRecord> {
        &self.palettes
    }

    /// Palette keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(|v| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteRecord> {
        self.palettes.values()
    }

    /// Palette by exact key.
    pub fn get(&self, key: &str) -> Option<&PaletteRecord> {
        self.palettes.get(key)
    }

    /// Palette by 0-based position.
    pub fn get_index(&self, idx: usize) -> Option<&PaletteRecord> {
        self.palettes.get_index(idx).map(|(_, v)| v)
    }

    /// 1-based position of a palette.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.palettes.get_index_of(key).map(|v| v + 1)
    }

    /// Metadata of all palettes.
    pub fn info(&self) -> Vec<PaletteInfo> {
        self.palettes
            .values()
            .enumerate()
            .map(|(n, p)| PaletteInfo {
                index: n + 1,
                key: p.key.clone(),
                name: p.name.clone(),
                name_e: p.name_e.clone(),
                kind: p.kind,
                color_count: p.color_count,
            })
            .collect()
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, ColorError> {
    match fs::read_to_string(path) {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn prefix_hash(hex: &str) -> String {
    let hex = hex.trim();
    if hex.is_empty() || hex.starts_with('#') {
        hex.to_string()
    } else {
        format!("#{}", hex)
    }
}

/// Integer field, accepts `3.0` too.
fn parse_id(v: &str) -> Option<u32> {
    let v = parse_float(v)?;
    if v >= 0.0 && v <= u32::MAX as f64 {
        Some(v as u32)
    } else {
        None
    }
}

fn parse_float(v: &str) -> Option<f64> {
    v.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

static CONFIG: OnceCell<Config> = OnceCell::new();
static COLORS: OnceCell<ColorTable> = OnceCell::new();
static PALETTES: OnceCell<PaletteTable> = OnceCell::new();

/// Set the config before the first data access.
pub fn set_config(cfg: Config) -> Result<(), ColorError> {
    CONFIG
        .set(cfg)
        .map_err(|_| ColorError::InvalidArgument("config is already set".into()))
}

/// The process wide config. Loaded on first use.
pub fn config() -> Result<&'static Config, ColorError> {
    CONFIG.get_or_try_init(Config::load)
}

/// Use this color table instead of reading the data files.
/// Must be called before the first access.
pub fn install_colors(colors: ColorTable) -> Result<(), ColorError> {
    COLORS
        .set(colors)
        .map_err(|_| ColorError::InvalidArgument("colors are already loaded".into()))
}

/// Use this palette table instead of reading the data files.
/// Must be called before the first access.
pub fn install_palettes(palettes: PaletteTable) -> Result<(), ColorError> {
    PALETTES
        .set(palettes)
        .map_err(|_| ColorError::InvalidArgument("palettes are already loaded".into()))
}

/// The process wide color table. Loaded on first use.
pub fn colors() -> Result<&'static ColorTable, ColorError> {
    COLORS.get_or_try_init(|| ColorTable::load(config()?))
}

/// The process wide palette table. Loaded on first use.
pub fn palettes() -> Result<&'static PaletteTable, ColorError> {
    PALETTES.get_or_try_init(|| PaletteTable::load(config()?))
}

/// All colors sorted by `color_id`.
pub fn load_colors() -> Result<&'static [ColorRecord], ColorError> {
    Ok(colors()?.as_slice())
}

/// All palettes by key, and the keys in declaration order.
pub fn load_palettes()
-> Result<(&'static IndexMap<String, PaletteRecord>, Vec<&'static str>), ColorError> {
    let p = palettes()?;
    Ok((p.as_map(), p.keys().collect()))
}
