//!
//! Palettes that go well with the plot themes.
//!

use crate::dataset::{PaletteKind, PaletteTable};
use crate::error::ColorError;

/// Recommended palettes of one theme.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub categorical: Vec<String>,
    pub sequential: Vec<String>,
    pub diverging: Vec<String>,
}

impl Recommendation {
    pub fn get(&self, kind: PaletteKind) -> &[String] {
        match kind {
            PaletteKind::Qualitative => &self.categorical,
            PaletteKind::Sequential => &self.sequential,
            PaletteKind::Diverging => &self.diverging,
        }
    }
}

struct Entry {
    theme: &'static str,
    categorical: &'static [&'static str],
    sequential: &'static [&'static str],
    diverging: &'static [&'static str],
}

const RECOMMENDED: &[Entry] = &[
    Entry {
        theme: "paper",
        categorical: &["qual15", "qual18", "qual10"],
        sequential: &["seq12", "seq11"],
        diverging: &["div10", "div13"],
    },
    Entry {
        theme: "mineral",
        categorical: &["qual14", "qual18"],
        sequential: &["seq09", "seq05"],
        diverging: &["div10", "div14"],
    },
    Entry {
        theme: "ink",
        categorical: &["qual11", "qual17"],
        sequential: &["seq05", "seq03"],
        diverging: &["div12", "div15"],
    },
    Entry {
        theme: "bronze",
        categorical: &["qual12", "qual16"],
        sequential: &["seq10", "seq07"],
        diverging: &["div03", "div08"],
    },
    Entry {
        theme: "dunhuang",
        categorical: &["qual13", "qual19"],
        sequential: &["seq08", "seq06"],
        diverging: &["div13", "div18"],
    },
];

/// Names of the themes with recommendations.
pub fn themes() -> Vec<&'static str> {
    RECOMMENDED.iter().map(|v| v.theme).collect()
}

impl PaletteTable {
    /// Recommended palette keys for a theme.
    /// Keys missing in this table are left out.
    pub fn recommended(&self, theme: &str) -> Result<Recommendation, ColorError> {
        let theme = theme.trim().to_lowercase();
        let Some(entry) = RECOMMENDED.iter().find(|v| v.theme == theme) else {
            return Err(ColorError::InvalidArgument(format!(
                "unknown theme: {}",
                theme
            )));
        };

        let existing = |keys: &[&str]| -> Vec<String> {
            keys.iter()
                .filter(|v| self.get(v).is_some())
                .map(|v| v.to_string())
                .collect()
        };

        Ok(Recommendation {
            categorical: existing(entry.categorical),
            sequential: existing(entry.sequential),
            diverging: existing(entry.diverging),
        })
    }
}
