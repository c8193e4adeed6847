use crate::dataset::{PaletteRecord, PaletteTable};
use crate::error::ColorError;
use log::trace;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifies a built-in palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaletteIdent {
    /// 1-based position in declaration order.
    Index(usize),
    /// Palette key. If no key matches, this falls back
    /// to matching the display names.
    Key(String),
    /// Display name, either the primary or the secondary one.
    /// Matches case-insensitive, the first palette in declaration
    /// order wins.
    Name(String),
}

impl Display for PaletteIdent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteIdent::Index(v) => write!(f, "{}", v),
            PaletteIdent::Key(v) => write!(f, "{}", v),
            PaletteIdent::Name(v) => write!(f, "{}", v),
        }
    }
}

impl From<usize> for PaletteIdent {
    fn from(value: usize) -> Self {
        PaletteIdent::Index(value)
    }
}

impl From<&str> for PaletteIdent {
    fn from(value: &str) -> Self {
        PaletteIdent::Key(value.to_string())
    }
}

impl From<String> for PaletteIdent {
    fn from(value: String) -> Self {
        PaletteIdent::Key(value)
    }
}

impl From<&PaletteIdent> for PaletteIdent {
    fn from(value: &PaletteIdent) -> Self {
        value.clone()
    }
}

impl FromStr for PaletteIdent {
    type Err = ColorError;

    /// Digits give an index, anything else a key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(ColorError::InvalidArgument("empty palette name".into()))
        } else if s.chars().all(|v| v.is_ascii_digit()) {
            match s.parse::<usize>() {
                Ok(v) => Ok(PaletteIdent::Index(v)),
                Err(e) => Err(ColorError::InvalidArgument(format!("{:?}: {}", s, e))),
            }
        } else {
            Ok(PaletteIdent::Key(s.to_string()))
        }
    }
}

impl PaletteTable {
    /// Find the palette for an identifier.
    pub fn resolve(&self, ident: &PaletteIdent) -> Result<&PaletteRecord, ColorError> {
        self.resolve_position(ident).map(|(_, p)| p)
    }

    /// Find the palette and its 1-based position.
    pub fn resolve_position(
        &self,
        ident: &PaletteIdent,
    ) -> Result<(usize, &PaletteRecord), ColorError> {
        trace!("resolve palette {:?}", ident);
        match ident {
            PaletteIdent::Index(idx) => {
                if *idx < 1 || *idx > self.len() {
                    return Err(ColorError::IndexOutOfRange {
                        index: *idx,
                        len: self.len(),
                    });
                }
                match self.get_index(idx - 1) {
                    Some(p) => Ok((*idx, p)),
                    None => Err(ColorError::PaletteNotFound(ident.to_string())),
                }
            }
            PaletteIdent::Key(key) => {
                if let (Some(idx), Some(p)) = (self.index_of(key), self.get(key)) {
                    Ok((idx, p))
                } else {
                    self.by_name(key)
                }
            }
            PaletteIdent::Name(name) => self.by_name(name),
        }
    }

    /// First palette in declaration order where either name matches.
    fn by_name(&self, name: &str) -> Result<(usize, &PaletteRecord), ColorError> {
        let low = name.to_lowercase();
        self.iter()
            .enumerate()
            .find(|(_, p)| p.name.to_lowercase() == low || p.name_e.to_lowercase() == low)
            .map(|(n, p)| (n + 1, p))
            .ok_or_else(|| ColorError::PaletteNotFound(name.to_string()))
    }

    /// Title for previews: `[NN key] name name_e`.
    pub fn title(&self, ident: &PaletteIdent) -> String {
        match self.resolve_position(ident) {
            Ok((idx, p)) => format!("[{:02} {}] {} {}", idx, p.key, p.name, p.name_e)
                .trim()
                .to_string(),
            Err(_) => ident.to_string(),
        }
    }
}
