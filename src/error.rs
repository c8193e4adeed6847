use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Errors of the palette and color functions.
#[derive(Debug)]
#[non_exhaustive]
pub enum ColorError {
    /// Text doesn't match any of the known color notations.
    InvalidColorFormat(String),
    /// Neither of the data files could be found.
    DatasetNotFound(String),
    /// No palette matches the identifier.
    PaletteNotFound(String),
    /// Palette index is outside `1..=len`.
    IndexOutOfRange { index: usize, len: usize },
    /// A custom palette selection yields no colors.
    EmptySelection,
    /// Some argument is out of its valid range.
    InvalidArgument(String),
    /// Config file exists but can't be read.
    Config(String),
    /// Data file exists but has the wrong structure.
    Format(String),
    Io(io::Error),
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::InvalidColorFormat(s) => write!(f, "unrecognized color: {:?}", s),
            ColorError::DatasetNotFound(s) => write!(f, "could not find data file: {}", s),
            ColorError::PaletteNotFound(s) => write!(
                f,
                "palette {:?} not found. use list_palettes() to inspect available options",
                s
            ),
            ColorError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range (1..{})", index, len)
            }
            ColorError::EmptySelection => {
                write!(f, "no colors selected. provide color_ids, names or hexes")
            }
            ColorError::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            ColorError::Config(s) => write!(f, "config: {}", s),
            ColorError::Format(s) => write!(f, "invalid data file: {}", s),
            ColorError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ColorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ColorError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ColorError {
    fn from(value: io::Error) -> Self {
        ColorError::Io(value)
    }
}
