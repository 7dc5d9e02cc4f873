//! Module for loading the font faces used to draw text.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use rusttype::Font;
use thiserror::Error;

use crate::model::FontFace;


/// The three font faces used by the layout, loaded once at startup.
pub struct FontSet {
    bold_italic: Font<'static>,
    regular: Font<'static>,
    semi_bold: Font<'static>,
}

impl FontSet {
    /// Load all font faces from given file paths.
    pub fn load<P: AsRef<Path>>(
        bold_italic: P, regular: P, semi_bold: P,
    ) -> Result<FontSet, FontError> {
        Ok(FontSet{
            bold_italic: Self::load_face(bold_italic.as_ref())?,
            regular: Self::load_face(regular.as_ref())?,
            semi_bold: Self::load_face(semi_bold.as_ref())?,
        })
    }

    fn load_face(path: &Path) -> Result<Font<'static>, FontError> {
        let bytes = fs::read(path)
            .map_err(|e| FontError::Read{path: path.to_owned(), source: e})?;
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| FontError::Parse{path: path.to_owned()})?;
        debug!("Font face loaded from {}", path.display());
        Ok(font)
    }
}

impl FontSet {
    /// Get the loaded font for given face.
    #[inline]
    pub fn get(&self, face: FontFace) -> &Font<'static> {
        match face {
            FontFace::BoldItalic => &self.bold_italic,
            FontFace::Regular => &self.regular,
            FontFace::SemiBold => &self.semi_bold,
        }
    }
}

impl fmt::Debug for FontSet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "FontSet(bold_italic, regular, semi_bold)")
    }
}


/// Error while loading a font face.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file couldn't be read.
    #[error("cannot read font file {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    /// The font file doesn't contain a usable font.
    #[error("font file {path} does not contain a usable font")]
    Parse { path: PathBuf },
}
