//! Module handling the static assets used for composition.
//!
//! All assets (the background template and the three font faces) are loaded
//! exactly once, at process start, and are shared read-only afterwards.
//! A missing or undecodable asset is a fatal setup error, never a
//! per-request one.

mod fonts;
mod templates;

pub use self::fonts::{FontError, FontSet};
pub use self::templates::{Template, TemplateError};


use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;


/// Paths of the asset files loaded at startup.
#[derive(Clone, Debug)]
pub struct AssetPaths {
    /// The background template raster.
    pub template: PathBuf,
    /// Font face used for the role line.
    pub font_bold_italic: PathBuf,
    /// Font face used for most of the text.
    pub font_regular: PathBuf,
    /// Font face used for the skills label.
    pub font_semi_bold: PathBuf,
}

impl AssetPaths {
    /// Asset paths with the standard file names under given directory.
    pub fn under<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        AssetPaths{
            template: root.join("template").join("job_post.png"),
            font_bold_italic: root.join("fonts").join("DejaVuSans-BoldOblique.ttf"),
            font_regular: root.join("fonts").join("DejaVuSans.ttf"),
            font_semi_bold: root.join("fonts").join("DejaVuSans-Bold.ttf"),
        }
    }
}

impl Default for AssetPaths {
    /// The standard asset layout, relative to the working directory.
    fn default() -> Self {
        Self::under("assets")
    }
}


/// The static assets shared by all compositions.
#[derive(Debug)]
pub struct Assets {
    pub(crate) template: Template,
    pub(crate) fonts: FontSet,
}

impl Assets {
    /// Create assets directly from already loaded resources.
    ///
    /// Useful when the template or fonts come from somewhere other than
    /// the filesystem (e.g. embedded in the binary).
    #[inline]
    pub fn new(template: Template, fonts: FontSet) -> Assets {
        Assets{template, fonts}
    }

    /// Load all assets from given paths.
    pub fn load(paths: &AssetPaths) -> Result<Assets, SetupError> {
        let template = Template::load(&paths.template)?;
        let fonts = FontSet::load(
            &paths.font_bold_italic, &paths.font_regular, &paths.font_semi_bold)?;
        let (width, height) = template.dimensions();
        debug!("All assets loaded (template {}x{} + 3 font faces)", width, height);
        Ok(Assets{template, fonts})
    }
}


/// Fatal error during asset loading at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The background template couldn't be loaded.
    #[error("failed to load the background template: {0}")]
    Template(#[from] TemplateError),
    /// One of the font faces couldn't be loaded.
    #[error("failed to load a font face: {0}")]
    Font(#[from] FontError),
}
