//! Module handling the background template image.

use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, trace};
use thiserror::Error;


/// The immutable background template.
///
/// Loaded once at startup and never mutated; every composition works on its
/// own deep copy obtained from `to_canvas()`.
#[derive(Clone)]
pub struct Template {
    image: RgbaImage,
}

impl Template {
    /// Load the template raster from given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Template, TemplateError> {
        let path = path.as_ref();
        trace!("Opening template image {}", path.display());
        let image = image::open(path)
            .map_err(|e| TemplateError::Open{path: path.to_owned(), source: e})?
            .to_rgba8();
        debug!("Template image {} loaded: {}x{}",
            path.display(), image.width(), image.height());
        Ok(Template{image})
    }

    /// Create a template directly from an in-memory image.
    #[inline]
    pub fn from_image(image: RgbaImage) -> Template {
        Template{image}
    }
}

impl Template {
    /// Pixel dimensions of the template.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Clone the template into a fresh working canvas.
    ///
    /// The copy is deep: drawing on it never affects the template
    /// or any other in-flight canvas.
    #[inline]
    pub(crate) fn to_canvas(&self) -> RgbaImage {
        self.image.clone()
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(fmt, "Template({}x{})", width, height)
    }
}


/// Error while loading the template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Opening or decoding the template image didn't succeed.
    #[error("cannot open template image {path}: {source}")]
    Open {
        path: PathBuf,
        source: image::ImageError,
    },
}
