//! Module implementing the actual composition task.
//! Most if not all composition logic lives here.

use std::ops::Deref;
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{imageops, ExtendedColorType, ImageEncoder, RgbaImage};
use log::{debug, trace, warn};

use crate::model::constants::{FIELD_SPECS, SKILLS_GAP, SKILLS_LABEL_TEXT};
use crate::model::{Field, JobPost};
use crate::resources::Assets;
use crate::util::text;
use super::error::{ComposeError, ComposeWarning, LogoError};
use super::logo;
use super::output::ComposeOutput;


/// Represents a single composition task and contains all the relevant logic.
///
/// This is a separate struct so that the shared assets can be easily
/// carried between its methods. The task assumes its `JobPost` input has
/// passed the gating validation of `JobPost::builder()`.
pub(super) struct ComposeTask {
    post: JobPost,
    assets: Arc<Assets>,
}

impl Deref for ComposeTask {
    type Target = JobPost;
    fn deref(&self) -> &Self::Target {
        &self.post  // makes the rendering code a little terser
    }
}

impl ComposeTask {
    #[inline]
    pub fn new(post: JobPost, assets: Arc<Assets>) -> Self {
        ComposeTask{post, assets}
    }
}

impl ComposeTask {
    /// Perform the composition task.
    pub fn perform(self) -> Result<ComposeOutput, ComposeError> {
        debug!("Composing {:?}", self.post);

        let mut canvas = self.assets.template.to_canvas();
        self.draw_fields(&mut canvas);

        // The logo sub-step is allowed to fail without aborting the result:
        // a failure degrades into a warning on a text-only image.
        let warning = match self.paste_logo(&mut canvas) {
            Ok(()) => None,
            Err(e) => {
                warn!("Couldn't place the uploaded logo: {}", e);
                Some(ComposeWarning::from(e))
            }
        };

        let bytes = self.encode(&canvas)?;
        debug!("Successfully composed job post, final image size: {} bytes",
            bytes.len());
        Ok(ComposeOutput::new(bytes, warning))
    }

    /// Draw all text fields at their static layout positions.
    ///
    /// Infallible for a validated `JobPost`: text may overrun the canvas
    /// bounds, which is allowed and silently clipped.
    fn draw_fields(&self, canvas: &mut RgbaImage) {
        self.draw_field(canvas, Field::Role, self.role());
        self.draw_skills_line(canvas);
        self.draw_field(canvas, Field::Contact, self.contact());
        self.draw_field(canvas, Field::Email, self.email());
        self.draw_field(canvas, Field::Location, self.location());
    }

    /// Draw a single text field at its spot from the layout table.
    fn draw_field(&self, canvas: &mut RgbaImage, field: Field, value: &str) {
        let spec = FIELD_SPECS[&field];
        trace!("Drawing {:?} at ({},{})", field, spec.x, spec.y);
        text::render_line(canvas, value, (spec.x, spec.y),
            self.assets.fonts.get(spec.face), spec.size, spec.color);
    }

    /// Draw the skills line: the literal label followed by the value.
    ///
    /// The value's X position is not a constant; it is measured from the
    /// rendered label with the same font and measurement routine used to
    /// draw it, so the offset reproduces exactly across runs.
    fn draw_skills_line(&self, canvas: &mut RgbaImage) {
        self.draw_field(canvas, Field::SkillsLabel, SKILLS_LABEL_TEXT);

        let label = FIELD_SPECS[&Field::SkillsLabel];
        let label_width = text::line_width(
            self.assets.fonts.get(label.face), label.size, SKILLS_LABEL_TEXT);

        let spec = FIELD_SPECS[&Field::SkillsValue];
        let x = spec.x + label_width as i32 + SKILLS_GAP as i32;
        trace!("Skills value offset measured as {}px", x - spec.x);
        text::render_line(canvas, self.skills(), (x, spec.y),
            self.assets.fonts.get(spec.face), spec.size, spec.color);
    }

    /// Decode, scale and paste the uploaded logo.
    ///
    /// This is the isolated fallible sub-step: any error here is reported
    /// to `perform()` which turns it into a non-fatal warning.
    fn paste_logo(&self, canvas: &mut RgbaImage) -> Result<(), LogoError> {
        trace!("Decoding {} byte(s) of logo image data", self.logo().len());
        let decoded = image::load_from_memory(self.logo())?.to_rgba8();

        let scaled = logo::fit(decoded, self.logo_max_dimension());

        // Per-pixel alpha compositing over whatever is already on the
        // canvas; pasting out of bounds clips silently.
        debug!("Pasting {}x{} logo at ({},{})",
            scaled.width(), scaled.height(), self.logo_x(), self.logo_y());
        imageops::overlay(canvas, &scaled, self.logo_x(), self.logo_y());
        Ok(())
    }

    /// Encode the final canvas as PNG bytes.
    fn encode(&self, canvas: &RgbaImage) -> Result<Vec<u8>, ComposeError> {
        debug!("Encoding final image as PNG...");
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(canvas.as_raw(), canvas.width(), canvas.height(),
                ExtendedColorType::Rgba8)
            .map_err(ComposeError::Encode)?;
        Ok(bytes)
    }
}
