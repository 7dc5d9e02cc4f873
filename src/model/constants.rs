//! Module with constants of the job posting layout.

use std::collections::HashMap;

use lazy_static::lazy_static;
use maplit::hashmap;

use super::types::{Color, Field, FieldSpec, FontFace};


/// Literal text of the skills label.
pub const SKILLS_LABEL_TEXT: &str = "Skills:";

/// Horizontal gap (in pixels) between the rendered skills label
/// and the start of the skills value.
pub const SKILLS_GAP: u32 = 10;

/// Suggested file name for the composed image.
pub const OUTPUT_FILE_NAME: &str = "job_post.png";

/// Default color of drawn text.
pub const TEXT_COLOR: Color = Color(0x00, 0x00, 0x00);
/// Accent color, used for the skills label.
pub const ACCENT_COLOR: Color = Color(0x3c, 0x83, 0xbb);

lazy_static! {
    /// Static layout table: where every text field is drawn and how.
    ///
    /// Note that `Field::SkillsValue` holds the *base* position of the
    /// skills line; the actual X coordinate is offset at composition time
    /// by the measured width of the rendered label plus `SKILLS_GAP`.
    pub static ref FIELD_SPECS: HashMap<Field, FieldSpec> = hashmap!{
        Field::Role => FieldSpec{
            x: 210, y: 1050, face: FontFace::BoldItalic, size: 100.0, color: TEXT_COLOR},
        Field::SkillsLabel => FieldSpec{
            x: 210, y: 1200, face: FontFace::SemiBold, size: 70.0, color: ACCENT_COLOR},
        Field::SkillsValue => FieldSpec{
            x: 210, y: 1200, face: FontFace::Regular, size: 70.0, color: TEXT_COLOR},
        Field::Contact => FieldSpec{
            x: 200, y: 1680, face: FontFace::Regular, size: 36.0, color: TEXT_COLOR},
        Field::Email => FieldSpec{
            x: 200, y: 1730, face: FontFace::Regular, size: 36.0, color: TEXT_COLOR},
        Field::Location => FieldSpec{
            x: 200, y: 1780, face: FontFace::Regular, size: 36.0, color: TEXT_COLOR},
    };
}
