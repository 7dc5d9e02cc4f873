//! Module defining the text fields of the job posting layout.

use super::color::Color;


/// A text field drawn onto the job posting.
///
/// `SkillsLabel` and `SkillsValue` together make up the skills line:
/// the literal label is drawn first, and the user-provided value follows it
/// at a horizontal offset measured from the rendered label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Role,
    SkillsLabel,
    SkillsValue,
    Contact,
    Email,
    Location,
}

/// Font face used to draw a field.
///
/// The faces correspond 1:1 to the font files loaded at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFace {
    BoldItalic,
    Regular,
    SemiBold,
}

/// Static layout description of a single text field:
/// where it is drawn, with what font, and in what color.
///
/// Positions are anchored at the top-left corner of the text line.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub x: i32,
    pub y: i32,
    pub face: FontFace,
    pub size: f32,
    pub color: Color,
}
