//! Types of the data model.

mod color;
mod field;
mod job_post;

pub use self::color::Color;
pub use self::field::{Field, FieldSpec, FontFace};
pub use self::job_post::{BuildError, Builder, JobPost, JobPostRequest};
