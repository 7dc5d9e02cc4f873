//! Module implementing the `JobPost` input record and its builder.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default logo placement, matching the initial positions of the
/// adjustment sliders in the form shell.
const DEFAULT_LOGO_X: i64 = 200;
const DEFAULT_LOGO_Y: i64 = 100;
const DEFAULT_LOGO_MAX_DIMENSION: f32 = 300.0;


/// A validated job posting. Used as the input to composition.
///
/// Values can only be obtained through `JobPost::builder()`, which performs
/// the gating validation: all five text fields are non-empty after trimming
/// and logo image data has been supplied. The compositor relies on this.
#[derive(Clone)]
pub struct JobPost {
    role: String,
    skills: String,
    contact: String,
    email: String,
    location: String,
    logo: Vec<u8>,
    logo_x: i64,
    logo_y: i64,
    logo_max_dimension: f32,
}

impl JobPost {
    /// Create a `Builder` for a `JobPost`.
    #[inline]
    pub fn builder() -> Builder {
        Builder::new()
    }
}

// Accessors. All strings are trimmed.
impl JobPost {
    #[inline]
    pub fn role(&self) -> &str { &self.role }
    #[inline]
    pub fn skills(&self) -> &str { &self.skills }
    #[inline]
    pub fn contact(&self) -> &str { &self.contact }
    #[inline]
    pub fn email(&self) -> &str { &self.email }
    #[inline]
    pub fn location(&self) -> &str { &self.location }

    /// Raw (encoded) bytes of the uploaded logo image.
    #[inline]
    pub fn logo(&self) -> &[u8] { &self.logo }

    /// X coordinate of the top-left corner of the pasted logo.
    #[inline]
    pub fn logo_x(&self) -> i64 { self.logo_x }
    /// Y coordinate of the top-left corner of the pasted logo.
    #[inline]
    pub fn logo_y(&self) -> i64 { self.logo_y }
    /// Side of the square bounding box the logo is scaled to fit into.
    #[inline]
    pub fn logo_max_dimension(&self) -> f32 { self.logo_max_dimension }
}

impl fmt::Debug for JobPost {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("JobPost")
            .field("role", &self.role)
            .field("skills", &self.skills)
            .field("contact", &self.contact)
            .field("email", &self.email)
            .field("location", &self.location)
            .field("logo", &format_args!("<{} byte(s)>", self.logo.len()))
            .field("logo_x", &self.logo_x)
            .field("logo_y", &self.logo_y)
            .field("logo_max_dimension", &self.logo_max_dimension)
            .finish()
    }
}


/// The raw input record, as received from the form shell.
///
/// Strings come un-trimmed and possibly empty; converting into a `Builder`
/// and calling `build()` applies the gating validation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct JobPostRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub logo_bytes: Option<Vec<u8>>,
    #[serde(default = "default_logo_x")]
    pub logo_x: i64,
    #[serde(default = "default_logo_y")]
    pub logo_y: i64,
    #[serde(default = "default_logo_max_dimension")]
    pub logo_max_dimension: f32,
}

fn default_logo_x() -> i64 { DEFAULT_LOGO_X }
fn default_logo_y() -> i64 { DEFAULT_LOGO_Y }
fn default_logo_max_dimension() -> f32 { DEFAULT_LOGO_MAX_DIMENSION }

impl From<JobPostRequest> for Builder {
    fn from(request: JobPostRequest) -> Builder {
        let mut builder = Builder::new()
            .role(request.role)
            .skills(request.skills)
            .contact(request.contact)
            .email(request.email)
            .location(request.location)
            .logo_position(request.logo_x, request.logo_y)
            .logo_max_dimension(request.logo_max_dimension);
        if let Some(bytes) = request.logo_bytes {
            builder = builder.logo(bytes);
        }
        builder
    }
}


/// Builder for `JobPost`.
#[derive(Clone, Debug, Default)]
#[must_use = "unused builder which must be used"]
pub struct Builder {
    role: Option<String>,
    skills: Option<String>,
    contact: Option<String>,
    email: Option<String>,
    location: Option<String>,
    logo: Option<Vec<u8>>,
    logo_x: Option<i64>,
    logo_y: Option<i64>,
    logo_max_dimension: Option<f32>,
}

impl Builder {
    /// Create a new `Builder` for a `JobPost`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder {
    /// Set the job role (e.g. "Python Developer").
    #[inline]
    pub fn role<S: Into<String>>(mut self, role: S) -> Self {
        self.role = Some(role.into()); self
    }

    /// Set the required skills, as free text.
    #[inline]
    pub fn skills<S: Into<String>>(mut self, skills: S) -> Self {
        self.skills = Some(skills.into()); self
    }

    /// Set the contact number.
    #[inline]
    pub fn contact<S: Into<String>>(mut self, contact: S) -> Self {
        self.contact = Some(contact.into()); self
    }

    /// Set the contact email address.
    #[inline]
    pub fn email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into()); self
    }

    /// Set the job location.
    #[inline]
    pub fn location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into()); self
    }

    /// Supply the uploaded logo image as its raw (encoded) bytes.
    ///
    /// The bytes are decoded during composition; an undecodable payload is
    /// not a validation error but a composition warning.
    #[inline]
    pub fn logo<B: Into<Vec<u8>>>(mut self, bytes: B) -> Self {
        self.logo = Some(bytes.into()); self
    }

    /// Set the position of the top-left corner of the pasted logo.
    ///
    /// Coordinates outside the template are allowed; the pasted logo is
    /// silently clipped to the canvas.
    #[inline]
    pub fn logo_position(mut self, x: i64, y: i64) -> Self {
        self.logo_x = Some(x);
        self.logo_y = Some(y);
        self
    }

    /// Set the side of the square bounding box the logo must fit into.
    ///
    /// The logo is never upscaled, only shrunk.
    #[inline]
    pub fn logo_max_dimension(mut self, max_dimension: f32) -> Self {
        self.logo_max_dimension = Some(max_dimension); self
    }
}

impl Builder {
    /// Build the resulting `JobPost`.
    ///
    /// This is the gating check: every text field is trimmed and must be
    /// non-empty afterwards, and logo data must have been supplied.
    /// All violations are reported at once.
    pub fn build(self) -> Result<JobPost, BuildError> {
        let mut missing = Vec::new();

        let mut field = |name, value: Option<String>| -> String {
            let trimmed = value.as_deref().unwrap_or("").trim().to_owned();
            if trimmed.is_empty() {
                missing.push(name);
            }
            trimmed
        };
        let role = field("role", self.role);
        let skills = field("skills", self.skills);
        let contact = field("contact", self.contact);
        let email = field("email", self.email);
        let location = field("location", self.location);

        let logo = match self.logo {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                missing.push("logo");
                Vec::new()
            }
        };

        if !missing.is_empty() {
            return Err(BuildError::MissingFields(missing));
        }

        Ok(JobPost{
            role, skills, contact, email, location, logo,
            logo_x: self.logo_x.unwrap_or(DEFAULT_LOGO_X),
            logo_y: self.logo_y.unwrap_or(DEFAULT_LOGO_Y),
            logo_max_dimension: self.logo_max_dimension
                .unwrap_or(DEFAULT_LOGO_MAX_DIMENSION),
        })
    }
}


/// Error while building a `JobPost`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// One or more required inputs are missing or blank.
    /// All of them are reported together, as a single aggregate error.
    #[error("please fill in all fields and upload the logo (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}


#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> Builder {
        JobPost::builder()
            .role("Python Developer")
            .skills("Python, Django, APIs")
            .contact("+91 9016768065")
            .email("jobs@example.com")
            .location("Surat")
            .logo(vec![0xffu8; 16])
    }

    #[test]
    fn builder_trims_fields() {
        let post = complete_builder()
            .role("  Python Developer \n")
            .location("\tSurat ")
            .build().unwrap();
        assert_eq!("Python Developer", post.role());
        assert_eq!("Surat", post.location());
    }

    #[test]
    fn blank_field_gates_composition() {
        let err = complete_builder().location("   ").build().unwrap_err();
        assert_eq!(BuildError::MissingFields(vec!["location"]), err);
    }

    #[test]
    fn all_missing_inputs_are_reported_at_once() {
        let err = JobPost::builder()
            .skills("Python")
            .contact(" ")
            .build().unwrap_err();
        let BuildError::MissingFields(missing) = err;
        assert_eq!(vec!["role", "contact", "email", "location", "logo"], missing);
    }

    #[test]
    fn missing_logo_gates_even_with_all_text_present() {
        let err = complete_builder().logo(Vec::new()).build().unwrap_err();
        assert_eq!(BuildError::MissingFields(vec!["logo"]), err);
    }

    #[test]
    fn default_logo_placement() {
        let post = complete_builder().build().unwrap();
        assert_eq!(200, post.logo_x());
        assert_eq!(100, post.logo_y());
        assert_eq!(300.0, post.logo_max_dimension());
    }

    #[test]
    fn request_deserializes_and_converts() {
        let request: JobPostRequest = serde_json::from_value(serde_json::json!({
            "role": " Python Developer ",
            "skills": "Python, Django, APIs",
            "contact": "+91 9016768065",
            "email": "jobs@example.com",
            "location": "Surat",
            "logo_bytes": [137, 80, 78, 71],
            "logo_max_dimension": 250.0,
        })).unwrap();
        assert_eq!(200, request.logo_x);

        let post = Builder::from(request).build().unwrap();
        assert_eq!("Python Developer", post.role());
        assert_eq!(250.0, post.logo_max_dimension());
    }

    #[test]
    fn blank_request_reports_everything() {
        let request: JobPostRequest = serde_json::from_str("{}").unwrap();
        let err = Builder::from(request).build().unwrap_err();
        let BuildError::MissingFields(missing) = err;
        assert_eq!(6, missing.len());
    }
}
