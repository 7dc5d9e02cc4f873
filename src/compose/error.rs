//! Composition errors and warnings.

use std::fmt;

use thiserror::Error;


/// Hard error that aborts a composition.
///
/// Note that logo trouble is deliberately *not* here: failures of the logo
/// sub-step degrade into a `ComposeWarning` on an otherwise complete result.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Encoding the final image didn't succeed.
    #[error("failed to encode the final image: {0}")]
    Encode(#[source] image::ImageError),
}


/// Error of the logo sub-step.
///
/// Always converted into a `ComposeWarning` by the compositor;
/// it never fails the composition as a whole.
#[derive(Debug, Error)]
pub enum LogoError {
    /// The uploaded bytes couldn't be decoded as an image.
    #[error("cannot decode the logo image: {0}")]
    Decode(#[from] image::ImageError),
}


/// Non-fatal warning attached to an otherwise successful composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeWarning {
    message: &'static str,
    detail: String,
}

impl ComposeWarning {
    /// Short human-readable summary, suitable for direct display.
    #[inline]
    pub fn message(&self) -> &str {
        self.message
    }

    /// Detail of the underlying error.
    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<LogoError> for ComposeWarning {
    fn from(e: LogoError) -> Self {
        ComposeWarning{
            message: "couldn't load the uploaded logo",
            detail: e.to_string(),
        }
    }
}

impl fmt::Display for ComposeWarning {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} ({})", self.message, self.detail)
    }
}
