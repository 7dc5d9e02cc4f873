//! Defines the output of a composition.

use std::ops::Deref;

use mime::Mime;

use crate::model::constants::OUTPUT_FILE_NAME;
use super::error::ComposeWarning;


/// Output of the composition process: encoded PNG bytes,
/// plus at most one non-fatal warning.
#[derive(Clone, Debug)]
#[must_use = "unused compose output which must be used"]
pub struct ComposeOutput {
    bytes: Vec<u8>,
    warning: Option<ComposeWarning>,
}

impl ComposeOutput {
    #[inline]
    pub(super) fn new(bytes: Vec<u8>, warning: Option<ComposeWarning>) -> Self {
        ComposeOutput{bytes, warning}
    }
}

impl ComposeOutput {
    /// Raw bytes of the encoded PNG image.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the output into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The non-fatal warning produced during composition, if any.
    ///
    /// Currently this can only mean the logo couldn't be processed:
    /// the image is complete except for the logo paste.
    #[inline]
    pub fn warning(&self) -> Option<&ComposeWarning> {
        self.warning.as_ref()
    }

    /// Suggested file name for the output.
    #[inline]
    pub fn file_name(&self) -> &'static str {
        OUTPUT_FILE_NAME
    }

    /// The MIME type of the output.
    #[inline]
    pub fn mime_type(&self) -> Mime {
        mime::IMAGE_PNG
    }
}

impl Deref for ComposeOutput {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl From<ComposeOutput> for Vec<u8> {
    fn from(output: ComposeOutput) -> Vec<u8> {
        output.into_bytes()
    }
}
