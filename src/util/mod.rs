//! Utility modules.

pub(crate) mod text;
