//! Module implementing the actual image composition.

mod error;
mod logo;
mod output;
mod task;

pub use self::error::{ComposeError, ComposeWarning, LogoError};
pub use self::output::ComposeOutput;


use std::sync::Arc;

use crate::model::JobPost;
use crate::resources::{AssetPaths, Assets, SetupError};
use self::task::ComposeTask;


/// The job posting composition engine.
///
/// Holds the shared, read-only assets (background template and font faces)
/// which are loaded once, at startup. The engine is stateless beyond that:
/// it is `Send + Sync`, safe to invoke concurrently, and every composition
/// works on its own cloned canvas.
///
/// *Note*: `Engine` implements `Clone`
/// by merely cloning a shared reference to the underlying assets.
#[derive(Clone, Debug)]
pub struct Engine {
    assets: Arc<Assets>,
}

// Constructors.
impl Engine {
    /// Create an `Engine` using the standard asset layout
    /// (an `assets/` directory relative to the working directory).
    ///
    /// Any missing or undecodable asset is a fatal `SetupError`;
    /// asset trouble is a deployment problem, never a per-request one.
    #[inline]
    pub fn new() -> Result<Engine, SetupError> {
        Self::with_paths(&AssetPaths::default())
    }

    /// Create an `Engine` loading assets from given paths.
    #[inline]
    pub fn with_paths(paths: &AssetPaths) -> Result<Engine, SetupError> {
        Ok(Self::with_assets(Assets::load(paths)?))
    }

    /// Create an `Engine` from already loaded assets.
    #[inline]
    pub fn with_assets(assets: Assets) -> Engine {
        Engine{assets: Arc::new(assets)}
    }
}

impl Engine {
    /// Pixel dimensions of the background template,
    /// and therefore of every composed image.
    #[inline]
    pub fn template_dimensions(&self) -> (u32, u32) {
        self.assets.template.dimensions()
    }

    /// Compose the job posting image.
    ///
    /// The result carries the encoded PNG bytes and, if the logo couldn't
    /// be processed, a single non-fatal warning: the text is always drawn,
    /// and a logo failure never corrupts or aborts the output.
    #[inline]
    pub fn compose(&self, post: JobPost) -> Result<ComposeOutput, ComposeError> {
        ComposeTask::new(post, self.assets.clone()).perform()
    }
}
