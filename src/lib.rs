//!
//! jobpost -- Job posting graphics on demand
//!
//! The crate composes a job-posting image: user-provided text fields and an
//! uploaded logo are drawn over a fixed background template, and the result
//! is handed back as encoded PNG bytes.
//!
//! ```no_run
//! use jobpost::{Engine, JobPost};
//!
//! let engine = Engine::new().expect("assets");
//! let post = JobPost::builder()
//!     .role("Python Developer")
//!     .skills("Python, Django, APIs")
//!     .contact("+91 9016768065")
//!     .email("jobs@example.com")
//!     .location("Surat")
//!     .logo(std::fs::read("logo.png").unwrap())
//!     .build()
//!     .expect("all fields filled in");
//!
//! let output = engine.compose(post).unwrap();
//! std::fs::write(output.file_name(), output.bytes()).unwrap();
//! ```

mod compose;
mod model;
mod resources;
mod util;


pub use compose::*;
pub use model::*;
pub use resources::*;
