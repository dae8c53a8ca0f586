//! Configuration
//!
//! Small layered configuration: built-in defaults, an optional file
//! (format chosen by extension), then environment overrides. Validation of
//! request-level inputs against these limits happens at the tool and CLI
//! boundaries, never inside the matching engine.

mod file_loader;
mod model;

pub use file_loader::load_from_file;
pub use model::{Config, DEFAULT_MAX_SKILLS, MAX_SKILLS_LIMIT};
