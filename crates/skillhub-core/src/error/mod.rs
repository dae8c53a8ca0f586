//! Error handling for the Skillhub engine
//!
//! All fallible operations in this crate return [`HubResult`]. The error
//! type carries an optional context string so callers can annotate failures
//! without wrapping them in a second enum.

mod constructors;
mod types;

pub use types::{HubError, HubResult, OptionExt, ResultExt};
