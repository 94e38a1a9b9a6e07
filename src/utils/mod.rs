//! Shared helpers

pub mod paths;

pub use paths::{join_normalized, normalize_path};
