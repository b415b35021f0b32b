pub(crate) mod decoder;
pub(crate) mod encoder;
pub mod errors;
pub(crate) mod hex;
mod working;

// Re-export error types for public API
pub use errors::{HashidsError, ProfileNotFoundError, find_closest_profile};
