//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! in hashids.
//!
//! # Example
//!
//! ```
//! use hashids::prelude::*;
//!
//! let registry = ProfileRegistry::load_default().unwrap();
//! let hashids = registry.get_profile("default").unwrap().build().unwrap();
//! assert_eq!(hashids.encode(&[1, 2, 3]), "o2fXhV");
//! ```

pub use crate::{
    // Core codec
    Hashids,
    HashidsBuilder,
    HashidsError,

    // Config
    ProfileConfig,
    ProfileRegistry,
};
