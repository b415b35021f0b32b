//! Short, reversible, salted ids from non-negative integers.
//!
//! A [`Hashids`] codec turns a sequence of numbers into a short string such as
//! `"NkK9"` and back. The mapping is fully determined by the salt, the
//! alphabet, the separators and the minimum length, which makes it suitable
//! for hiding sequential database ids in URLs. It is obfuscation, not
//! encryption: anyone who knows the configuration can decode a hash.
//!
//! Decoding verifies itself by encoding the result again and comparing it to
//! the input, so damaged hashes and hashes made with another salt decode to
//! an empty sequence instead of to wrong numbers.
//!
//! # Examples
//!
//! ```
//! use hashids::Hashids;
//!
//! let hashids = Hashids::new("this is my salt", 0).unwrap();
//!
//! let hash = hashids.encode(&[683, 94108, 123, 5]);
//! assert_eq!(hashids.decode(&hash).unwrap(), vec![683, 94108, 123, 5]);
//!
//! // Negative numbers are not encodable
//! assert_eq!(hashids.encode(&[-1]), "");
//! ```
//!
//! Custom alphabet and a minimum length:
//!
//! ```
//! use hashids::Hashids;
//!
//! let hashids = Hashids::builder()
//!     .salt("arbitrary salt")
//!     .alphabet("abcdefghijklmnopqrstuvwxyz")
//!     .min_length(16)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(hashids.encode(&[1, 2, 3]), "pnovxlaxuriowydb");
//! ```

mod codec;
mod core;
mod encoders;
pub mod prelude;

pub use crate::codec::{DEFAULT_ALPHABET, DEFAULT_SEPARATORS, Hashids, HashidsBuilder};
pub use crate::core::alphabet::{Alphabet, MIN_ALPHABET_LENGTH};
pub use crate::core::config::{ProfileConfig, ProfileRegistry, Settings};
pub use crate::core::shuffle::consistent_shuffle;
pub use crate::encoders::{HashidsError, ProfileNotFoundError, find_closest_profile};
