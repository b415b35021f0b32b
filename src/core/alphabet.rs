use std::collections::HashSet;

use super::shuffle::consistent_shuffle;
use crate::encoders::errors::HashidsError;

/// Minimum number of unique characters a raw alphabet must contain.
pub const MIN_ALPHABET_LENGTH: usize = 16;

/// Minimum number of alphabet characters left once separators are removed.
pub const MIN_REMAINING_LENGTH: usize = 10;

/// Target ratio of alphabet characters to separator characters.
const SEPARATOR_RATIO: f64 = 3.5;

/// One guard is reserved per this many alphabet characters.
const GUARD_RATIO: f64 = 12.0;

/// The character tables derived once from a raw alphabet, separator set and salt.
///
/// `chars`, `separators` and `guards` are pairwise disjoint. Encode and decode
/// calls only ever read these tables; every per-call permutation happens on a
/// private copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
}

impl Alphabet {
    /// Derives the working alphabet, separators and guards.
    ///
    /// Characters keep their first-occurrence order before shuffling, so the
    /// result is fully determined by the three inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if either input is blank, if the alphabet has fewer
    /// than [`MIN_ALPHABET_LENGTH`] unique characters, or if fewer than
    /// [`MIN_REMAINING_LENGTH`] remain after removing separators.
    pub fn build(alphabet: &str, separators: &str, salt: &[char]) -> Result<Self, HashidsError> {
        if alphabet.trim().is_empty() {
            return Err(HashidsError::EmptyAlphabet);
        }
        if separators.trim().is_empty() {
            return Err(HashidsError::EmptySeparators);
        }

        let mut chars = unique(alphabet.chars());
        if chars.len() < MIN_ALPHABET_LENGTH {
            return Err(HashidsError::AlphabetTooSmall {
                unique: chars.len(),
                min: MIN_ALPHABET_LENGTH,
            });
        }

        let mut seps = unique(separators.chars().filter(|c| chars.contains(c)));
        chars.retain(|c| !seps.contains(c));
        if chars.len() < MIN_REMAINING_LENGTH {
            return Err(HashidsError::TooFewAfterSeparators {
                remaining: chars.len(),
                min: MIN_REMAINING_LENGTH,
            });
        }

        consistent_shuffle(&mut seps, salt);

        if seps.is_empty() || ratio(chars.len(), seps.len()) > SEPARATOR_RATIO {
            let target = (ratio(chars.len(), 1) / SEPARATOR_RATIO).ceil() as usize;
            let target = target.max(2);
            if target > seps.len() {
                let missing = target - seps.len();
                seps.extend(chars.drain(..missing));
            } else {
                seps.truncate(target);
            }
        }

        consistent_shuffle(&mut chars, salt);

        let guard_count = (ratio(chars.len(), 1) / GUARD_RATIO).ceil() as usize;
        let guards: Vec<char> = if chars.len() < 3 {
            let count = guard_count.min(seps.len());
            seps.drain(..count).collect()
        } else {
            chars.drain(..guard_count).collect()
        };

        Ok(Self {
            chars,
            separators: seps,
            guards,
        })
    }

    /// Characters used as digits.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Characters placed between encoded numbers.
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    /// Characters used to pad short hashes.
    pub fn guards(&self) -> &[char] {
        &self.guards
    }

    /// Number of digit characters, i.e. the radix used for each number.
    pub fn base(&self) -> usize {
        self.chars.len()
    }
}

fn unique(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut seen = HashSet::new();
    chars.filter(|c| seen.insert(*c)).collect()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}
