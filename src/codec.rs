use log::{debug, trace};

use crate::core::alphabet::Alphabet;
use crate::encoders::{HashidsError, decoder, encoder, hex};

/// Alphabet used when none is configured.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Separator candidates used when none are configured.
pub const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";

/// A configured encoder/decoder.
///
/// The character tables are derived once, in [`HashidsBuilder::build`], and
/// never change afterwards. Every call works on its own scratch copies, so a
/// single instance can be shared freely between threads.
///
/// # Example
///
/// ```
/// use hashids::Hashids;
///
/// let hashids = Hashids::new("this is my salt", 0).unwrap();
/// assert_eq!(hashids.encode(&[12345]), "NkK9");
/// assert_eq!(hashids.decode("NkK9").unwrap(), vec![12345]);
/// ```
#[derive(Debug, Clone)]
pub struct Hashids {
    salt: String,
    salt_chars: Vec<char>,
    min_hash_length: usize,
    tables: Alphabet,
}

impl Hashids {
    /// Creates a codec with the default alphabet and separators.
    ///
    /// # Errors
    ///
    /// Returns [`HashidsError::SaltTooLong`] if the trimmed salt is not
    /// shorter than the derived alphabet.
    pub fn new(salt: &str, min_hash_length: usize) -> Result<Self, HashidsError> {
        Self::builder()
            .salt(salt)
            .min_length(min_hash_length)
            .build()
    }

    /// Starts a builder with the default configuration.
    pub fn builder() -> HashidsBuilder {
        HashidsBuilder::default()
    }

    /// Encodes 32-bit numbers.
    ///
    /// Returns an empty string if `numbers` is empty or holds a negative value.
    pub fn encode(&self, numbers: &[i32]) -> String {
        let widened: Vec<i64> = numbers.iter().map(|&n| i64::from(n)).collect();
        self.encode_long(&widened)
    }

    /// Encodes 64-bit numbers.
    ///
    /// Returns an empty string if `numbers` is empty or holds a negative value.
    pub fn encode_long(&self, numbers: &[i64]) -> String {
        let unsigned: Option<Vec<u64>> = numbers.iter().map(|&n| u64::try_from(n).ok()).collect();
        match unsigned {
            Some(unsigned) => encoder::encode(self, &unsigned),
            None => String::new(),
        }
    }

    /// Encodes unsigned 64-bit numbers, including values above `i64::MAX`.
    pub fn encode_unsigned(&self, numbers: &[u64]) -> String {
        encoder::encode(self, numbers)
    }

    /// Decodes a hash into 32-bit numbers.
    ///
    /// A hash that is malformed or was produced under a different
    /// configuration decodes to an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`HashidsError::Overflow`] if a decoded value exceeds `i32::MAX`.
    pub fn decode(&self, hash: &str) -> Result<Vec<i32>, HashidsError> {
        decoder::decode(self, hash)
            .into_iter()
            .map(|n| i32::try_from(n).map_err(|_| HashidsError::Overflow { value: n, target: "i32" }))
            .collect()
    }

    /// Decodes a hash into 64-bit numbers.
    ///
    /// Returns an empty vector for malformed hashes and for hashes holding a
    /// value above `i64::MAX`, which [`Hashids::encode_long`] never produces.
    pub fn decode_long(&self, hash: &str) -> Vec<i64> {
        let decoded: Result<Vec<i64>, _> = decoder::decode(self, hash)
            .into_iter()
            .map(i64::try_from)
            .collect();

        decoded.unwrap_or_else(|_| {
            trace!("rejecting {hash:?}: holds a value above i64::MAX");
            Vec::new()
        })
    }

    /// Decodes a hash into unsigned 64-bit numbers.
    pub fn decode_unsigned(&self, hash: &str) -> Vec<u64> {
        decoder::decode(self, hash)
    }

    /// Decodes a hash that must hold exactly one 32-bit number.
    ///
    /// # Errors
    ///
    /// Returns [`HashidsError::OutOfRange`] unless the hash holds exactly one
    /// number, and [`HashidsError::Overflow`] if that number exceeds `i32::MAX`.
    pub fn decode_single(&self, hash: &str) -> Result<i32, HashidsError> {
        let value = self.decode_single_long(hash)?;
        i32::try_from(value).map_err(|_| HashidsError::Overflow {
            value: value.unsigned_abs(),
            target: "i32",
        })
    }

    /// Decodes a hash that must hold exactly one 64-bit number.
    ///
    /// # Errors
    ///
    /// Returns [`HashidsError::OutOfRange`] unless the hash holds exactly one
    /// number.
    pub fn decode_single_long(&self, hash: &str) -> Result<i64, HashidsError> {
        match self.decode_long(hash).as_slice() {
            [value] => Ok(*value),
            other => Err(HashidsError::OutOfRange { count: other.len() }),
        }
    }

    /// Encodes a hex string.
    ///
    /// Returns an empty string if `hex` is blank or contains a non-hex
    /// character.
    ///
    /// # Example
    ///
    /// ```
    /// use hashids::Hashids;
    ///
    /// let hashids = Hashids::new("this is my salt", 0).unwrap();
    /// let hash = hashids.encode_hex("507f1f77bcf86cd799439011");
    /// assert_eq!(hashids.decode_hex(&hash), "507f1f77bcf86cd799439011");
    /// ```
    pub fn encode_hex(&self, hex: &str) -> String {
        match hex::to_chunks(hex) {
            Some(numbers) => encoder::encode(self, &numbers),
            None => String::new(),
        }
    }

    /// Decodes a hash produced by [`Hashids::encode_hex`] into lowercase hex.
    ///
    /// Hex digits are always rendered lowercase, whatever case was encoded,
    /// so compare against the original input case-insensitively. Other
    /// Hashids ports may render uppercase; the hash itself is the same.
    ///
    /// Returns an empty string if the hash does not decode.
    pub fn decode_hex(&self, hash: &str) -> String {
        hex::from_chunks(&decoder::decode(self, hash))
    }

    /// The trimmed salt.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Minimum length of every encoded hash.
    pub fn min_hash_length(&self) -> usize {
        self.min_hash_length
    }

    /// Characters used as digits.
    pub fn alphabet(&self) -> &[char] {
        self.tables.chars()
    }

    /// Characters placed between encoded numbers.
    pub fn separators(&self) -> &[char] {
        self.tables.separators()
    }

    /// Characters used to pad short hashes.
    pub fn guards(&self) -> &[char] {
        self.tables.guards()
    }

    pub(crate) fn tables(&self) -> &Alphabet {
        &self.tables
    }

    pub(crate) fn salt_chars(&self) -> &[char] {
        &self.salt_chars
    }
}

/// Builder for [`Hashids`].
#[derive(Debug, Clone)]
pub struct HashidsBuilder {
    salt: String,
    min_length: usize,
    alphabet: String,
    separators: String,
}

impl Default for HashidsBuilder {
    fn default() -> Self {
        Self {
            salt: String::new(),
            min_length: 0,
            alphabet: DEFAULT_ALPHABET.to_string(),
            separators: DEFAULT_SEPARATORS.to_string(),
        }
    }
}

impl HashidsBuilder {
    /// Salt seeding every permutation. Surrounding whitespace is trimmed.
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Minimum length of encoded hashes.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Candidate digit characters. Duplicates are ignored.
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Separator candidates. Only those present in the alphabet are used.
    pub fn separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = separators.into();
        self
    }

    /// Derives the character tables and returns the codec.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the alphabet or separators are blank,
    /// the alphabet is too small, or the salt is not shorter than the derived
    /// alphabet.
    pub fn build(self) -> Result<Hashids, HashidsError> {
        let salt = self.salt.trim().to_string();
        let salt_chars: Vec<char> = salt.chars().collect();

        let tables = Alphabet::build(&self.alphabet, &self.separators, &salt_chars)?;
        if salt_chars.len() >= tables.base() {
            return Err(HashidsError::SaltTooLong {
                salt: salt_chars.len(),
                alphabet: tables.base(),
            });
        }

        debug!(
            "hashids ready: {} digits, {} separators, {} guards, min length {}",
            tables.base(),
            tables.separators().len(),
            tables.guards().len(),
            self.min_length
        );

        Ok(Hashids {
            salt,
            salt_chars,
            min_hash_length: self.min_length,
            tables,
        })
    }
}
