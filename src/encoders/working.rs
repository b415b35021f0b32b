use crate::core::shuffle::consistent_shuffle;

/// Per-call copy of the alphabet, reshuffled once per encoded number.
///
/// The seed for each shuffle is the lottery character, then the configured
/// salt, then the head of the current alphabet, cut to the alphabet length.
/// Encoding and decoding walk the same sequence of permutations as long as
/// they start from the same lottery character.
pub(crate) struct WorkingAlphabet {
    chars: Vec<char>,
    seed: Vec<char>,
    prefix: usize,
}

impl WorkingAlphabet {
    pub(crate) fn new(alphabet: &[char], lottery: char, salt: &[char]) -> Self {
        let mut seed = Vec::with_capacity(alphabet.len().max(1 + salt.len()));
        seed.push(lottery);
        seed.extend_from_slice(salt);
        let prefix = seed.len();

        Self {
            chars: alphabet.to_vec(),
            seed,
            prefix,
        }
    }

    /// Refills the seed from the current alphabet and shuffles it.
    pub(crate) fn advance(&mut self) -> &[char] {
        let fill = self.chars.len().saturating_sub(self.prefix);
        self.seed.truncate(self.prefix);
        self.seed.extend_from_slice(&self.chars[..fill]);
        consistent_shuffle(&mut self.chars, &self.seed);
        &self.chars
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn chars_mut(&mut self) -> &mut [char] {
        &mut self.chars
    }
}
