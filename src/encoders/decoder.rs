use log::trace;

use super::encoder;
use super::working::WorkingAlphabet;
use crate::codec::Hashids;

/// Decodes a hash string back into the numbers it encodes.
///
/// Anything that is not the exact output of [`encoder::encode`] for this
/// codec decodes to an empty vector: blank input, characters outside the
/// tables, digits that overflow `u64`, and hashes that do not re-encode to
/// themselves.
pub(crate) fn decode(codec: &Hashids, hash: &str) -> Vec<u64> {
    if hash.trim().is_empty() {
        return Vec::new();
    }

    let tables = codec.tables();
    let chars: Vec<char> = hash.chars().collect();

    let segments = tokens(&chars, tables.guards());
    // More than three segments can only come from a damaged hash; the first
    // one is used in that case, not the second.
    let segment = match segments.as_slice() {
        [] => {
            trace!("rejecting {hash:?}: nothing between guards");
            return Vec::new();
        }
        [_, inner] | [_, inner, _] => *inner,
        [first, ..] => *first,
    };

    let Some((&lottery, body)) = segment.split_first() else {
        return Vec::new();
    };

    let parts = tokens(body, tables.separators());
    let mut numbers = Vec::with_capacity(parts.len());
    let mut working = WorkingAlphabet::new(tables.chars(), lottery, codec.salt_chars());

    for part in parts {
        match read_digits(part, working.advance()) {
            Some(number) => numbers.push(number),
            None => {
                trace!("rejecting {hash:?}: segment is not a number in this alphabet");
                return Vec::new();
            }
        }
    }

    if encoder::encode(codec, &numbers) != hash {
        trace!("rejecting {hash:?}: does not re-encode to itself");
        return Vec::new();
    }

    numbers
}

/// Non-empty runs of `input` between any of the `delimiters`.
pub(crate) fn tokens<'a>(input: &'a [char], delimiters: &[char]) -> Vec<&'a [char]> {
    input
        .split(|c| delimiters.contains(c))
        .filter(|part| !part.is_empty())
        .collect()
}

/// Reads `digits` as a base `alphabet.len()` number.
fn read_digits(digits: &[char], alphabet: &[char]) -> Option<u64> {
    let base = alphabet.len() as u64;
    digits.iter().try_fold(0u64, |value, c| {
        let digit = alphabet.iter().position(|a| a == c)? as u64;
        value.checked_mul(base)?.checked_add(digit)
    })
}
