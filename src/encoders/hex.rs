//! Hex string to number chunks and back.
//!
//! A hex string is cut into chunks of up to [`CHUNK_DIGITS`] digits. Each
//! chunk is read with a marker `1` digit in front so leading zeros survive
//! the trip through an integer; rendering strips the marker again.

/// Hex digits carried by one number.
pub(crate) const CHUNK_DIGITS: usize = 12;

/// Splits `hex` into marked numbers, or `None` if it is blank or not hex.
pub(crate) fn to_chunks(hex: &str) -> Option<Vec<u64>> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    hex.as_bytes()
        .chunks(CHUNK_DIGITS)
        .map(|chunk| {
            chunk.iter().try_fold(1u64, |value, &b| {
                let digit = char::from(b).to_digit(16)?;
                Some((value << 4) | u64::from(digit))
            })
        })
        .collect()
}

/// Renders marked numbers back into lowercase hex.
pub(crate) fn from_chunks(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(|number| {
            let digits = format!("{number:x}");
            digits[1..].to_string()
        })
        .collect()
}
