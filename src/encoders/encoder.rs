use num_integer::Integer;

use super::working::WorkingAlphabet;
use crate::codec::Hashids;
use crate::core::shuffle::self_shuffle;

/// Encodes `numbers` into a hash string.
///
/// Returns an empty string for an empty slice.
pub(crate) fn encode(codec: &Hashids, numbers: &[u64]) -> String {
    if numbers.is_empty() {
        return String::new();
    }

    let tables = codec.tables();
    let alphabet = tables.chars();
    let separators = tables.separators();

    let checksum = checksum(numbers);
    let lottery = alphabet[index(checksum, alphabet.len())];

    let mut working = WorkingAlphabet::new(alphabet, lottery, codec.salt_chars());
    let mut output = Vec::with_capacity(codec.min_hash_length().max(numbers.len() * 4));
    output.push(lottery);

    for (i, &number) in numbers.iter().enumerate() {
        let start = output.len();
        push_digits(number, working.advance(), &mut output);

        if i + 1 < numbers.len() {
            let divisor = u64::from(output[start]) + i as u64;
            let reduced = if divisor == 0 { number } else { number % divisor };
            output.push(separators[index(reduced, separators.len())]);
        }
    }

    let min_length = codec.min_hash_length();
    if output.len() < min_length {
        let guards = tables.guards();

        let guard = guards[index(checksum.wrapping_add(u64::from(output[0])), guards.len())];
        output.insert(0, guard);

        if output.len() < min_length {
            let guard = guards[index(checksum.wrapping_add(u64::from(output[2])), guards.len())];
            output.push(guard);
        }
    }

    let half = alphabet.len() / 2;
    while output.len() < min_length {
        self_shuffle(working.chars_mut());
        let padding = working.chars();

        let mut wrapped = Vec::with_capacity(output.len() + padding.len());
        wrapped.extend_from_slice(&padding[half..]);
        wrapped.extend_from_slice(&output);
        wrapped.extend_from_slice(&padding[..half]);
        output = wrapped;

        let excess = output.len().saturating_sub(min_length);
        if excess > 0 {
            output.drain(..excess / 2);
            output.truncate(min_length);
        }
    }

    output.into_iter().collect()
}

/// Sum of `numbers[i] % (i + 100)`, wrapping on overflow.
pub(crate) fn checksum(numbers: &[u64]) -> u64 {
    numbers
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &n)| acc.wrapping_add(n % (i as u64 + 100)))
}

/// Appends `number` written in base `alphabet.len()`, most significant digit first.
fn push_digits(mut number: u64, alphabet: &[char], output: &mut Vec<char>) {
    let base = alphabet.len() as u64;
    let start = output.len();

    loop {
        let (quotient, remainder) = number.div_rem(&base);
        output.push(alphabet[remainder as usize]);
        number = quotient;
        if number == 0 {
            break;
        }
    }

    output[start..].reverse();
}

fn index(value: u64, len: usize) -> usize {
    (value % len as u64) as usize
}
