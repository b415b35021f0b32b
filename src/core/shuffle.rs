//! Salt-seeded deterministic permutation.

/// Permutes `buf` in place, seeded by `salt`.
///
/// Walks `buf` from the last index down to 1, swapping each position with an
/// index derived from the current salt character, the rolling salt index and
/// the running sum of salt codes seen so far. The same buffer and salt always
/// produce the same permutation. An empty salt leaves `buf` untouched.
///
/// # Example
///
/// ```
/// use hashids::consistent_shuffle;
///
/// let mut chars: Vec<char> = "abcdefghij".chars().collect();
/// consistent_shuffle(&mut chars, &['s', 'a', 'l', 't']);
/// assert_eq!(chars.iter().collect::<String>(), "iajecbhdgf");
/// ```
pub fn consistent_shuffle(buf: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut index = 0;
    let mut sum = 0usize;

    for i in (1..buf.len()).rev() {
        let code = u32::from(salt[index]) as usize;
        sum += code;
        let j = (code + index + sum) % i;
        buf.swap(i, j);
        index = (index + 1) % salt.len();
    }
}

/// Shuffles `buf` using a snapshot of its own contents as the salt.
pub(crate) fn self_shuffle(buf: &mut [char]) {
    let seed = buf.to_vec();
    consistent_shuffle(buf, &seed);
}
