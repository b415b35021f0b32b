/// Errors produced by the codec.
///
/// Configuration problems surface once, from construction. The remaining
/// variants are signalled by calls that ask for a narrower result than the
/// hash holds. Malformed or foreign hashes are not errors: they decode to an
/// empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashidsError {
    /// The alphabet is empty or whitespace only.
    #[error("alphabet cannot be empty")]
    EmptyAlphabet,
    /// The separator set is empty or whitespace only.
    #[error("separators cannot be empty")]
    EmptySeparators,
    /// The alphabet does not contain enough unique characters.
    #[error("alphabet must contain at least {min} unique characters, got {unique}")]
    AlphabetTooSmall { unique: usize, min: usize },
    /// Too few characters are left once separators are taken out.
    #[error(
        "alphabet must keep at least {min} characters after removing separators, got {remaining}"
    )]
    TooFewAfterSeparators { remaining: usize, min: usize },
    /// The salt is not shorter than the derived alphabet.
    #[error("salt length {salt} must be shorter than the alphabet length {alphabet}")]
    SaltTooLong { salt: usize, alphabet: usize },
    /// A decoded value does not fit the requested integer width.
    #[error("decoded value {value} does not fit in {target}")]
    Overflow { value: u64, target: &'static str },
    /// A single value was requested from a hash that does not hold exactly one.
    #[error("expected a hash holding exactly one number, found {count}")]
    OutOfRange { count: usize },
}

/// Error when a profile is not found
#[derive(Debug, thiserror::Error)]
#[error(
    "error: profile '{name}' not found\n{}      run `hashids config list` to see all profiles",
    hint(.suggestion)
)]
pub struct ProfileNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl ProfileNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!("\nhint: did you mean '{}'?\n", candidate),
        None => "\n".to_string(),
    }
}

/// Edit distance between two names, kept to a single rolling row.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Find the closest matching profile name
pub fn find_closest_profile(name: &str, available: &[String]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
