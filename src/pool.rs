//! Character pool assembly.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Ordered alphabet a password is drawn from. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend_from_str(&mut self, s: &str) {
        self.chars.extend(s.chars());
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl From<&str> for CharacterPool {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl FromIterator<char> for CharacterPool {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

/// Builds the generation alphabet. Letters are always present, so the
/// result is never empty.
pub fn build_pool(include_numbers: bool, include_symbols: bool) -> CharacterPool {
    let mut pool = CharacterPool::new();
    pool.extend_from_str(UPPERCASE);
    pool.extend_from_str(LOWERCASE);

    if include_numbers {
        pool.extend_from_str(DIGITS);
    }

    if include_symbols {
        pool.extend_from_str(SYMBOLS);
    }

    log::debug!(
        "built pool of {} chars (numbers={}, symbols={})",
        pool.len(),
        include_numbers,
        include_symbols
    );

    pool
}
