use crate::error::{Error, Result};
use blake2::{Blake2s256, Digest};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const KEY_LEN: usize = 32;

/// Turns a seed phrase into a keystream key. Surrounding whitespace is
/// dropped and the phrase is NFC-normalised first, so visually identical
/// phrases give the same key.
pub fn derive_key(seed_phrase: &str) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let normalized: Zeroizing<String> = Zeroizing::new(seed_phrase.trim().nfc().collect());

    if normalized.is_empty() {
        return Err(Error::EmptySeed);
    }

    let mut hasher = Blake2s256::new();
    hasher.update(normalized.as_bytes());
    let digest = hasher.finalize();

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&digest);

    Ok(key)
}
