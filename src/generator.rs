use crate::error::{Error, Result};
use crate::pool::CharacterPool;
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand::Rng;
use rand::rngs::ThreadRng;
use zeroize::Zeroizing;

/// Source of uniform indices used to pick pool characters.
///
/// `next_index(upper)` must return a value in `[0, upper)`; callers never
/// pass `upper == 0`.
pub trait RandomSource {
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<F> RandomSource for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, upper: usize) -> usize {
        self(upper)
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}

/// ChaCha20 keystream with unbiased rejection sampling. The same key always
/// yields the same index sequence.
pub struct KeystreamSource {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl KeystreamSource {
    const BUFFER_LEN: usize = 1024;

    pub fn new(key: &[u8; 32]) -> Self {
        let mut cipher = ChaCha20::new(key.into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; Self::BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.buffer.fill(0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let bytes = [
            self.buffer[self.pos],
            self.buffer[self.pos + 1],
            self.buffer[self.pos + 2],
            self.buffer[self.pos + 3],
        ];
        self.pos += 4;

        u32::from_le_bytes(bytes)
    }
}

impl RandomSource for KeystreamSource {
    fn next_index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0 && upper <= u32::MAX as usize);

        let upper = upper as u64;
        let span = 1u64 << 32;
        let rejection_threshold = span - (span % upper);

        loop {
            let value = self.next_u32() as u64;
            if value < rejection_threshold {
                return (value % upper) as usize;
            }
        }
    }
}

/// Draws `length` characters from `pool`, each independently.
pub fn generate<R>(length: usize, pool: &CharacterPool, rng: &mut R) -> Result<Zeroizing<String>>
where
    R: RandomSource + ?Sized,
{
    if length < 1 {
        return Err(Error::InvalidLength { length });
    }

    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }

    let chars = pool.as_slice();
    let mut password = Zeroizing::new(String::with_capacity(length));

    for _ in 0..length {
        let index = rng.next_index(chars.len());
        debug_assert!(index < chars.len(), "random source returned {index}");
        password.push(chars[index % chars.len()]);
    }

    log::debug!(
        "generated {} chars from a pool of {}",
        length,
        chars.len()
    );

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::build_pool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_password_length() {
        let pool = build_pool(true, true);
        let mut rng = RngSource::thread();

        for length in [1, 6, 8, 20, 100, 257] {
            let password = generate(length, &pool, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_password_charset() {
        let pool = build_pool(true, false);
        let mut rng = RngSource::thread();
        let password = generate(200, &pool, &mut rng).unwrap();

        for ch in password.chars() {
            assert!(
                pool.contains(ch),
                "Password contains invalid character: {:?}",
                ch
            );
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let pool = build_pool(false, false);
        let mut rng = RngSource::thread();

        let result = generate(0, &pool, &mut rng);
        assert_eq!(result.unwrap_err(), Error::InvalidLength { length: 0 });
    }

    #[test]
    fn test_empty_pool_rejected() {
        let pool = CharacterPool::new();
        let mut rng = RngSource::thread();

        let result = generate(8, &pool, &mut rng);
        assert_eq!(result.unwrap_err(), Error::EmptyPool);
    }

    #[test]
    fn test_length_checked_before_pool() {
        let pool = CharacterPool::new();
        let mut rng = |_: usize| 0usize;

        let result = generate(0, &pool, &mut rng);
        assert_eq!(result.unwrap_err(), Error::InvalidLength { length: 0 });
    }

    #[test]
    fn test_scripted_source() {
        let pool = CharacterPool::from("xyz");
        let script = [2usize, 0, 1, 1, 2];
        let mut i = 0;
        let mut rng = |upper: usize| {
            assert_eq!(upper, 3);
            let v = script[i];
            i += 1;
            v
        };

        let password = generate(5, &pool, &mut rng).unwrap();
        assert_eq!(*password, "zxyyz");
    }

    #[test]
    fn test_constant_source() {
        let pool = build_pool(false, false);
        let mut rng = |_: usize| 0usize;

        let password = generate(4, &pool, &mut rng).unwrap();
        assert_eq!(*password, "AAAA");
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let pool = build_pool(true, true);

        let mut first = RngSource::new(StdRng::seed_from_u64(7));
        let mut second = RngSource::new(StdRng::seed_from_u64(7));

        let password1 = generate(32, &pool, &mut first).unwrap();
        let password2 = generate(32, &pool, &mut second).unwrap();
        assert_eq!(*password1, *password2);
    }

    #[test]
    fn test_successive_generations_differ() {
        let pool = build_pool(true, true);
        let mut rng = RngSource::thread();

        let password1 = generate(32, &pool, &mut rng).unwrap();
        let password2 = generate(32, &pool, &mut rng).unwrap();
        assert_ne!(*password1, *password2);
    }

    #[test]
    fn test_keystream_deterministic() {
        let key = [42u8; 32];
        let pool = build_pool(true, true);

        let password1 = generate(48, &pool, &mut KeystreamSource::new(&key)).unwrap();
        let password2 = generate(48, &pool, &mut KeystreamSource::new(&key)).unwrap();
        assert_eq!(*password1, *password2);

        let other = generate(48, &pool, &mut KeystreamSource::new(&[7u8; 32])).unwrap();
        assert_ne!(*password1, *other);
    }

    #[test]
    fn test_keystream_in_range_across_refills() {
        let mut source = KeystreamSource::new(&[1u8; 32]);

        // Well past one buffer of keystream.
        for _ in 0..2000 {
            for upper in [1usize, 2, 3, 52, 91] {
                assert!(source.next_index(upper) < upper);
            }
        }
    }

    #[test]
    fn test_keystream_covers_pool() {
        let mut source = KeystreamSource::new(&[9u8; 32]);
        let mut seen = [false; 10];

        for _ in 0..1000 {
            seen[source.next_index(10)] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
