//! Game identifiers and deterministic id generation.
//!
//! Ids are opaque strings of the form `game_<unix millis>_<random suffix>`,
//! matching what earlier note files already contain, so old data keeps
//! loading. The random suffix comes from a seedable ChaCha8 generator:
//! tests construct the generator from a fixed seed and get a reproducible
//! id sequence.

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Length of the random base-36 suffix on generated ids.
const SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wrap an existing id string (e.g. parsed from a route or old data).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Deterministic game id generator.
///
/// Same seed produces the same suffix sequence; the timestamp half of the
/// id is supplied by the caller.
#[derive(Clone, Debug)]
pub struct IdGen {
    inner: ChaCha8Rng,
}

impl IdGen {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate the next id, stamped with `now`.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> GameId {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[self.inner.gen_range(0..BASE36.len())] as char)
            .collect();
        GameId(format!("game_{}_{}", now.timestamp_millis(), suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_id_format() {
        let mut gen = IdGen::new(42);
        let id = gen.next_id(fixed_now());

        let parts: Vec<_> = id.as_str().split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "game");
        assert_eq!(parts[1], fixed_now().timestamp_millis().to_string());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_determinism() {
        let mut gen1 = IdGen::new(7);
        let mut gen2 = IdGen::new(7);

        for _ in 0..10 {
            assert_eq!(gen1.next_id(fixed_now()), gen2.next_id(fixed_now()));
        }
    }

    #[test]
    fn test_sequence_is_unique() {
        let mut gen = IdGen::new(7);
        let a = gen.next_id(fixed_now());
        let b = gen.next_id(fixed_now());
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = GameId::new("game_123_abcdefghi");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"game_123_abcdefghi\"");

        let back: GameId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
