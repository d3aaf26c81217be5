//! Seeds for reproducible puzzle generation.

use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying a generated puzzle.
///
/// Every generation run derives all of its randomness from one seed, so a
/// seed printed next to a puzzle is enough to regenerate it. Seeds display
/// as 64 lowercase hex characters and parse back from the same form.
///
/// # Examples
///
/// ```
/// use kazuban_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///         .parse()
///         .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// Useful for "daily puzzle" style generation where the phrase encodes
    /// a date or a player-visible code.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(self) -> [u8; 32] {
        self.0
    }

    /// Creates the RNG that drives a generation run for this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("expected 64 hex characters, found {len}")]
    WrongLength {
        /// The actual input length in characters.
        len: usize,
    },
    /// The string contained a non-hexadecimal character.
    #[display("invalid hex character: {found:?}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::WrongLength {
                len: s.chars().count(),
            });
        }
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let hi = hex_value(chars.next().unwrap_or('\0'))?;
            let lo = hex_value(chars.next().unwrap_or('\0'))?;
            *byte = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: char) -> Result<u8, ParseSeedError> {
    let digit = c
        .to_digit(16)
        .ok_or(ParseSeedError::InvalidCharacter { found: c })?;
    #[expect(clippy::cast_possible_truncation)]
    let value = digit as u8;
    Ok(value)
}
