//! Room codes: short, case-insensitive identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng};

/// Length of generated codes.
pub const CODE_LEN: usize = 5;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A normalized (upper-case) room code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomCode(String);

impl RoomCode {
    /// Random code drawn from `rng`.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let code = (0..CODE_LEN)
            .map(|_| ALPHABET[rng.gen_range_usize(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RoomCode {
    type Err = GameError;

    /// Accepts 4-8 ASCII letters or digits, any case, surrounding space ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = (4..=8).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(GameError::InvalidRoomCode(s.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for RoomCode {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        let code: RoomCode = " abcDe ".parse().unwrap();
        assert_eq!(code.as_str(), "ABCDE");
        assert_eq!(code, "ABCDE".parse().unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<RoomCode>().is_err());
        assert!("ab-de".parse::<RoomCode>().is_err());
        assert!("ABCDEFGHI".parse::<RoomCode>().is_err());
    }

    #[test]
    fn test_generate_is_valid_and_deterministic() {
        let a = RoomCode::generate(&mut GameRng::new(9));
        let b = RoomCode::generate(&mut GameRng::new(9));
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), CODE_LEN);
        assert_eq!(a.as_str().parse::<RoomCode>().unwrap(), a);
    }

    #[test]
    fn test_serde_validates() {
        let code: RoomCode = serde_json::from_str("\"xyz12\"").unwrap();
        assert_eq!(code.as_str(), "XYZ12");
        assert!(serde_json::from_str::<RoomCode>("\"!!\"").is_err());
    }
}
