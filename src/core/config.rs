//! Room configuration.
//!
//! Every rule threshold the engine consults lives here so rule variants can
//! be selected per room without touching the state machine. Defaults are the
//! reference rules: a 17-card deck (11 radical, 6 traditional), 5-10 players,
//! five traditional or six radical policies to win.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Per-room rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Radical policy cards in a fresh deck.
    pub radical_cards: usize,

    /// Traditional policy cards in a fresh deck.
    pub traditional_cards: usize,

    /// Players required to start.
    pub min_players: usize,

    /// Room capacity.
    pub max_players: usize,

    /// Traditional policies needed for a protagonist win.
    pub traditional_win: u8,

    /// Radical policies needed for an antagonist win.
    pub radical_win: u8,

    /// Radical count at which electing the Leader as running mate ends the game.
    pub leader_election_threshold: u8,

    /// Consecutive failed elections that force the top policy.
    pub election_tracker_limit: u8,

    /// Whether the running mate may propose a veto.
    pub veto_enabled: bool,

    /// Radical count that unlocks veto.
    pub veto_threshold: u8,

    /// The Leader learns the Infiltrators only in games at or below this size.
    pub leader_knows_team_max_players: usize,

    /// Cosmetic pause transports may insert before revealing roles.
    /// Zero disables the hint. Never gates state.
    pub role_reveal_delay_ms: u64,

    /// Fixed seed for reproducible games. `None` draws one from the registry.
    pub seed: Option<u64>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            radical_cards: 11,
            traditional_cards: 6,
            min_players: 5,
            max_players: 10,
            traditional_win: 5,
            radical_win: 6,
            leader_election_threshold: 3,
            election_tracker_limit: 3,
            veto_enabled: true,
            veto_threshold: 5,
            leader_knows_team_max_players: 6,
            role_reveal_delay_ms: 500,
            seed: None,
        }
    }
}

impl RoomConfig {
    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, radical: usize, traditional: usize) -> Self {
        self.radical_cards = radical;
        self.traditional_cards = traditional;
        self
    }

    /// Enable or disable veto.
    #[must_use]
    pub fn with_veto(mut self, enabled: bool) -> Self {
        self.veto_enabled = enabled;
        self
    }

    /// Set the role reveal pacing hint.
    #[must_use]
    pub fn with_reveal_delay_ms(mut self, ms: u64) -> Self {
        self.role_reveal_delay_ms = ms;
        self
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.radical_cards + self.traditional_cards
    }

    /// The advisory reveal pause, if any.
    #[must_use]
    pub fn role_reveal_delay(&self) -> Option<Duration> {
        (self.role_reveal_delay_ms > 0).then(|| Duration::from_millis(self.role_reveal_delay_ms))
    }

    /// Check that the rules can always be played to completion.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));

        if self.min_players < 5 || self.max_players > 10 || self.min_players > self.max_players {
            return fail("player range must lie within 5..=10");
        }
        if self.traditional_win == 0 || self.radical_win == 0 || self.election_tracker_limit == 0 {
            return fail("win thresholds and tracker limit must be positive");
        }
        if self.leader_election_threshold >= self.radical_win {
            return fail("leader election threshold must be below the radical win");
        }
        if self.traditional_cards < self.traditional_win as usize
            || self.radical_cards < self.radical_win as usize
        {
            return fail("deck cannot reach a win threshold");
        }
        // The last legal board holds one short of each win; a draw of three
        // must still be possible from what remains.
        let max_enacted = (self.traditional_win as usize - 1) + (self.radical_win as usize - 1);
        if self.deck_size() < max_enacted + 3 {
            return fail("deck too small to always draw three");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RoomConfig::default();
        assert_eq!(config.deck_size(), 17);
        assert!(config.validate().is_ok());
        assert_eq!(config.role_reveal_delay(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_builder_pattern() {
        let config = RoomConfig::default()
            .with_seed(9)
            .with_deck(12, 6)
            .with_veto(false)
            .with_reveal_delay_ms(0);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.deck_size(), 18);
        assert!(!config.veto_enabled);
        assert_eq!(config.role_reveal_delay(), None);
    }

    #[test]
    fn test_rejects_small_deck() {
        let config = RoomConfig::default().with_deck(6, 5);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_player_range() {
        let config = RoomConfig {
            min_players: 4,
            ..RoomConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RoomConfig {
            max_players: 12,
            ..RoomConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RoomConfig::from_toml_str("veto_enabled = false\nseed = 7\n").unwrap();
        assert!(!config.veto_enabled);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.radical_cards, 11);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(RoomConfig::from_toml_str("radical_cards = 2").is_err());
        assert!(RoomConfig::from_toml_str("radical_cards = \"many\"").is_err());
    }

    #[test]
    fn test_serialization() {
        let config = RoomConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoomConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
