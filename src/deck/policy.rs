//! Policy cards and enacted-policy tallies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single policy card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    Radical,
    Traditional,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Radical => f.write_str("Radical"),
            Policy::Traditional => f.write_str("Traditional"),
        }
    }
}

/// Cards held during a legislative session. Never more than three.
pub type PolicyHand = SmallVec<[Policy; 3]>;

/// True when `chosen` is a permutation of `hand`.
#[must_use]
pub fn same_cards(hand: &[Policy], chosen: &[Policy]) -> bool {
    let radicals = |cards: &[Policy]| cards.iter().filter(|&&p| p == Policy::Radical).count();
    hand.len() == chosen.len() && radicals(hand) == radicals(chosen)
}

/// Policies enacted onto the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTally {
    pub radical: u8,
    pub traditional: u8,
}

impl PolicyTally {
    /// Record an enactment and return the new count for that policy.
    pub fn enact(&mut self, policy: Policy) -> u8 {
        match policy {
            Policy::Radical => {
                self.radical += 1;
                self.radical
            }
            Policy::Traditional => {
                self.traditional += 1;
                self.traditional
            }
        }
    }

    /// Total cards on the board.
    #[must_use]
    pub fn total(&self) -> usize {
        self.radical as usize + self.traditional as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_same_cards_ignores_order() {
        let hand: PolicyHand = smallvec![Policy::Radical, Policy::Traditional, Policy::Radical];
        assert!(same_cards(&hand, &[Policy::Traditional, Policy::Radical, Policy::Radical]));
        assert!(!same_cards(&hand, &[Policy::Traditional, Policy::Traditional, Policy::Radical]));
        assert!(!same_cards(&hand, &[Policy::Radical, Policy::Radical]));
    }

    #[test]
    fn test_tally_enact() {
        let mut tally = PolicyTally::default();
        assert_eq!(tally.enact(Policy::Radical), 1);
        assert_eq!(tally.enact(Policy::Radical), 2);
        assert_eq!(tally.enact(Policy::Traditional), 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(serde_json::to_string(&Policy::Radical).unwrap(), "\"radical\"");
        let p: Policy = serde_json::from_str("\"traditional\"").unwrap();
        assert_eq!(p, Policy::Traditional);
    }
}
