//! Draw and discard piles.
//!
//! The top of the draw pile is the front of the vector. Cards only ever move
//! draw → hand → (discard | board), and discard → draw on a reshuffle, so the
//! sum of both piles plus the enacted board stays constant for a game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::policy::{same_cards, Policy, PolicyHand};
use crate::core::GameRng;

/// Cards removed from the draw pile, with a note of whether a reshuffle
/// happened first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    pub cards: PolicyHand,
    pub reshuffled: bool,
}

/// The policy deck of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw: Vector<Policy>,
    discard: Vector<Policy>,
}

impl Deck {
    /// A freshly shuffled deck.
    #[must_use]
    pub fn new(radical: usize, traditional: usize, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Policy> = std::iter::repeat(Policy::Radical)
            .take(radical)
            .chain(std::iter::repeat(Policy::Traditional).take(traditional))
            .collect();
        rng.shuffle(&mut cards);
        Self::stacked(cards)
    }

    /// A deck in exactly the given order, top first.
    #[must_use]
    pub fn stacked(order: impl IntoIterator<Item = Policy>) -> Self {
        Self {
            draw: order.into_iter().collect(),
            discard: Vector::new(),
        }
    }

    /// Cards in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards in both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    /// True when both piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw pile contents, top first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Policy> {
        self.draw.iter()
    }

    /// Fold the discard pile back into the draw pile and shuffle, but only
    /// when fewer than `n` cards remain to draw. Returns whether it happened.
    pub fn reshuffle_if_needed(&mut self, n: usize, rng: &mut GameRng) -> bool {
        if self.draw.len() >= n {
            return false;
        }
        let mut cards: Vec<Policy> = self.draw.iter().chain(self.discard.iter()).copied().collect();
        rng.shuffle(&mut cards);
        self.draw = cards.into_iter().collect();
        self.discard.clear();
        tracing::debug!(draw = self.draw.len(), "deck reshuffled");
        true
    }

    /// Remove the top `n` cards, reshuffling first if the pile is short.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Draw {
        let reshuffled = self.reshuffle_if_needed(n, rng);
        debug_assert!(self.draw.len() >= n, "deck exhausted: {} < {}", self.draw.len(), n);
        let mut cards = PolicyHand::new();
        for _ in 0..n {
            match self.draw.pop_front() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        Draw { cards, reshuffled }
    }

    /// Look at the top `n` cards without removing them, reshuffling first if
    /// the pile is short so the view matches the next draw.
    pub fn peek(&mut self, n: usize, rng: &mut GameRng) -> Draw {
        let reshuffled = self.reshuffle_if_needed(n, rng);
        Draw {
            cards: self.draw.iter().take(n).copied().collect(),
            reshuffled,
        }
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, policy: Policy) {
        self.discard.push_back(policy);
    }

    /// Reorder the draw pile. The new order must hold the same cards.
    ///
    /// Returns false and leaves the pile alone otherwise.
    pub fn arrange(&mut self, order: &[Policy]) -> bool {
        let current: Vec<Policy> = self.draw.iter().copied().collect();
        if !same_cards(&current, order) {
            return false;
        }
        self.draw = order.iter().copied().collect();
        true
    }

    /// Move `top` to the top of the draw pile, in that order. If the draw
    /// pile does not hold those cards, the discard pile is folded in and
    /// shuffled first.
    ///
    /// Returns false and changes nothing if the cards are not available.
    pub fn put_on_top(&mut self, top: &[Policy], rng: &mut GameRng) -> bool {
        let draw: Vec<Policy> = self.draw.iter().copied().collect();
        if let Some(rest) = without(draw, top) {
            self.draw = top.iter().chain(rest.iter()).copied().collect();
            return true;
        }
        let all: Vec<Policy> = self.draw.iter().chain(self.discard.iter()).copied().collect();
        let Some(mut rest) = without(all, top) else {
            return false;
        };
        rng.shuffle(&mut rest);
        self.discard.clear();
        self.draw = top.iter().chain(rest.iter()).copied().collect();
        true
    }
}

/// `pool` minus one copy of each card in `cards`, if all are present.
fn without(mut pool: Vec<Policy>, cards: &[Policy]) -> Option<Vec<Policy>> {
    for card in cards {
        let i = pool.iter().position(|c| c == card)?;
        pool.remove(i);
    }
    Some(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(deck: &Deck, policy: Policy) -> usize {
        deck.draw_pile().filter(|&&p| p == policy).count()
    }

    #[test]
    fn test_new_deck_composition() {
        let mut rng = GameRng::new(42);
        let deck = Deck::new(11, 6, &mut rng);

        assert_eq!(deck.draw_len(), 17);
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(count(&deck, Policy::Radical), 11);
        assert_eq!(count(&deck, Policy::Traditional), 6);
    }

    #[test]
    fn test_draw_from_top() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::stacked([
            Policy::Traditional,
            Policy::Radical,
            Policy::Radical,
            Policy::Traditional,
        ]);

        let drawn = deck.draw(3, &mut rng);
        assert!(!drawn.reshuffled);
        assert_eq!(
            drawn.cards.as_slice(),
            &[Policy::Traditional, Policy::Radical, Policy::Radical]
        );
        assert_eq!(deck.draw_len(), 1);
    }

    #[test]
    fn test_reshuffle_only_when_short() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::stacked([Policy::Radical, Policy::Radical, Policy::Radical]);
        deck.discard(Policy::Traditional);

        assert!(!deck.reshuffle_if_needed(3, &mut rng));
        assert_eq!(deck.discard_len(), 1);

        let _ = deck.draw(2, &mut rng);
        assert!(deck.reshuffle_if_needed(3, &mut rng));
        assert_eq!(deck.draw_len(), 2);
        assert_eq!(deck.discard_len(), 0);
    }

    #[test]
    fn test_draw_reshuffles_and_conserves_cards() {
        let mut rng = GameRng::new(5);
        let mut deck = Deck::new(11, 6, &mut rng);

        let mut on_board = 0;
        for _ in 0..10 {
            let drawn = deck.draw(3, &mut rng);
            assert_eq!(drawn.cards.len(), 3);
            deck.discard(drawn.cards[0]);
            deck.discard(drawn.cards[1]);
            on_board += 1;
            assert_eq!(deck.len() + on_board, 17);
        }
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new(11, 6, &mut rng);

        let top: Vec<Policy> = deck.draw_pile().take(3).copied().collect();
        let peeked = deck.peek(3, &mut rng);
        assert_eq!(peeked.cards.as_slice(), top.as_slice());
        assert_eq!(deck.draw_len(), 17);

        let drawn = deck.draw(3, &mut rng);
        assert_eq!(drawn.cards, peeked.cards);
    }

    #[test]
    fn test_arrange_requires_same_cards() {
        let mut deck = Deck::stacked([Policy::Radical, Policy::Traditional]);

        assert!(!deck.arrange(&[Policy::Radical, Policy::Radical]));
        assert!(deck.arrange(&[Policy::Traditional, Policy::Radical]));
        assert_eq!(deck.draw_pile().next(), Some(&Policy::Traditional));
    }

    #[test]
    fn test_put_on_top() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::stacked([Policy::Traditional, Policy::Radical, Policy::Radical]);

        assert!(deck.put_on_top(&[Policy::Radical, Policy::Radical], &mut rng));
        let order: Vec<Policy> = deck.draw_pile().copied().collect();
        assert_eq!(order, vec![Policy::Radical, Policy::Radical, Policy::Traditional]);

        assert!(!deck.put_on_top(&[Policy::Traditional, Policy::Traditional], &mut rng));
        assert_eq!(deck.draw_len(), 3);
    }

    #[test]
    fn test_put_on_top_folds_in_discards() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::stacked([Policy::Radical]);
        deck.discard(Policy::Traditional);
        deck.discard(Policy::Traditional);
        deck.discard(Policy::Radical);

        assert!(deck.put_on_top(&[Policy::Traditional, Policy::Radical, Policy::Traditional], &mut rng));
        assert_eq!(deck.draw_len(), 4);
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(deck.draw_pile().next(), Some(&Policy::Traditional));
    }
}
