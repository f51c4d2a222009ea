//! Draw and discard piles.
//!
//! The draw pile is ordered: index 0 is the bottom, the last element is the
//! top. Hands are never moved out of the pile. The president's and
//! chancellor's hands are the top cards of the draw pile, and a discard
//! takes one matching card out of that top region, so whatever is left of a
//! hand is what the next reader of the top sees.

use im::Vector;

use crate::core::{ActionError, RulesConfig, ShuffleSource};

use super::policy::{Hand, Policy};

/// Policy draw pile plus discard pile.
///
/// Uses `im::Vector` so cloning a game snapshot is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyDeck {
    draw: Vector<Policy>,
    discard: Vector<Policy>,
}

impl PolicyDeck {
    /// Build and shuffle a full deck for a new game.
    pub fn fresh<R: ShuffleSource>(config: &RulesConfig, rng: &mut R) -> Self {
        let mut cards: Vec<Policy> = std::iter::repeat(Policy::Liberal)
            .take(config.liberal_policies)
            .chain(std::iter::repeat(Policy::Fascist).take(config.fascist_policies))
            .collect();
        rng.shuffle(&mut cards);

        Self {
            draw: Vector::from(cards),
            discard: Vector::new(),
        }
    }

    /// Build a deck from explicit piles, bottom first.
    pub fn from_piles(
        draw: impl IntoIterator<Item = Policy>,
        discard: impl IntoIterator<Item = Policy>,
    ) -> Self {
        Self {
            draw: draw.into_iter().collect(),
            discard: discard.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards of one kind across both piles.
    #[must_use]
    pub fn count(&self, policy: Policy) -> usize {
        self.draw
            .iter()
            .chain(self.discard.iter())
            .filter(|&&p| p == policy)
            .count()
    }

    /// Make sure `needed` cards can be drawn.
    ///
    /// If the draw pile is short, the discard pile is put back and the whole
    /// draw pile is reshuffled. Returns true if a reshuffle happened.
    pub fn ensure_drawable<R: ShuffleSource>(&mut self, needed: usize, rng: &mut R) -> bool {
        if self.draw.len() >= needed {
            return false;
        }

        let mut cards: Vec<Policy> = self
            .draw
            .iter()
            .chain(self.discard.iter())
            .copied()
            .collect();
        rng.shuffle(&mut cards);

        self.draw = Vector::from(cards);
        self.discard.clear();
        true
    }

    /// The top `n` cards, bottom to top. Fewer if the pile is short.
    #[must_use]
    pub fn top(&self, n: usize) -> Hand {
        let start = self.draw.len().saturating_sub(n);
        self.draw.iter().skip(start).copied().collect()
    }

    /// Discard one `policy` from the top `n` cards.
    ///
    /// The other cards of the region keep their order on top of the pile.
    pub fn discard_from_top(&mut self, n: usize, policy: Policy) -> Result<(), ActionError> {
        let start = self.draw.len().saturating_sub(n);
        let index = self
            .draw
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, &p)| p == policy)
            .map(|(i, _)| i)
            .ok_or(ActionError::NotInHand(policy))?;

        let card = self.draw.remove(index);
        self.discard.push_back(card);
        Ok(())
    }

    /// Move the top `n` cards to the discard pile. Returns how many moved.
    pub fn discard_top(&mut self, n: usize) -> usize {
        let mut moved = 0;
        while moved < n {
            match self.draw.pop_back() {
                Some(card) => {
                    self.discard.push_back(card);
                    moved += 1;
                }
                None => break,
            }
        }
        moved
    }

    /// Take the top card off the deck for good.
    pub fn pop_top(&mut self) -> Option<Policy> {
        self.draw.pop_back()
    }
}
