//! Seating order and the presidential rotation.
//!
//! `TurnOrder` is the list of alive players in seating order plus a cursor
//! on the seat that holds the regular presidency. The cursor only moves when
//! the presidency passes on normally or when a kill re-anchors it. A special
//! election installs a president without touching it, so the rotation
//! resumes from the seat that called the special election.

use im::Vector;

use crate::core::Player;

/// Alive players in seating order with the presidential cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnOrder {
    seats: Vector<Player>,
    cursor: usize,
}

impl TurnOrder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat `seats` in order with the cursor on `anchor`.
    ///
    /// The cursor falls back to the first seat if `anchor` is not seated.
    pub fn anchored(seats: impl IntoIterator<Item = Player>, anchor: &Player) -> Self {
        let mut order = Self {
            seats: seats.into_iter().collect(),
            cursor: 0,
        };
        order.anchor(anchor);
        order
    }

    /// Put the cursor on `anchor`. Returns false if `anchor` is not seated.
    pub fn anchor(&mut self, anchor: &Player) -> bool {
        match self.position(anchor) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Move the cursor one seat on and return who sits there.
    pub fn advance(&mut self) -> Option<&Player> {
        if self.seats.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.seats.len();
        self.seats.get(self.cursor)
    }

    /// The player under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.seats.get(self.cursor)
    }

    /// Add a player to the end of the table.
    pub fn seat(&mut self, player: Player) {
        self.seats.push_back(player);
    }

    /// Remove `player` from the table and re-anchor the cursor on `anchor`.
    ///
    /// Returns the removed seat, with its role.
    pub fn remove(&mut self, player: &Player, anchor: &Player) -> Option<Player> {
        let index = self.position(player)?;
        let removed = self.seats.remove(index);

        if !self.anchor(anchor) && self.cursor >= self.seats.len() {
            self.cursor = 0;
        }
        Some(removed)
    }

    /// Replace the seating, for example after the pre-game shuffle.
    pub fn reseat(&mut self, seats: impl IntoIterator<Item = Player>) {
        self.seats = seats.into_iter().collect();
        self.cursor = 0;
    }

    #[must_use]
    pub fn position(&self, player: &Player) -> Option<usize> {
        self.seats.iter().position(|p| p == player)
    }

    #[must_use]
    pub fn contains(&self, player: &Player) -> bool {
        self.seats.contains(player)
    }

    /// The seated copy of `player`, which carries the role.
    #[must_use]
    pub fn get(&self, player: &Player) -> Option<&Player> {
        self.seats.iter().find(|p| *p == player)
    }

    /// Players in seating order.
    pub fn seats(&self) -> impl Iterator<Item = &Player> + '_ {
        self.seats.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
