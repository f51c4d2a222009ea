//! Players and their secret roles.
//!
//! ## Player
//!
//! A seat at the table identified by its name. Names are case-sensitive and
//! unique within a game; equality and hashing only look at the name, so a
//! `Player::new("ada")` built by a frontend matches the seated player whose
//! role is known to the engine.
//!
//! ## Role
//!
//! Assigned once when the game leaves the lobby.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Secret role dealt to each player at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Liberal,
    Fascist,
    Hitler,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Liberal => "liberal",
            Role::Fascist => "fascist",
            Role::Hitler => "hitler",
        };
        f.write_str(name)
    }
}

/// A player seated at the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    role: Option<Role>,
}

impl Player {
    /// Create a player without a role.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
        }
    }

    /// Set the role up front (builder pattern).
    ///
    /// Used when seating a table whose roles are already known.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// The identity key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The secret role, once dealt.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn is_hitler(&self) -> bool {
        self.role == Some(Role::Hitler)
    }

    pub(crate) fn assign_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub(crate) fn clear_role(&mut self) {
        self.role = None;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
