//! Policy deck: cards, draw pile, discard pile and the reshuffle rule.
//!
//! ## Key Types
//!
//! - `Policy`: a liberal or fascist policy card
//! - `Hand`: the top cards shown to the president or chancellor
//! - `PolicyDeck`: draw and discard piles

pub mod pile;
pub mod policy;

pub use pile::PolicyDeck;
pub use policy::{Hand, Policy};
