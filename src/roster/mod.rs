//! Who is at the table and who is next in line for the presidency.
//!
//! ## Key Types
//!
//! - `TurnOrder`: alive players in seating order with the presidential cursor
//! - `deal_roles`: the secret role deal run when the game leaves the lobby

pub mod lobby;
pub mod turn_order;

pub use lobby::{deal_roles, fascist_count, is_supported, liberal_count, MAX_PLAYERS, MIN_PLAYERS};
pub use turn_order::TurnOrder;
