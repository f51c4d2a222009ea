//! Stage set, executive power table and win conditions.
//!
//! These are pure lookups. The game module calls into them but they never
//! touch game state.

pub mod executive;
pub mod stage;
pub mod win;

pub use executive::ExecutiveAction;
pub use stage::Stage;
pub use win::{after_enactment, hitler_elected, Team, Verdict};
