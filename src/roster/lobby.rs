//! Table size limits and the secret role deal.

use crate::core::{Player, Role, ShuffleSource};

/// Smallest table the rules support.
pub const MIN_PLAYERS: usize = 5;

/// Largest table the rules support.
pub const MAX_PLAYERS: usize = 10;

/// Liberal players dealt for a table of `player_count`.
///
/// Returns `None` for unsupported table sizes.
#[must_use]
pub const fn liberal_count(player_count: usize) -> Option<usize> {
    match player_count {
        5 => Some(3),
        6 | 7 => Some(4),
        8 | 9 => Some(5),
        10 => Some(6),
        _ => None,
    }
}

/// Fascist players, Hitler excluded, dealt for a table of `player_count`.
#[must_use]
pub const fn fascist_count(player_count: usize) -> Option<usize> {
    match liberal_count(player_count) {
        Some(liberals) => Some(player_count - liberals - 1),
        None => None,
    }
}

/// Whether a game can be played with `player_count` seats.
#[must_use]
pub const fn is_supported(player_count: usize) -> bool {
    liberal_count(player_count).is_some()
}

/// Shuffle `players` and deal the roles.
///
/// After the shuffle the first player is Hitler, the next `liberals` are
/// liberals and everyone else is a fascist. The slice is left in deal order.
pub fn deal_roles<R: ShuffleSource>(players: &mut [Player], liberals: usize, rng: &mut R) {
    rng.shuffle(players);

    for (index, player) in players.iter_mut().enumerate() {
        let role = match index {
            0 => Role::Hitler,
            i if i <= liberals => Role::Liberal,
            _ => Role::Fascist,
        };
        player.assign_role(role);
    }
}
