//! Serialized access to a single table.

use crate::sync::Mutex;

use super::Game;

/// A [`Game`] behind a mutex.
///
/// The engine itself is single-threaded; callers that reach one table from
/// several threads go through this wrapper so every operation runs to
/// completion before the next one starts.
///
/// # Example
///
/// ```
/// use bjtable::{Game, GameOptions, Player, SharedGame};
///
/// let game = Game::new(GameOptions::default(), vec![Player::new("p1", "Ann", 100)], 7);
/// let table = SharedGame::new(game);
/// table.with(|game| game.bet(0, 0, 10)).unwrap();
/// assert_eq!(table.with(|game| game.players()[0].money()), 90);
/// ```
pub struct SharedGame {
    game: Mutex<Game>,
}

impl SharedGame {
    /// Wraps a game.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self {
            game: Mutex::new(game),
        }
    }

    /// Runs `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.game.lock();
        f(&mut game)
    }

    /// Unwraps the game.
    #[must_use]
    pub fn into_inner(self) -> Game {
        self.game.into_inner()
    }
}
