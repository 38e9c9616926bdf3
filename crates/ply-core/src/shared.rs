//! A cloneable game handle for callers on several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::InvalidMove;
use crate::game::{Game, GameStatus};
use crate::movegen::MoveSet;
use crate::position::Position;

/// Shared access to one [`Game`].
///
/// Every call holds the game's lock for its whole duration, so no caller can
/// observe the game between two steps of another caller's operation.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> SharedGame {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.inner.lock();
        f(&mut game)
    }

    /// Return a copy of the current game state.
    pub fn snapshot(&self) -> Game {
        self.inner.lock().clone()
    }

    pub fn turn(&self) -> Color {
        self.inner.lock().turn()
    }

    pub fn valid_moves(&self, start: Position) -> MoveSet {
        self.inner.lock().valid_moves(start)
    }

    /// See [`Game::make_move`].
    pub fn make_move(&self, mv: Move) -> Result<(), InvalidMove> {
        self.inner.lock().make_move(mv)
    }

    pub fn set_board(&self, board: Board) {
        self.inner.lock().set_board(board);
    }

    pub fn status(&self) -> GameStatus {
        self.inner.lock().status()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
