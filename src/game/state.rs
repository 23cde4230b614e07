use tracing::{debug, info};

use super::{Board, Cell, Player, HEIGHT, WIDTH};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Where a dropped piece came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

/// Result of a single drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Piece placed, turn passes to the other player.
    Continue(Placement),
    /// Piece placed and completed a run for `player`.
    Win { player: Player, placement: Placement },
    /// Piece placed in the last empty cell without a win.
    Draw(Placement),
    /// Column had no room; nothing changed.
    ColumnFull,
}

impl MoveOutcome {
    pub fn placement(&self) -> Option<Placement> {
        match *self {
            MoveOutcome::Continue(p) | MoveOutcome::Draw(p) => Some(p),
            MoveOutcome::Win { placement, .. } => Some(placement),
            MoveOutcome::ColumnFull => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    move_count: usize,
}

impl GameState {
    /// Empty `width` x `height` board with player 1 to move
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero; see [`GameState::try_new`].
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_board(Board::new(width, height))
    }

    /// Like [`GameState::new`], but reports zero dimensions as an error.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BoardError> {
        Board::try_new(width, height).map(Self::from_board)
    }

    fn from_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One,
            outcome: None,
            move_count: 0,
        }
    }

    /// Standard 7 x 6 game
    pub fn initial() -> Self {
        Self::new(WIDTH, HEIGHT)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.get(row, column)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new state alongside the outcome. `self`
    /// is left untouched.
    pub fn drop_piece(&self, column: usize) -> Result<(GameState, MoveOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.drop_piece_mut(column)?;
        Ok((next, outcome))
    }

    /// Apply a move in place.
    ///
    /// Only the mover is checked for a win: a single placement adds one piece
    /// of the mover's colour and cannot complete a run for the opponent, and
    /// the opponent cannot already hold a run because the game would have
    /// ended on their move.
    pub fn drop_piece_mut(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let Some(row) = self.board.find_landing_row(column)? else {
            debug!(column, "column full");
            return Ok(MoveOutcome::ColumnFull);
        };

        let player = self.current_player;
        self.board.place(row, column, player.to_cell());
        self.move_count += 1;
        debug!(row, column, player = player.number(), "piece placed");

        let placement = Placement { row, column };
        if self.board.check_for_win(player) {
            self.outcome = Some(GameOutcome::Winner(player));
            info!(player = player.number(), moves = self.move_count, "game won");
            Ok(MoveOutcome::Win { player, placement })
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            info!(moves = self.move_count, "game drawn");
            Ok(MoveOutcome::Draw(placement))
        } else {
            self.current_player = player.other();
            Ok(MoveOutcome::Continue(placement))
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
