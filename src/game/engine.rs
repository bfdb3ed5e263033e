use crate::error::{BoardError, DropError};

use super::{Board, Cell, PlayerId};

/// Where the game stands. Terminal variants are sticky: once reached, only
/// [`GameEngine::reset`] leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Result of a successful drop: where the piece landed and the status it left
/// the game in. This is the presentation layer's channel for rendering the new
/// piece and announcing the outcome, so it never has to recompute gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub row: usize,
    pub column: usize,
    pub status: GameStatus,
}

/// The four canonical line directions as (row step, column step): horizontal,
/// vertical, diagonal down-right, diagonal down-left. Scanning every cell as a
/// potential line start covers all lines without also walking the opposite
/// rays.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Turn order, gravity placement, and win/draw detection over one [`Board`].
///
/// Single-owner and single-threaded: every operation runs to completion, and
/// callers that share an engine across threads must add their own locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: [PlayerId; 2],
    current: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Start a fresh game on an empty `rows x cols` board. The first-seated
    /// player moves first.
    pub fn new(
        rows: usize,
        cols: usize,
        one: PlayerId,
        two: PlayerId,
    ) -> Result<Self, BoardError> {
        Ok(GameEngine {
            board: Board::new(rows, cols)?,
            players: [one, two],
            current: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On success the piece settles into the lowest empty cell, win detection
    /// runs for the mover (a move can only create a win for the player who
    /// just moved), and the turn passes to the other player unless the game
    /// ended. A win on the move that fills the board is reported as a win,
    /// not a draw. On any error nothing changes.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome, DropError> {
        if self.status.is_terminal() {
            return Err(DropError::GameAlreadyOver);
        }
        if column >= self.board.cols() {
            return Err(DropError::InvalidColumn {
                column,
                cols: self.board.cols(),
            });
        }
        let row = self
            .board
            .lowest_empty_row(column)
            .ok_or(DropError::ColumnFull { column })?;

        let mover = self.players[self.current];
        self.board
            .place(row, column, mover)
            .expect("lowest_empty_row returned an empty in-bounds cell");

        if has_four_in_a_row(&self.board, mover) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current = 1 - self.current;
        }

        Ok(MoveOutcome {
            row,
            column,
            status: self.status,
        })
    }

    /// Replace the players and board, returning to the initial state. The only
    /// way out of a terminal status.
    pub fn reset(&mut self, one: PlayerId, two: PlayerId) {
        // Dimensions were validated in `new`; a fresh board keeps the
        // never-cleared-cell invariant of the old instance intact.
        self.board = Board::empty(self.board.rows(), self.board.cols());
        self.players = [one, two];
        self.current = 0;
        self.status = GameStatus::InProgress;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player whose turn it is. After a terminal move this stays the
    /// player who made it, so it agrees with `GameStatus::Won`.
    pub fn current_player(&self) -> PlayerId {
        self.players[self.current]
    }

    /// Both players in seating order.
    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.cell(row, col)
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Non-full columns, in order. Empty once the game is over.
    pub fn open_columns(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}

/// Exhaustive four-in-a-row scan for one player: every cell is a candidate
/// line start, checked against each canonical direction, bailing on the first
/// out-of-bounds or non-matching cell. O(rows * cols) with at most 16 cell
/// inspections per start; simpler to get right than walking the eight rays
/// out of the landing cell, and cheap at these board sizes.
fn has_four_in_a_row(board: &Board, player: PlayerId) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for (dy, dx) in DIRECTIONS {
                if line_of_four(board, player, row, col, dy, dx) {
                    return true;
                }
            }
        }
    }
    false
}

fn line_of_four(
    board: &Board,
    player: PlayerId,
    row: usize,
    col: usize,
    dy: isize,
    dx: isize,
) -> bool {
    for step in 0..4 {
        let r = row as isize + dy * step;
        let c = col as isize + dx * step;
        if r < 0 || c < 0 || r >= board.rows() as isize || c >= board.cols() as isize {
            return false;
        }
        if board.cell(r as usize, c as usize) != Cell::Taken(player) {
            return false;
        }
    }
    true
}
