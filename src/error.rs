use std::path::PathBuf;

/// Errors from board construction and direct cell placement.
///
/// `OutOfBounds` and `CellOccupied` are defensive checks on [`Board::place`];
/// they are not reachable through the normal `drop_piece` path, which resolves
/// the target cell via `lowest_empty_row` first.
///
/// [`Board::place`]: crate::game::Board::place
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 4x4, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// Errors from attempting a move. None of these change any game state; each is
/// a rejected action the caller may surface or ignore.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("game is already over")]
    GameAlreadyOver,

    #[error("column {column} is outside 0..{cols}")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions { rows: 3, cols: 7 };
        assert_eq!(err.to_string(), "board must be at least 4x4, got 3x7");
    }

    #[test]
    fn test_drop_error_display() {
        let err = DropError::InvalidColumn { column: 9, cols: 7 };
        assert_eq!(err.to_string(), "column 9 is outside 0..7");

        let err = DropError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 4"
        );
    }
}
