use std::path::PathBuf;

/// Errors reported by the game engine and the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {col} is out of range")]
    InvalidColumn { col: usize },

    #[error("column {col} is full")]
    ColumnFull { col: usize },

    #[error("the game is over")]
    GameOver,

    #[error("there is no move to undo")]
    NothingToUndo,

    #[error("no legal move: the board is full")]
    NoLegalMove,
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
