//! Configuration error types.

/// Errors that can occur when loading, saving, parsing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// Tile resolution outside the supported range.
    #[error("tile_dim {value} is outside the supported range 2..=255")]
    TileDimOutOfRange {
        /// The rejected value.
        value: u32,
    },

    /// Clipmap level count outside the supported range.
    #[error("num_levels {value} is outside the supported range 1..=12")]
    LevelCountOutOfRange {
        /// The rejected value.
        value: u32,
    },
}
