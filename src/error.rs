use thiserror::Error;

/// Failures surfaced by the data-loading and probability-lookup layers.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("data file not found: {path}")]
    NotFound { path: String },

    #[error("malformed data file {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("win matrix has no entry for team: {team}")]
    MissingData { team: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for DataError
pub type Result<T> = std::result::Result<T, DataError>;
