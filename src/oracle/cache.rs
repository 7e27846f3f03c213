//! Memoized pairwise win-probability lookups.
//!
//! The expensive deterministic step is loading a matrix, not looking up a
//! pair, so memoization keys on the match format: each format's matrix is
//! read from its source at most once for the lifetime of a
//! [`ProbabilityCache`]. Per-pair queries are then plain map lookups.

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use tracing::info;

use crate::error::{DataError, Result};

use super::loader::{self, WinMatrix};
use super::team::Team;

/// Match format selector. Win likelihood differs between a single map and a
/// best-of-three series, so each format carries its own matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchFormat {
    Bo1,
    Bo3,
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchFormat::Bo1 => f.write_str("BO1"),
            MatchFormat::Bo3 => f.write_str("BO3"),
        }
    }
}

/// Backing store a [`ProbabilityCache`] pulls matrices from.
///
/// The production implementation reads JSON files; tests substitute an
/// in-memory source with a read counter.
pub trait MatrixSource {
    /// Produce the full win matrix for the given format.
    fn load(&self, format: MatchFormat) -> Result<WinMatrix>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// File-backed matrix source: one JSON path per format.
#[derive(Debug, Clone)]
pub struct FileMatrixSource {
    bo1_path: PathBuf,
    bo3_path: PathBuf,
}

impl FileMatrixSource {
    pub fn new(bo1_path: impl Into<PathBuf>, bo3_path: impl Into<PathBuf>) -> Self {
        FileMatrixSource {
            bo1_path: bo1_path.into(),
            bo3_path: bo3_path.into(),
        }
    }
}

impl MatrixSource for FileMatrixSource {
    fn load(&self, format: MatchFormat) -> Result<WinMatrix> {
        let path = match format {
            MatchFormat::Bo1 => &self.bo1_path,
            MatchFormat::Bo3 => &self.bo3_path,
        };
        loader::load_win_matrix(path)
    }

    fn name(&self) -> &str {
        "json-files"
    }
}

/// Memoizing win-probability accessor over a [`MatrixSource`].
///
/// Owned by the caller — construct once, pass by reference — rather than
/// living in process-global state, so lifetime and test isolation stay
/// explicit.
pub struct ProbabilityCache<S: MatrixSource> {
    source: S,
    bo1: OnceCell<WinMatrix>,
    bo3: OnceCell<WinMatrix>,
}

impl<S: MatrixSource> ProbabilityCache<S> {
    pub fn new(source: S) -> Self {
        ProbabilityCache {
            source,
            bo1: OnceCell::new(),
            bo3: OnceCell::new(),
        }
    }

    /// Probability that `a` beats `b` under the given match format.
    ///
    /// A team name absent from the loaded matrix is reported as
    /// [`DataError::MissingData`] naming that team; no raw map-lookup failure
    /// escapes this accessor. The reverse probability is never derived from
    /// the forward one — both directions must exist in the source data.
    pub fn win_probability(&self, a: &Team, b: &Team, format: MatchFormat) -> Result<f64> {
        let matrix = self.matrix(format)?;
        let row = matrix.get(a.name()).ok_or_else(|| DataError::MissingData {
            team: a.name().to_string(),
        })?;
        let p = row.get(b.name()).ok_or_else(|| DataError::MissingData {
            team: b.name().to_string(),
        })?;
        Ok(*p)
    }

    /// The loaded matrix for `format`, reading from the source on first use.
    pub fn matrix(&self, format: MatchFormat) -> Result<&WinMatrix> {
        let cell = match format {
            MatchFormat::Bo1 => &self.bo1,
            MatchFormat::Bo3 => &self.bo3,
        };
        cell.get_or_try_init(|| {
            info!("Loading {format} win matrix from source '{}'", self.source.name());
            self.source.load(format)
        })
    }
}
