//! Error types for splice-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Placeholder path used by the pure text functions until the caller
/// re-tags the error with [`Error::at`].
pub const CONTENT_PATH: &str = "<content>";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not find block {name} in {path}")]
    NotFound { name: String, path: PathBuf },

    #[error("Could not find block boundaries in {path} ({})", describe_boundaries(.start, .end))]
    BoundaryNotFound {
        path: PathBuf,
        start: Option<usize>,
        end: Option<usize>,
    },

    #[error("Boundaries {start}..{end} do not fit text of {len} bytes")]
    InvalidBoundaries { start: usize, end: usize, len: usize },

    #[error("Invalid marker pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Attach the file the failing text came from.
    pub fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::NotFound { name, .. } => Self::NotFound {
                name,
                path: path.into(),
            },
            Self::BoundaryNotFound { start, end, .. } => Self::BoundaryNotFound {
                path: path.into(),
                start,
                end,
            },
            other => other,
        }
    }
}

fn describe_boundaries(start: &Option<usize>, end: &Option<usize>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            format!("end marker at byte {end} precedes start marker at byte {start}")
        }
        _ => format!(
            "start found: {}, end found: {}",
            start.is_some(),
            end.is_some()
        ),
    }
}
