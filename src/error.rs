use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised around the rendering core.
///
/// `Unreadable` and `Unparseable` only cost the file they name; the run carries
/// on with the remaining files. The rest end the run.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("'{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("no Kotlin files found in '{}'", .0.display())]
    NoSourceFiles(PathBuf),

    #[error("could not read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse '{}'", .0.display())]
    Unparseable(PathBuf),

    #[error("failed to encode the surface as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load the Kotlin grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
