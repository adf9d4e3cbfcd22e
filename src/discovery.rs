use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::SurfaceConfig;
use crate::error::{Result, SurfaceError};

/// Expand `root` into the ordered list of source files to summarize.
///
/// A file is returned as-is whatever its extension. Directories are walked
/// recursively in file-name order, keeping files with a recognized extension.
pub fn discover_sources(root: &Path, config: &SurfaceConfig) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(SurfaceError::PathNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let recognized = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| config.recognizes(ext))
            .unwrap_or(false);
        if recognized {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(SurfaceError::NoSourceFiles(root.to_path_buf()));
    }

    debug!("discovered {} source files under {}", files.len(), root.display());
    Ok(files)
}
