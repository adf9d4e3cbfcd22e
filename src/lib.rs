//! # ktsurface
//!
//! Summarizes the public API surface of Kotlin sources. Each file is parsed
//! into a forest of declarations, everything outside the public surface is
//! dropped, and the remaining declarations are rendered as indented
//! signature lines:
//!
//! ```text
//! class Test {
//!     fun publicFunction()
//! }
//! fun Function()
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod renderer;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub use config::SurfaceConfig;
pub use discovery::discover_sources;
pub use error::{Result, SurfaceError};
pub use parser::*;
pub use renderer::*;

/// Result of summarizing one path argument.
#[derive(Debug, Default)]
pub struct Summary {
    /// Rendered output, file blocks concatenated in discovery order
    pub output: String,
    pub rendered: Vec<PathBuf>,
    /// Files that could not be read or parsed
    pub skipped: Vec<PathBuf>,
}

pub struct Summarizer {
    parser: KotlinParser,
    config: SurfaceConfig,
}

impl Summarizer {
    pub fn new(config: SurfaceConfig) -> Result<Self> {
        Ok(Self {
            parser: KotlinParser::new()?,
            config,
        })
    }

    /// Render the public surface of one file's text.
    pub fn summarize_source(&mut self, path: &Path, source: &str) -> Result<String> {
        let declarations = self.parser.parse_source(path, source)?;
        Ok(ParsedRenderer.render(&declarations))
    }

    /// Pruned declaration tree of one file's text.
    pub fn surface_of_source(&mut self, path: &Path, source: &str) -> Result<FileSurface> {
        let declarations = self.parser.parse_source(path, source)?;
        Ok(FileSurface {
            path: path.display().to_string(),
            declarations: public_surface(&declarations, true),
        })
    }

    /// Summarize a file or directory.
    ///
    /// Files that fail to read or parse are logged and skipped; output of
    /// the other files is unaffected.
    pub fn run(&mut self, root: &Path) -> Result<Summary> {
        let files = discover_sources(root, &self.config)?;
        let mut summary = Summary::default();
        let mut surfaces = Vec::new();

        for file in files {
            match self.process_file(&file) {
                Ok(FileOutput::Text(text)) => summary.output.push_str(&text),
                Ok(FileOutput::Surface(surface)) => surfaces.push(surface),
                Err(err) => {
                    warn!("skipping file: {}", err);
                    summary.skipped.push(file);
                    continue;
                }
            }
            summary.rendered.push(file);
        }

        if self.config.format == OutputFormat::Json {
            summary.output = serde_json::to_string_pretty(&surfaces)?;
            summary.output.push('\n');
        }

        info!(
            "summarized {} files, skipped {}",
            summary.rendered.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }

    fn process_file(&mut self, path: &Path) -> Result<FileOutput> {
        let source = fs::read_to_string(path).map_err(|source| SurfaceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        match self.config.format {
            OutputFormat::Text => Ok(FileOutput::Text(self.summarize_source(path, &source)?)),
            OutputFormat::Json => Ok(FileOutput::Surface(self.surface_of_source(path, &source)?)),
        }
    }
}

enum FileOutput {
    Text(String),
    Surface(FileSurface),
}

/// Render a single Kotlin source string with default settings.
pub fn summarize_str(source: &str) -> Result<String> {
    Summarizer::new(SurfaceConfig::default())?.summarize_source(Path::new("<input>"), source)
}
