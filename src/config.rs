use crate::renderer::OutputFormat;

pub const DEFAULT_EXTENSIONS: &[&str] = &["kt", "kts"];

/// Run-wide settings assembled from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub format: OutputFormat,
    /// Extensions (without the dot) picked up when walking a directory
    pub extensions: Vec<String>,
}

impl SurfaceConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the recognized extensions; an empty list keeps the defaults.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|ext| ext.into().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }

    pub fn recognizes(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}
