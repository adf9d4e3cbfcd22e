use crate::renderer::accumulator::OutputAccumulator;

/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented signature lines
    #[default]
    Text,
    /// Pruned declaration tree as JSON
    Json,
}

/// Core rendering trait for admitted declarations.
///
/// Implementations append their lines to `out`; visibility has already been
/// decided by the caller.
pub trait Render {
    fn render(&self, context: &RenderContext, out: &mut OutputAccumulator);
}
