use crate::renderer::components::IndentationHelper;
use crate::renderer::traits::RenderContext;

/// Append-only sink of rendered lines, kept in emission order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OutputAccumulator {
    lines: Vec<String>,
}

impl OutputAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` indented for the context's depth.
    pub fn push_line(&mut self, context: &RenderContext, text: &str) {
        let mut line = IndentationHelper::indent_from_context(context);
        line.push_str(text);
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every line followed by a line break.
    pub fn finish(self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}
