//! Terminal output formatting and utilities.
//!
//! Consistent output formatting across all commands, including colors and
//! error messages.

pub mod colors;
pub mod errors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.colors.dim(message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    /// Print text exactly as given
    pub fn raw(&self, text: &str) {
        print!("{}", text);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
