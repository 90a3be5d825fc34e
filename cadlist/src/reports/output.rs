//! Where rendered reports end up.

/// Sink for report text.
pub trait Output {
    /// Emit text verbatim, followed by a newline.
    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes everything to stdout, which is what gets pasted into a makefile.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }
}
