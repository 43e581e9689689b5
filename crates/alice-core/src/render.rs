//! Pluggable text-rendering capability.
//!
//! The typewriter does not know what the surface does with markdown; it
//! only pipes each partial accumulator through a [`Renderer`] before the
//! result lands in the log. The TUI ships plain text, other surfaces can
//! plug in a real markdown-to-markup pass.

/// Turn raw reply text into whatever markup the surface renders.
pub trait Renderer: Send + Sync {
    fn render(&self, text: &str) -> String;
}

/// Identity renderer: the text is shown exactly as the agent sent it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainText;

impl Renderer for PlainText {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_identity() {
        assert_eq!(PlainText.render(""), "");
        assert_eq!(PlainText.render("**bold**"), "**bold**");
    }
}
