//! Renderers for colourizing decoded readings

use owo_colors::OwoColorize;

/// Kinds of content in a summary that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Heading,
    Label,
    Numeric,
    Keyword,
    Text,
    Warning,
}

/// Trait for different rendering backends (the no-op no-markup one, and ANSI
/// escapes for terminal colouring)
pub trait Render {
    /// Render content with the specified type/style
    fn render(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn render(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}

/// Embellish fragments with ANSI escapes for terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn render(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Heading => content
                .bright_white()
                .bold()
                .to_string(),
            Syntax::Label => content // #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(173, 127, 168))
                .bold()
                .to_string(),
            Syntax::Numeric => content // #729fcf (light blue)
                .color(owo_colors::Rgb(114, 159, 207))
                .to_string(),
            Syntax::Keyword => content // #3465a4 (blue) bold
                .color(owo_colors::Rgb(52, 101, 164))
                .bold()
                .to_string(),
            Syntax::Text => content // #4e9a06 (green)
                .color(owo_colors::Rgb(78, 154, 6))
                .to_string(),
            Syntax::Warning => content
                .bright_yellow()
                .to_string(),
        }
    }
}
