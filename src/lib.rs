pub mod language;
pub mod parsing;
mod regex;
