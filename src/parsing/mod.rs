//! decoder for the perceptor messages of the soccer simulation server

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

mod builder;
pub mod cursor;
mod error;
mod extract;
pub mod numeric;
pub mod parser;

pub use error::*;
pub use parser::{decode_with_recovery, DecodeOptions, Decoded, Tag};

/// Read a capture file (or standard input, given "-") and return its
/// content as an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Decode one message with default options.
pub fn decode(content: &str) -> Decoded {
    decode_with(&DecodeOptions::default(), content)
}

/// Decode one message, logging a summary of what was found.
pub fn decode_with(options: &DecodeOptions, content: &str) -> Decoded {
    let result = decode_with_recovery(content, options);

    let n = result
        .state
        .len();
    debug!(
        "Found {} reading{}",
        n,
        if n == 1 { "" } else { "s" }
    );

    if !result
        .diagnostics
        .is_empty()
    {
        debug!("diagnostics: {}", result.diagnostics.len());
    }

    result
}
