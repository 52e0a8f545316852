// Presentation of decoding diagnostics

mod format;
mod messages;

// Re-export all public symbols
pub use format::*;
