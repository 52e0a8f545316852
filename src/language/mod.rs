// Types representing what the simulated robot perceives in one cycle

mod error;
mod geometry;
mod state;
mod types;

// Re-export all public symbols
pub use error::*;
pub use geometry::*;
pub use state::*;
pub use types::*;
