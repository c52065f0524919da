// Types representing Brackish markup and its surrounding machinery

pub mod diagnostics;
pub mod fonts;
pub mod registry;
mod types;

// Re-export all public symbols
pub use types::*;
