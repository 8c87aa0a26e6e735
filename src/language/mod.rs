// Types representing legal forms and the data overlaid on them

mod error;
mod path;
mod types;

// Re-export all public symbols
pub use error::*;
pub use path::*;
pub use types::*;
