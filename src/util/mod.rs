//! Small presentation helpers shared across pages.

pub mod dark_mode;
pub mod format;
