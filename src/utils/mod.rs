pub(crate) mod fs;
pub(crate) mod terminal;

// Public API - utilities used by commands
pub use fs::shorten_path;
pub use terminal::{colors_enabled, set_terminal_title, set_terminal_title_and_flush, Palette};
