//! Terminal output for the CLI.
//!
//! Section framing on stdout is plain text so it can be piped and diffed;
//! status messages on stderr go through [`Theme`].

pub mod sections;
pub mod theme;

pub use sections::{SectionWriter, write_section};
pub use theme::{THEME, Theme};
