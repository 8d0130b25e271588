//! Derived document attributes.
//!
//! Everything here is recomputed at resolution time from the body text;
//! nothing is ever trusted from a stored value.

pub mod excerpt;
pub mod headings;
pub mod reading;
pub mod toc;

pub use excerpt::derive_excerpt;
pub use headings::{Heading, extract_headings};
pub use reading::reading_time_minutes;
pub use toc::{TocNode, build_toc};
