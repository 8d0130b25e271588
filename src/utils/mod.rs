//! Utility modules shared across the pipeline.

pub mod date;
pub mod html;
pub mod plural;
pub mod slug;

pub use plural::plural_count;
