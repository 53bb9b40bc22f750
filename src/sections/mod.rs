//! Media list classification.
//!
//! This module turns categorized media lists into classified records:
//! - `parser` - the line state machine and the global flat-file loader
//! - `tracker` - cross-section collision tracking of registrable domains
//! - `types` - `Section`, `Category` and `ClassifiedUrl`

mod parser;
mod tracker;
mod types;

// Re-export public API
pub use parser::{load_global_file, parse_media_file, parse_media_list, ParsedMediaList};
pub use tracker::{Collision, CollisionTracker};
pub use types::{Category, ClassifiedUrl, Section};
