//! Lumen Scene - Procedurally authored geometry
//!
//! Provides the built-in reference scene (a boxed room holding two blocks)
//! and the named colors and gloss levels it is painted with.

pub mod palette;
pub mod reference;

pub use palette::Gloss;
pub use reference::{load_reference_scene, REFERENCE_TRIANGLE_COUNT};
