//! Pure transforms from the Notion model to client-facing values and text.
//!
//! Nothing in here performs I/O or fails; every function is total.

pub mod block_renderer;
pub mod properties;

pub use block_renderer::{render_block, render_blocks};
pub use properties::{normalize_properties, normalize_property, NormalizedProperty};
