//! Animation descriptions and built-in presets.

pub mod presets;
pub mod spec;

pub use presets::{DOT_LINE, EQUALS_BAR, SPINNER};
pub use spec::{AnimationSpec, RenderRule};
