//! Built-in animation presets.
//!
//! Presets are constructed eagerly on first use and are read-only, so they
//! are safe to share across runs. Start an animation with a custom delay by
//! cloning a preset: `SPINNER.clone().with_frame_delay(..)`.

use once_cell::sync::Lazy;

use crate::animation::spec::AnimationSpec;
use crate::constants::presets::STRIP_LEN;

/// A line of dots filling in left to right.
pub static DOT_LINE: Lazy<AnimationSpec> = Lazy::new(|| {
    AnimationSpec::cumulative(
        vec![".".to_string(); STRIP_LEN],
        AnimationSpec::default_frame_delay(),
    )
});

/// A bar of `=` characters filling in left to right.
pub static EQUALS_BAR: Lazy<AnimationSpec> = Lazy::new(|| {
    AnimationSpec::cumulative(
        vec!["=".to_string(); STRIP_LEN],
        AnimationSpec::default_frame_delay(),
    )
});

/// A rotating glyph. The trailing empty frame blanks the cell for one beat
/// each revolution.
pub static SPINNER: Lazy<AnimationSpec> = Lazy::new(|| {
    AnimationSpec::single_frame(
        vec![
            "/".to_string(),
            "-".to_string(),
            "\\".to_string(),
            "|".to_string(),
            String::new(),
        ],
        AnimationSpec::default_frame_delay(),
    )
});
