//! Immutable animation descriptions.
//!
//! An [`AnimationSpec`] captures everything the background loop needs to
//! draw one animation: the frame fragments, how a frame index maps to
//! rendered text, and how long each frame is held. Specs never change after
//! construction, which keeps the derived clear width trustworthy for the
//! lifetime of a run.

use std::time::Duration;

use crate::constants::DEFAULT_FRAME_DELAY_MS;

/// How a frame index maps to the text drawn for that frame.
///
/// The rule is chosen once per spec and also determines the clear width:
/// a single-frame animation only ever occupies one cell past the
/// annotation, while a cumulative one can grow to the full fragment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRule {
    /// Frame `i` shows fragments `0..=i` concatenated. Produces a growing
    /// animation, e.g. dots filling in left to right.
    Cumulative,
    /// Frame `i` shows exactly fragment `i`. Produces a replacing
    /// animation, e.g. a spinning glyph.
    SingleFrame,
}

/// Immutable description of a single-line loading animation.
#[derive(Debug, Clone)]
pub struct AnimationSpec {
    frames: Vec<String>,
    render_rule: RenderRule,
    frame_delay: Duration,
}

impl AnimationSpec {
    /// Creates a cumulative animation from the given fragments.
    ///
    /// # Panics
    ///
    /// Panics if `fragments` is empty; an animation needs at least one frame.
    pub fn cumulative(fragments: Vec<String>, frame_delay: Duration) -> Self {
        assert!(
            !fragments.is_empty(),
            "animation requires at least one frame"
        );
        Self {
            frames: fragments,
            render_rule: RenderRule::Cumulative,
            frame_delay,
        }
    }

    /// Creates a single-frame animation from the given frames.
    ///
    /// # Panics
    ///
    /// Panics if `frames` is empty; an animation needs at least one frame.
    pub fn single_frame(frames: Vec<String>, frame_delay: Duration) -> Self {
        assert!(!frames.is_empty(), "animation requires at least one frame");
        Self {
            frames,
            render_rule: RenderRule::SingleFrame,
            frame_delay,
        }
    }

    /// Returns a copy of this spec with a different frame delay.
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    /// Number of distinct animation steps per cycle.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Rendering rule for this spec.
    pub fn render_rule(&self) -> RenderRule {
        self.render_rule
    }

    /// How long each frame is held before advancing.
    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Number of blank characters needed to erase the widest frame this
    /// spec can render, so a new cycle never leaves stale characters from
    /// the previous one on the line.
    pub fn clear_width(&self) -> usize {
        match self.render_rule {
            // Each frame occupies one unit, regardless of which glyph it is
            RenderRule::SingleFrame => 1,
            // Worst case is the full concatenation
            RenderRule::Cumulative => self.frames.len(),
        }
    }

    /// Renders the text for frame `index` according to the render rule.
    ///
    /// # Panics
    ///
    /// Panics if `index >= frame_count()`. The animation loop only ever
    /// asks for indices in `0..frame_count()`.
    pub fn render_frame(&self, index: usize) -> String {
        match self.render_rule {
            RenderRule::Cumulative => self.frames[..=index].concat(),
            RenderRule::SingleFrame => self.frames[index].clone(),
        }
    }

    /// The default frame delay shared by the built-in presets.
    pub fn default_frame_delay() -> Duration {
        Duration::from_millis(DEFAULT_FRAME_DELAY_MS)
    }
}
