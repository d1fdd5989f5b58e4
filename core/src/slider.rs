//! Position math and drag state for the before/after comparison slider.
//!
//! The position is a percentage of the container width in `[0, 100]`:
//! 0 shows only the "after" image, 100 only the "before" image. The
//! before-image hides `100 - position` percent of its right side via a
//! clip inset.

pub const POSITION_MIN: f64 = 0.0;
pub const POSITION_MAX: f64 = 100.0;
pub const DEFAULT_POSITION: f64 = 50.0;

/// Step applied per ArrowLeft/ArrowRight press.
pub const KEY_STEP: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    pub dragging: bool,
    pub position: f64,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            dragging: false,
            position: DEFAULT_POSITION,
        }
    }
}

impl SliderState {
    /// Clamps and stores the position, returning the stored value.
    pub fn set_position(&mut self, position: f64) -> f64 {
        self.position = clamp_position(position);
        self.position
    }

    /// Keyboard adjustment, independent of drag state.
    pub fn nudge(&mut self, delta: f64) -> f64 {
        self.set_position(self.position + delta)
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

pub fn clamp_position(position: f64) -> f64 {
    position.clamp(POSITION_MIN, POSITION_MAX)
}

/// Converts a horizontal client coordinate into a position percentage of
/// the container. None for degenerate container widths.
pub fn position_from_offset(client_x: f64, rect_left: f64, rect_width: f64) -> Option<f64> {
    if rect_width <= 0.0 {
        return None;
    }
    Some((client_x - rect_left) / rect_width * 100.0)
}

/// Percentage of the before-image hidden from the right.
pub fn hidden_fraction(position: f64) -> f64 {
    POSITION_MAX - clamp_position(position)
}

/// Clip-path value for the before-image at the given position.
pub fn clip_inset(position: f64) -> String {
    format!("inset(0 {}% 0 0)", fmt_percent(hidden_fraction(position)))
}

/// CSS `left` value for the handle and divider line.
pub fn left_percent(position: f64) -> String {
    format!("{}%", fmt_percent(clamp_position(position)))
}

/// Integral values print without decimals so a clamped extreme reads
/// `inset(0 0% 0 0)` rather than `inset(0 0.000% 0 0)`.
pub fn fmt_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.3}", value)
    }
}
