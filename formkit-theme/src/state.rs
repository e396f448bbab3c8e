//! Widget states passed to the drawing operations of a [Theme](crate::theme::Theme).

/// Interaction state of a push-style control (buttons, scroll arrows, check boxes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Idle.
    #[default]
    Normal,
    /// Pointer is over the control.
    Hot,
    /// Control is held down.
    Pressed,
    /// Control does not accept input.
    Disabled,
    /// Control is the default button of its form.
    Default,
}

impl ButtonState {
    /// Whether the control is held down.
    pub fn is_pressed(&self) -> bool {
        matches!(self, ButtonState::Pressed)
    }

    /// Whether the pointer is over the control.
    pub fn is_hot(&self) -> bool {
        matches!(self, ButtonState::Hot)
    }

    /// Whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        matches!(self, ButtonState::Disabled)
    }
}

/// Check mark state of a check box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

/// Direction of the arrow glyph on a scroll button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ScrollArrow {
    Up,
    Down,
    Left,
    Right,
}

/// Border drawn around a control's client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border at all.
    #[default]
    None,
    /// Single flat line.
    Flat,
    /// Raised 3D edge.
    Raised,
    /// Sunken 3D edge.
    Sunken,
}
