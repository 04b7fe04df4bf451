use crate::mode::Mode;

/// CSS class of the rendered button.
pub const BUTTON_CLASS: &str = "button-primary";

/// Label of the rendered button.
pub const BUTTON_LABEL: &str = "Virtualize";

/// What the control draws: one primary action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub class: &'static str,
    pub label: &'static str,
}

/// Render the button for `mode`.
///
/// The label does not depend on the mode yet; the mode is tracked so the
/// label can follow it later.
pub fn render(_mode: &Mode) -> ButtonView {
    ButtonView {
        class: BUTTON_CLASS,
        label: BUTTON_LABEL,
    }
}
