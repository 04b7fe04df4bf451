use crate::mode::Mode;

/// The display-tree runtime hosting a [`ModeControl`](crate::ModeControl).
///
/// The host tells the control when it is mounted or removed by calling
/// [`ModeControl::activate`](crate::ModeControl::activate) and
/// [`ModeControl::deactivate`](crate::ModeControl::deactivate). In the other
/// direction the control only needs to ask for a re-render when its state
/// changes after the first render.
///
/// `request_rerender` runs while the control holds its state lock, so a
/// concurrent deactivation waits for it to return. Implementations must be
/// cheap to call and must not call back into the control.
pub trait DisplayHost: Send + Sync + 'static {
    /// Schedule a re-render with the new mode.
    fn request_rerender(&self, mode: &Mode);
}

impl<F> DisplayHost for F
where
    F: Fn(&Mode) + Send + Sync + 'static,
{
    fn request_rerender(&self, mode: &Mode) {
        self(mode)
    }
}
