use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::FailurePolicy;
use crate::error::ModeError;
use crate::host::DisplayHost;
use crate::liveness::ActivationToken;
use crate::mode::Mode;
use crate::source::ModeSource;
use crate::view::{self, ButtonView};

/// Where the control is in its mount cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Not in the display tree. No mode is held.
    Unmounted,
    /// Mounted, showing the default mode, waiting for the fetch.
    Awaiting,
    /// Mounted, showing the mode reported by the service.
    Settled,
}

/// How a fetch started by [`ModeControl::activate`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The control was still active; its mode is now this value.
    Applied(Mode),
    /// The control had been deactivated; the response was dropped.
    Discarded(Mode),
    /// The fetch failed and [`FailurePolicy::KeepDefault`] kept the default mode.
    KeptDefault,
}

#[derive(Debug)]
struct ControlState {
    lifecycle: Lifecycle,
    mode: Option<Mode>,
    cycles: u64,
    token: Option<ActivationToken>,
}

/// A button bound to the proxy's current mode.
///
/// The control is framework independent. Its host calls
/// [`activate`](Self::activate) when the control is mounted, drives the
/// returned future on its event loop, and calls
/// [`deactivate`](Self::deactivate) when the control is removed. The control
/// calls back into the host only to ask for a re-render once the service's
/// answer has been applied.
///
/// Cloning is cheap; clones share the same state.
///
/// # Example
///
/// ```rust,ignore
/// let control = ModeControl::new(|mode: &Mode| println!("re-render with {mode}"));
/// let fetch = control.activate(&HttpModeSource::new(url));
/// assert_eq!(control.mode(), Some(Mode::Virtualize));
///
/// match fetch.await? {
///     FetchOutcome::Applied(mode) => println!("service says {mode}"),
///     other => println!("{other:?}"),
/// }
/// ```
pub struct ModeControl<H> {
    state: Arc<Mutex<ControlState>>,
    host: Arc<H>,
    policy: FailurePolicy,
}

impl<H> Clone for ModeControl<H> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            host: Arc::clone(&self.host),
            policy: self.policy,
        }
    }
}

impl<H: DisplayHost> ModeControl<H> {
    pub fn new(host: H) -> Self {
        Self::with_policy(host, FailurePolicy::default())
    }

    pub fn with_policy(host: H, policy: FailurePolicy) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControlState {
                lifecycle: Lifecycle::Unmounted,
                mode: None,
                cycles: 0,
                token: None,
            })),
            host: Arc::new(host),
            policy,
        }
    }

    /// Mount the control and start fetching the current mode.
    ///
    /// The default mode is in place when this returns, so the first render
    /// never lacks a value. The request is issued through `source` right
    /// away; the returned future resolves once the answer has been applied
    /// or dropped and must be driven by the host's event loop. Nothing here
    /// blocks.
    ///
    /// Activating an already active control starts a new cycle; the previous
    /// cycle's response will be discarded.
    pub fn activate<S: ModeSource>(
        &self,
        source: &S,
    ) -> impl Future<Output = Result<FetchOutcome, ModeError>> + use<H, S> {
        let token = {
            let mut state = self.lock();
            if let Some(previous) = state.token.take() {
                log::warn!(
                    "[ModeControl] activated while cycle {} was live, discarding its fetch",
                    previous.cycle()
                );
                previous.revoke();
            }
            state.cycles += 1;
            let token = ActivationToken::new(state.cycles);
            state.mode = Some(Mode::default());
            state.lifecycle = Lifecycle::Awaiting;
            state.token = Some(token.clone());
            token
        };

        log::info!(
            "[ModeControl] activated (cycle {}), fetching current mode",
            token.cycle()
        );

        let request = source.fetch_current_mode();
        let state = Arc::clone(&self.state);
        let host = Arc::clone(&self.host);
        let policy = self.policy;

        async move {
            match request.await {
                Ok(response) => Ok(apply_response(&state, host.as_ref(), &token, response.mode)),
                Err(err) => match policy {
                    FailurePolicy::Propagate => {
                        log::error!(
                            "[ModeControl] fetching current mode failed (cycle {}): {}",
                            token.cycle(),
                            err
                        );
                        Err(err)
                    }
                    FailurePolicy::KeepDefault => {
                        log::warn!(
                            "[ModeControl] fetching current mode failed (cycle {}), keeping default: {}",
                            token.cycle(),
                            err
                        );
                        Ok(FetchOutcome::KeptDefault)
                    }
                },
            }
        }
    }

    /// Remove the control from the display tree.
    ///
    /// Any fetch still in flight completes on the wire but has no effect.
    /// Calling this on an inactive control does nothing.
    pub fn deactivate(&self) {
        let mut state = self.lock();
        if let Some(token) = state.token.take() {
            token.revoke();
            state.mode = None;
            state.lifecycle = Lifecycle::Unmounted;
            log::info!("[ModeControl] deactivated (cycle {})", token.cycle());
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lock().lifecycle
    }

    /// Current mode, or `None` while unmounted.
    pub fn mode(&self) -> Option<Mode> {
        self.lock().mode.clone()
    }

    pub fn is_active(&self) -> bool {
        self.lock().token.is_some()
    }

    pub fn render(&self) -> ButtonView {
        view::render(&self.mode().unwrap_or_default())
    }

    fn lock(&self) -> MutexGuard<'_, ControlState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<ControlState>) -> MutexGuard<'_, ControlState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn apply_response<H: DisplayHost>(
    state: &Mutex<ControlState>,
    host: &H,
    token: &ActivationToken,
    mode: Mode,
) -> FetchOutcome {
    // The liveness check, the write and the re-render all happen under the
    // lock, so deactivate() either runs before all three or after all three.
    let mut state = lock_state(state);
    if !token.is_live() {
        log::debug!(
            "[ModeControl] dropping mode '{}' for ended cycle {}",
            mode,
            token.cycle()
        );
        return FetchOutcome::Discarded(mode);
    }
    state.mode = Some(mode.clone());
    state.lifecycle = Lifecycle::Settled;

    log::info!("[ModeControl] current mode is '{}'", mode);
    host.request_rerender(&mode);
    FetchOutcome::Applied(mode)
}
