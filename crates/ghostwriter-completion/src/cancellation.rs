//! Host-facing cancellation token
//!
//! A one-shot signal modeled on the host editor's token interface:
//! `is_cancellation_requested`, `on_cancellation_requested`, and the optional
//! pre-bound cancellation-callback slot some hosts carry. Once fired, every
//! registered callback runs exactly once; a callback registered after the
//! fact runs immediately.

use std::sync::{Arc, Mutex};

type Callback = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct State {
    cancelled: bool,
    callbacks: Vec<Callback>,
}

#[derive(Default)]
struct Inner {
    state: Mutex<State>,
    /// Pre-bound slot the lifecycle invokes on cancellation, independent of
    /// the listeners registered through `on_cancellation_requested`.
    cancellation_callback: Mutex<Option<Callback>>,
}

/// One-shot cancellation signal shared between the host and the lifecycle
#[derive(Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

impl CancellationToken {
    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `cancel` has been called
    pub fn is_cancellation_requested(&self) -> bool {
        self.inner.state.lock().unwrap().cancelled
    }

    /// Register a callback to run on cancellation
    ///
    /// Runs immediately when the token has already fired, so registration is
    /// race-free no matter when the host cancels.
    pub fn on_cancellation_requested(&self, callback: impl Fn() + Send + Sync + 'static) {
        let callback: Callback = Box::new(callback);
        let run_now = {
            let mut state = self.inner.state.lock().unwrap();
            if state.cancelled {
                Some(callback)
            } else {
                state.callbacks.push(callback);
                None
            }
        };
        if let Some(callback) = run_now {
            callback();
        }
    }

    /// Bind the optional host-quirk callback slot
    pub fn set_cancellation_callback(&self, callback: impl Fn() + Send + Sync + 'static) {
        *self.inner.cancellation_callback.lock().unwrap() = Some(Box::new(callback));
    }

    /// Invoke the pre-bound callback slot, if any
    pub fn invoke_cancellation_callback(&self) {
        let slot = self.inner.cancellation_callback.lock().unwrap();
        if let Some(callback) = slot.as_ref() {
            callback();
        }
    }

    /// Fire the token, running all registered callbacks exactly once
    ///
    /// Later calls are no-ops.
    pub fn cancel(&self) {
        let callbacks = {
            let mut state = self.inner.state.lock().unwrap();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            std::mem::take(&mut state.callbacks)
        };
        for callback in callbacks {
            callback();
        }
    }
}
