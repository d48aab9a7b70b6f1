//! Cancellable timer handles.
//!
//! Both types own their pending `gloo_timers` handle in component-local
//! storage: arming again cancels the previous timer (last call wins) and
//! the owning component cancels on teardown via `on_cleanup`. This keeps
//! stale callbacks from firing after state has moved on.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// A boolean flag that self-clears after a fixed delay.
///
/// Used for the "Copied!" acknowledgement: [`Cooldown::trigger`] sets the
/// flag and (re)starts the countdown; re-triggering before expiry restarts
/// the delay without the flag ever flickering to false.
#[derive(Clone, Copy)]
pub struct Cooldown {
    active: RwSignal<bool>,
    handle: StoredValue<Option<Timeout>, LocalStorage>,
    duration_ms: u32,
}

impl Cooldown {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            active: RwSignal::new(false),
            handle: StoredValue::new_local(None),
            duration_ms,
        }
    }

    /// Reactive view of the flag.
    pub fn active(&self) -> Signal<bool> {
        self.active.into()
    }

    /// Raise the flag and restart the self-clear countdown.
    pub fn trigger(&self) {
        self.active.set(true);

        let active = self.active;
        let handle = self.handle;
        let timeout = Timeout::new(self.duration_ms, move || {
            // The owning component may have been torn down in the meantime.
            let _ = active.try_set(false);
            handle.try_update_value(|h| *h = None);
        });

        if let Some(previous) = self.handle.try_update_value(|h| h.replace(timeout)).flatten() {
            previous.cancel();
        }
    }

    /// Cancel any pending countdown and lower the flag.
    pub fn cancel(&self) {
        if let Some(previous) = self.handle.try_update_value(|h| h.take()).flatten() {
            previous.cancel();
        }
        let _ = self.active.try_set(false);
    }
}

/// Delays a callback until input has been quiet for the configured window.
///
/// Each [`Debounce::schedule`] cancels the previously pending callback, so
/// only the last one within the window ever runs.
#[derive(Clone, Copy)]
pub struct Debounce {
    handle: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            handle: StoredValue::new_local(None),
            delay_ms,
        }
    }

    /// Schedule `callback` to run after the quiet window, replacing any
    /// previously scheduled callback.
    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        let handle = self.handle;
        let timeout = Timeout::new(self.delay_ms, move || {
            handle.try_update_value(|h| *h = None);
            callback();
        });

        if let Some(previous) = self.handle.try_update_value(|h| h.replace(timeout)).flatten() {
            previous.cancel();
        }
    }

    /// Drop any pending callback without running it.
    pub fn cancel(&self) {
        if let Some(previous) = self.handle.try_update_value(|h| h.take()).flatten() {
            previous.cancel();
        }
    }
}

// Timers need a browser event loop, so these run under the wasm test runner.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn cooldown_raises_then_clears_after_the_delay() {
        let ack = Cooldown::new(40);
        assert!(!ack.active().get_untracked());

        ack.trigger();
        assert!(ack.active().get_untracked());

        TimeoutFuture::new(70).await;
        assert!(!ack.active().get_untracked());
    }

    #[wasm_bindgen_test]
    async fn retrigger_restarts_the_countdown_without_clearing() {
        let ack = Cooldown::new(40);
        ack.trigger();

        TimeoutFuture::new(25).await;
        assert!(ack.active().get_untracked());
        ack.trigger();

        // Past the first deadline but inside the restarted window: the flag
        // must still be raised (no flicker to false).
        TimeoutFuture::new(25).await;
        assert!(ack.active().get_untracked());

        TimeoutFuture::new(50).await;
        assert!(!ack.active().get_untracked());
    }

    #[wasm_bindgen_test]
    async fn cancel_lowers_the_flag_and_drops_the_timer() {
        let ack = Cooldown::new(40);
        ack.trigger();
        ack.cancel();
        assert!(!ack.active().get_untracked());

        TimeoutFuture::new(70).await;
        assert!(!ack.active().get_untracked());
    }

    #[wasm_bindgen_test]
    async fn debounce_runs_only_the_last_scheduled_callback() {
        let hits = RwSignal::new(Vec::<u32>::new());
        let debounce = Debounce::new(30);

        debounce.schedule(move || hits.update(|h| h.push(1)));
        debounce.schedule(move || hits.update(|h| h.push(2)));

        TimeoutFuture::new(60).await;
        assert_eq!(hits.get_untracked(), vec![2]);
    }
}
