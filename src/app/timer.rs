use std::time::Duration;

use leptos::prelude::*;

/// Holds at most one pending browser timeout.
///
/// Scheduling clears whatever was pending first, and the pending timeout is
/// cleared when the owning component is torn down.
#[derive(Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<TimeoutHandle>>);

impl TimerSlot {
    pub fn new() -> Self {
        let slot = Self(StoredValue::new(None));
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn schedule(&self, delay: Duration, cb: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(cb, delay) {
            Ok(handle) => {
                self.0.try_update_value(|pending| *pending = Some(handle));
            }
            Err(e) => log::warn!("couldn't schedule timeout: {e:?}"),
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.0.try_update_value(Option::take) {
            handle.clear();
        }
    }
}
