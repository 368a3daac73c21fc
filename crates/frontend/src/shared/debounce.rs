//! Cancel-and-reschedule timer for search inputs.

use gloo_timers::future::TimeoutFuture;

use crate::shared::list::fetcher::RequestSequence;

/// Each `schedule` supersedes the pending one; only the last action
/// scheduled within `delay_ms` runs.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u32,
    generation: RequestSequence,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: RequestSequence::new(),
        }
    }

    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let ticket = self.generation.issue();
        let generation = self.generation.clone();
        let delay = self.delay_ms;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.is_latest(ticket) {
                action();
            }
        });
    }

    /// Drops the pending action, if any.
    pub fn cancel(&self) {
        self.generation.issue();
    }
}
