use gloo_timers::callback::Timeout;

/// A scheduled one-shot continuation.
///
/// Dropping a `gloo` timeout cancels it, so callers must decide explicitly:
/// [`TaskHandle::detach`] lets it run to completion, [`TaskHandle::cancel`]
/// stops it.
#[must_use = "detach() or cancel() the task, dropping it cancels silently"]
pub struct TaskHandle {
    timeout: Timeout,
}

impl TaskHandle {
    pub fn detach(self) {
        self.timeout.forget();
    }

    pub fn cancel(self) {
        let _ = self.timeout.cancel();
    }
}

/// Runs `task` once after `delay_ms` on the browser event loop.
pub fn after<F>(delay_ms: u32, task: F) -> TaskHandle
where
    F: FnOnce() + 'static,
{
    TaskHandle {
        timeout: Timeout::new(delay_ms, task),
    }
}
