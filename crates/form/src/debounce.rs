//! Trailing-edge debouncer.
//!
//! Collapses bursts of calls into a single delayed invocation of a setter.
//! Each debouncer owns its own timer; two instances never share state.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Delays `setter(value)` until `delay` has passed with no further calls.
///
/// Timers run as tokio tasks, so [`Debouncer::call`] must be invoked from
/// within a tokio runtime. Dropping the debouncer cancels any pending call.
pub struct Debouncer<T> {
    setter: Setter<T>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap a setter.
    ///
    /// # Arguments
    /// * `setter` - Invoked with the last value once the field goes quiet
    /// * `delay` - Quiet period required before invoking
    pub fn new<F>(setter: F, delay: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            setter: Arc::new(setter),
            delay,
            pending: None,
        }
    }

    /// Schedule `setter(value)`, replacing any call still waiting.
    pub fn call(&mut self, value: T) {
        self.cancel();

        let setter = Arc::clone(&self.setter);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            setter(value);
        }));
    }

    /// Invoke the setter right away, dropping any call still waiting.
    pub fn flush(&mut self, value: T) {
        self.cancel();
        (self.setter)(value);
    }
}

impl<T> Debouncer<T> {
    /// Abort the pending call without running it.
    ///
    /// # Returns
    /// * `bool` - True if a call was still waiting
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Check whether a scheduled call has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
