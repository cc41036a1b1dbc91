//! Debounced callables backed by the tokio timer.
//!
//! A [`Debounced`] wrapper owns exactly one pending deferred call. Every
//! [`Debounced::call`] cancels the pending call, if any, and schedules a new
//! one `delay` after now with the latest arguments, so only the last call of a
//! burst produces a trailing execution.
//!
//! Two edge modes are available:
//!
//! - [`DebounceEdge::LeadingAndTrailing`] (default): every call also runs the
//!   function immediately, before returning. A burst of `n` calls therefore
//!   produces `n` immediate executions plus one trailing execution.
//! - [`DebounceEdge::Trailing`]: the function only runs once the quiet period
//!   has elapsed.
//!
//! ```rust
//! use recordset::timing::{DebounceEdge, debounce};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> recordset::Result<()> {
//! let hits = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&hits);
//! let search = debounce(
//!     move |_query: String| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//!     Duration::from_millis(10),
//! )?
//! .with_edge(DebounceEdge::Trailing);
//!
//! search.call("r".to_string());
//! search.call("ru".to_string());
//! search.call("rust".to_string());
//! assert_eq!(hits.load(Ordering::SeqCst), 0);
//!
//! tokio::time::sleep(Duration::from_millis(50)).await;
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! # Ok(())
//! # }
//! ```

use crate::config::DebounceConfig;
use crate::error::{RecordsetError, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

// Upper bound for deadlines that would overflow `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Which edges of a burst of calls execute the wrapped function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebounceEdge {
    /// Run on every call and once more after the last call of a burst.
    #[default]
    LeadingAndTrailing,
    /// Run only after the quiet period following the last call.
    Trailing,
}

/// A function wrapped so that bursts of calls coalesce into one deferred call.
///
/// The pending deferred call is guarded by a mutex, so cancel-then-reschedule
/// is atomic with respect to concurrent callers. Dropping the wrapper does not
/// cancel a call that is already scheduled.
pub struct Debounced<A, F> {
    func: Arc<F>,
    delay: Duration,
    edge: DebounceEdge,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so that calls are debounced by `delay`.
///
/// Uses the tokio runtime of the calling context for deferred calls.
///
/// # Errors
///
/// Returns `RecordsetError::RuntimeUnavailable` when called outside a tokio
/// runtime.
pub fn debounce<A, F>(func: F, delay: Duration) -> Result<Debounced<A, F>>
where
    A: Clone + Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::new(func, delay)
}

impl<A, F> Debounced<A, F>
where
    A: Clone + Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    /// Wrap `func` using the current tokio runtime.
    pub fn new(func: F, delay: Duration) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| RecordsetError::RuntimeUnavailable)?;
        Ok(Self::with_handle(func, delay, runtime))
    }

    /// Wrap `func`, scheduling deferred calls on `runtime`.
    pub fn with_handle(func: F, delay: Duration, runtime: Handle) -> Self {
        Self {
            func: Arc::new(func),
            delay,
            edge: DebounceEdge::default(),
            runtime,
            pending: Mutex::new(None),
            _args: PhantomData,
        }
    }

    /// Wrap `func` with the delay and edge from `config`.
    pub fn from_config(func: F, config: &DebounceConfig) -> Result<Self> {
        Ok(Self::new(func, config.delay())?.with_edge(config.edge))
    }

    pub fn with_edge(mut self, edge: DebounceEdge) -> Self {
        self.edge = edge;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn edge(&self) -> DebounceEdge {
        self.edge
    }

    /// Invoke the debounced function.
    ///
    /// Cancels the pending deferred call, schedules `func(args)` to run after
    /// `delay`, and with [`DebounceEdge::LeadingAndTrailing`] runs `func(args)`
    /// right away as well.
    pub fn call(&self, args: A) {
        let now = Instant::now();
        let deadline = now.checked_add(self.delay).unwrap_or_else(|| now + FAR_FUTURE);
        let func = Arc::clone(&self.func);
        let deferred_args = args.clone();

        {
            let mut pending = self.pending.lock();
            if let Some(previous) = pending.take() {
                previous.abort();
                log::trace!("Canceled pending debounced call");
            }
            *pending = Some(self.runtime.spawn(async move {
                sleep_until(deadline).await;
                func(deferred_args);
            }));
            log::trace!("Scheduled debounced call in {:?}", self.delay);
        }

        if self.edge == DebounceEdge::LeadingAndTrailing {
            (self.func)(args);
        }
    }

    /// Cancel the pending deferred call.
    ///
    /// Returns `true` if a call was pending. Calls that already ran, including
    /// immediate executions, are not affected.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                log::trace!("Canceled pending debounced call");
                true
            }
            _ => false,
        }
    }

    /// Whether a deferred call is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<A, F> fmt::Debug for Debounced<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("edge", &self.edge)
            .finish_non_exhaustive()
    }
}
