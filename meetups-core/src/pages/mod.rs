//! Page view models.
//!
//! Each page loads or submits through an `EventApi` and turns the outcome
//! into display-ready state. API failures never escape as errors here: they
//! become short inline messages, and the user can retry by navigating again.

mod create;
mod detail;
mod home;
mod preview;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use create::{CreateForm, CreateOutcome, CreatePage};
pub use detail::{DeleteOutcome, DetailPage, DetailView, EventDetail};
pub use home::{EMPTY_LIST_MESSAGE, EventCard, HomePage, HomeView};
pub use preview::EventPreview;

/// Tracks whether the view that started a load is still on screen.
///
/// Unmounting does not abort the request; the result is dropped when it arrives.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Liveness(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Run `load` to completion and keep its result only if the view is still mounted.
    pub async fn apply<F: Future>(&self, load: F) -> Option<F::Output> {
        let output = load.await;
        if self.is_alive() {
            Some(output)
        } else {
            log::debug!("Discarding result for unmounted view");
            None
        }
    }
}

/// At most one submit or delete per page at a time.
#[derive(Debug, Default)]
pub struct InFlight(AtomicBool);

impl InFlight {
    /// Claim the slot, or `None` if a request is already running.
    pub fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.0))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Releases the in-flight slot when dropped.
pub struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
