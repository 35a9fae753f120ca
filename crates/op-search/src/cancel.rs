//! Cooperative stop signals checked between walk samples.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::{SearchError, SearchResult};

/// A cloneable flag the caller flips to abandon a running search.
///
/// Clones share the flag, so one copy can be handed to the search while
/// another stays with whoever decides to cancel (a UI handler, a signal
/// handler, another thread).
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything that can stop a search early.  Walks themselves are never
/// interrupted; their length is already bounded by the time budget.
#[derive(Clone, Debug, Default)]
pub(crate) struct StopCondition {
    pub token:    Option<CancelToken>,
    pub deadline: Option<Instant>,
}

impl StopCondition {
    #[inline]
    pub fn check(&self) -> SearchResult<()> {
        if self.token.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(SearchError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(SearchError::DeadlineExceeded);
        }
        Ok(())
    }
}
