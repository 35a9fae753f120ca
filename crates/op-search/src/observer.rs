//! Search observer trait for progress reporting.

use std::time::Duration;

use op_core::CityId;

use crate::WalkResult;

/// Callbacks invoked by [`Search::run`][crate::Search::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks always run on the calling thread,
/// in graph order, even when sampling is parallel.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SearchObserver for ProgressPrinter {
///     fn on_start_best(&mut self, start: CityId, best: &WalkResult) {
///         println!("{start}: best reward {}", best.reward);
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once per start city with the best of its sampled walks.
    fn on_start_best(&mut self, _start: CityId, _best: &WalkResult) {}

    /// Called once with the overall winner and the wall time spent searching.
    fn on_search_end(&mut self, _best: &WalkResult, _elapsed: Duration) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_start_best(&mut self, start: CityId, best: &WalkResult) {
        (**self).on_start_best(start, best);
    }

    fn on_search_end(&mut self, best: &WalkResult, elapsed: Duration) {
        (**self).on_search_end(best, elapsed);
    }
}
