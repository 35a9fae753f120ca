//! A single randomized, time-budgeted traversal.
//!
//! # Remaining-time semantics
//!
//! The loop checks the budget only at the top of each iteration:
//!
//! ```text
//! remaining = budget
//! while remaining > 0:
//!     time_left = remaining          ← snapshot before this step's move
//!     collect reward of current (first visit only), append it to path
//!     pick a uniformly random neighbour, remaining -= edge time, move there
//! ```
//!
//! `WalkResult::time_left` is that snapshot: the budget still available when
//! the last recorded city was reached.  The edge taken out of the last city
//! may overspend the budget by up to its own cost.  Its destination is not
//! recorded; `travelled` and [`WalkResult::overshoot`] report the overspend.
//!
//! For `budget <= 0` the loop body never runs: the path is empty, the reward
//! is zero and `time_left == budget`.
//!
//! # Termination
//!
//! Every edge time is strictly positive, so a finite budget is used up after
//! at most `budget / min_edge_time + 1` steps, provided each subtraction
//! actually lowers `remaining`.  A non-finite budget is rejected up front.
//! So is a step whose edge time is lost to rounding against a huge
//! `remaining`.

use op_core::{CityId, WalkRng};
use op_graph::Graph;

use crate::{SearchError, SearchResult};

/// Outcome of one walk.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkResult {
    /// Budget remaining when the last city in `path` was reached.
    pub time_left: f64,

    /// Sum of the values of the distinct cities in `path`.
    pub reward: f64,

    /// Visited cities in order, starting with the start city.  Revisits
    /// appear every time they happen.
    pub path: Vec<CityId>,

    /// Total travel time of every edge taken, including the final edge out
    /// of the last recorded city.
    pub travelled: f64,

    /// Number of distinct cities in `path`.
    pub distinct: usize,
}

impl WalkResult {
    /// The result of a walk whose loop never ran.
    pub fn empty(time_budget: f64) -> Self {
        Self { time_left: time_budget, reward: 0.0, path: Vec::new(), travelled: 0.0, distinct: 0 }
    }

    /// Number of distinct cities visited.
    #[inline]
    pub fn distinct_cities(&self) -> usize {
        self.distinct
    }

    /// How far the walk's travel ran past `time_budget` (0 if it did not).
    pub fn overshoot(&self, time_budget: f64) -> f64 {
        (self.travelled - time_budget).max(0.0)
    }
}

/// Simulate one walk from `start` with `time_budget` to spend.
///
/// Each step picks a neighbour uniformly at random, regardless of travel time
/// or reward.  A city's value is collected on its first visit only; membership
/// is an O(1) lookup in a per-walk visited bitmap.
///
/// Errors:
/// - [`SearchError::Config`] if `time_budget` is not finite, or if an edge
///   time is too small to lower the remaining budget.
/// - [`SearchError::UnknownStart`] if `start` is not a city of `graph`.
/// - [`SearchError::NoNeighbors`] if the walk reaches a city without
///   neighbours.  Unreachable for graphs built by `op-graph`.
pub fn walk(
    graph:       &Graph,
    start:       CityId,
    time_budget: f64,
    rng:         &mut WalkRng,
) -> SearchResult<WalkResult> {
    check_budget(time_budget)?;
    if !graph.contains(start) {
        return Err(SearchError::UnknownStart(start));
    }

    let mut remaining = time_budget;
    let mut result = WalkResult::empty(time_budget);
    let mut visited = vec![false; graph.city_count()];
    let mut current = start;

    while remaining > 0.0 {
        result.time_left = remaining;

        let seen = &mut visited[current.index()];
        if !*seen {
            *seen = true;
            result.reward += graph.value(current);
            result.distinct += 1;
        }
        result.path.push(current);

        let (targets, times) = graph.neighbors(current);
        if targets.is_empty() {
            return Err(SearchError::NoNeighbors { city: graph.name(current).to_owned() });
        }
        let i = rng.gen_range(0..targets.len());

        let next = remaining - times[i];
        if next == remaining {
            return Err(SearchError::Config(format!(
                "time budget {time_budget} is too large for edge time {}",
                times[i]
            )));
        }
        remaining = next;
        result.travelled += times[i];
        current = targets[i];
    }

    Ok(result)
}

/// Reject budgets a walk could never use up.
pub(crate) fn check_budget(time_budget: f64) -> SearchResult<()> {
    if time_budget.is_finite() {
        Ok(())
    } else {
        Err(SearchError::Config(format!("time budget must be finite, got {time_budget}")))
    }
}
