//! The `Search` runner: best-of-N walks per start city, best across cities.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use op_core::{CityId, SearchConfig, SearchRng, WalkRng, DEFAULT_SAMPLES_PER_START};
use op_graph::Graph;

use crate::cancel::StopCondition;
use crate::walk::check_budget;
use crate::{
    CancelToken, NoopObserver, SearchError, SearchObserver, SearchResult, Solution, WalkResult,
    walk,
};

// ── Sampler ───────────────────────────────────────────────────────────────────

/// The read-only part of a search, shared by every worker.
#[derive(Clone, Copy)]
struct Sampler<'a> {
    graph:             &'a Graph,
    time_budget:       f64,
    samples_per_start: usize,
    stop:              &'a StopCondition,
}

impl Sampler<'_> {
    /// Draw `samples_per_start` walks from `start` and keep the one with the
    /// strictly greatest reward.  The earliest-drawn sample wins ties.
    fn best_from(&self, start: CityId, base_seed: u64) -> SearchResult<WalkResult> {
        let mut rng = WalkRng::new(base_seed, start);
        let mut best: Option<WalkResult> = None;

        for _ in 0..self.samples_per_start {
            self.stop.check()?;
            let sample = walk(self.graph, start, self.time_budget, &mut rng)?;
            if best.as_ref().is_none_or(|b| sample.reward > b.reward) {
                best = Some(sample);
            }
        }

        best.ok_or_else(|| SearchError::Config("samples_per_start must be at least 1".into()))
    }

    /// Per-start winners, in graph order.
    #[cfg(not(feature = "parallel"))]
    fn winners(&self, base_seed: u64, _num_threads: Option<usize>) -> SearchResult<Vec<WalkResult>> {
        self.graph
            .ids()
            .map(|start| self.best_from(start, base_seed))
            .collect()
    }

    /// Per-start winners, in graph order.  Start cities are sampled on
    /// Rayon's pool; `collect` keeps the graph order regardless of which
    /// worker finishes first.
    #[cfg(feature = "parallel")]
    fn winners(&self, base_seed: u64, num_threads: Option<usize>) -> SearchResult<Vec<WalkResult>> {
        use rayon::prelude::*;

        let starts: Vec<CityId> = self.graph.ids().collect();
        let sample_all = || -> SearchResult<Vec<WalkResult>> {
            starts
                .par_iter()
                .map(|&start| self.best_from(start, base_seed))
                .collect()
        };

        match num_threads {
            None => sample_all(),
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| SearchError::Config(format!("cannot build thread pool: {e}")))?
                .install(sample_all),
        }
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// A configured multi-start search over one graph.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.samples(n)`     | `DEFAULT_SAMPLES_PER_START` (50) |
/// | `.threads(n)`     | All logical cores                |
/// | `.cancel(token)`  | Never cancelled                  |
/// | `.deadline(t)`    | No deadline                      |
/// | `.observer(o)`    | [`NoopObserver`]                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = SearchRng::new(7);
/// let best = Search::new(&graph, 480.0)
///     .samples(200)
///     .deadline(Instant::now() + Duration::from_secs(2))
///     .run(&mut rng)?;
/// ```
pub struct Search<'g, O: SearchObserver = NoopObserver> {
    graph:             &'g Graph,
    time_budget:       f64,
    samples_per_start: usize,
    num_threads:       Option<usize>,
    stop:              StopCondition,
    observer:          O,
}

impl<'g> Search<'g, NoopObserver> {
    pub fn new(graph: &'g Graph, time_budget: f64) -> Self {
        Self {
            graph,
            time_budget,
            samples_per_start: DEFAULT_SAMPLES_PER_START,
            num_threads: None,
            stop: StopCondition::default(),
            observer: NoopObserver,
        }
    }

    /// A search set up from a [`SearchConfig`].  The config's seed is not
    /// used here; pass `SearchRng::new(config.seed)` to `run`/`solve`.
    pub fn from_config(graph: &'g Graph, config: &SearchConfig) -> Self {
        Self::new(graph, config.time_budget)
            .samples(config.samples_per_start)
            .threads(config.num_threads)
    }
}

impl<'g, O: SearchObserver> Search<'g, O> {
    pub fn samples(mut self, samples_per_start: usize) -> Self {
        self.samples_per_start = samples_per_start;
        self
    }

    /// Worker count for the `parallel` feature.  Without it, ignored.
    pub fn threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.stop.token = Some(token);
        self
    }

    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.stop.deadline = Some(deadline);
        self
    }

    /// Give up `timeout` after this call.
    pub fn timeout(self, timeout: Duration) -> Self {
        self.deadline(Instant::now() + timeout)
    }

    pub fn observer<P: SearchObserver>(self, observer: P) -> Search<'g, P> {
        Search {
            graph:             self.graph,
            time_budget:       self.time_budget,
            samples_per_start: self.samples_per_start,
            num_threads:       self.num_threads,
            stop:              self.stop,
            observer,
        }
    }

    /// Run the search and return the best walk found.
    ///
    /// Draws one base seed from `rng`; every start city's walks derive from
    /// it, so a given seed reproduces the result exactly, sequential or
    /// parallel.
    ///
    /// Across start cities the strictly greatest reward wins and ties go to
    /// the city that comes first in graph order.
    pub fn run(&mut self, rng: &mut SearchRng) -> SearchResult<WalkResult> {
        if self.samples_per_start == 0 {
            return Err(SearchError::Config("samples_per_start must be at least 1".into()));
        }
        if self.graph.is_empty() {
            return Err(SearchError::EmptyGraph);
        }
        check_budget(self.time_budget)?;
        let min_edge = self.graph.min_edge_time().unwrap_or(f64::INFINITY);
        if self.time_budget > 0.0 && self.time_budget - min_edge == self.time_budget {
            return Err(SearchError::Config(format!(
                "time budget {} is too large for edge time {min_edge}",
                self.time_budget
            )));
        }

        let t0 = Instant::now();
        let base_seed = rng.next_base_seed();
        let sampler = Sampler {
            graph:             self.graph,
            time_budget:       self.time_budget,
            samples_per_start: self.samples_per_start,
            stop:              &self.stop,
        };
        let winners = sampler.winners(base_seed, self.num_threads)?;

        let mut best: Option<WalkResult> = None;
        for (start, winner) in self.graph.ids().zip(winners) {
            debug!(
                start = self.graph.name(start),
                reward = winner.reward,
                steps = winner.path.len(),
                "best walk for start city"
            );
            self.observer.on_start_best(start, &winner);
            if best.as_ref().is_none_or(|b| winner.reward > b.reward) {
                best = Some(winner);
            }
        }
        let best = best.ok_or(SearchError::EmptyGraph)?;

        let elapsed = t0.elapsed();
        info!(
            cities = self.graph.city_count(),
            samples_per_start = self.samples_per_start,
            reward = best.reward,
            time_left = best.time_left,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );
        self.observer.on_search_end(&best, elapsed);
        Ok(best)
    }

    /// [`run`](Self::run), then materialize the winning path's edges.
    pub fn solve(&mut self, rng: &mut SearchRng) -> SearchResult<Solution> {
        self.run(rng).map(Solution::from_walk)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Best-of-`samples_per_start` walks from every city; the best of those.
///
/// Shorthand for `Search::new(graph, time_budget).samples(n).run(rng)`.
pub fn search(
    graph:             &Graph,
    time_budget:       f64,
    samples_per_start: usize,
    rng:               &mut SearchRng,
) -> SearchResult<WalkResult> {
    Search::new(graph, time_budget).samples(samples_per_start).run(rng)
}

/// Run a full solve request described by `config`, seeding from
/// `config.seed`.
pub fn solve(graph: &Graph, config: &SearchConfig) -> SearchResult<Solution> {
    let mut rng = SearchRng::new(config.seed);
    Search::from_config(graph, config).solve(&mut rng)
}
