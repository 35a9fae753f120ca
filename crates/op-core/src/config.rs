//! Search configuration.

/// Walks drawn per start city when the caller does not say otherwise.
pub const DEFAULT_SAMPLES_PER_START: usize = 50;

/// Top-level configuration for one solve request.
///
/// Typically assembled by the application crate from command-line arguments
/// and the uploaded time table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Working-time budget each walk may spend.  A value `<= 0` yields empty
    /// walks.
    pub time_budget: f64,

    /// Independent walks drawn from every start city.  Must be at least 1.
    pub samples_per_start: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored unless the search is built with the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl SearchConfig {
    /// A config for `time_budget` with every other field at its default.
    pub fn new(time_budget: f64) -> Self {
        Self {
            time_budget,
            samples_per_start: DEFAULT_SAMPLES_PER_START,
            seed: 0,
            num_threads: None,
        }
    }

    pub fn with_samples(mut self, samples_per_start: usize) -> Self {
        self.samples_per_start = samples_per_start;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = num_threads;
        self
    }
}
