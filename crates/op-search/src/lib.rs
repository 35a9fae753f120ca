//! `op-search` — randomized search for a high-reward, time-budgeted path.
//!
//! # Pipeline
//!
//! ```text
//! for start in graph.ids():                      (parallel with `parallel`)
//!   ① Sample   — draw `samples_per_start` walks from `start`, each with the
//!                start city's own WalkRng.
//!   ② Keep     — the walk with the strictly greatest reward (earliest wins
//!                ties).
//! ③ Reduce     — over per-start winners in graph order, keep the strictly
//!                greatest reward (earliest city wins ties).
//! ④ Materialize — turn the winning path into consecutive (from, to) edges.
//! ```
//!
//! A cancel token or deadline is checked between samples.  A stopped search
//! returns an error, never a partial result.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Samples start cities on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use op_core::{SearchConfig, SearchRng};
//! use op_search::Search;
//!
//! let mut rng = SearchRng::new(42);
//! let solution = Search::new(&graph, 12.0).samples(50).solve(&mut rng)?;
//! println!("reward {} via {:?}", solution.reward(), solution.named_edges(&graph));
//! ```

pub mod cancel;
pub mod error;
pub mod observer;
pub mod search;
pub mod solution;
pub mod walk;


pub use cancel::CancelToken;
pub use error::{SearchError, SearchResult};
pub use observer::{NoopObserver, SearchObserver};
pub use search::{Search, search, solve};
pub use solution::{Solution, to_edges};
pub use walk::{WalkResult, walk};
