//! `op-core` — foundational types for the `rust_op` path search engine.
//!
//! This crate is a dependency of every other `op-*` crate.  It has no `op-*`
//! dependencies and minimal external ones (only `rand`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `CityId`                                               |
//! | [`point`]  | `Point` (planar plot coordinates)                      |
//! | [`rng`]    | `WalkRng` (per start city), `SearchRng` (per run)      |
//! | [`config`] | `SearchConfig`                                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod ids;
pub mod point;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_SAMPLES_PER_START, SearchConfig};
pub use ids::CityId;
pub use point::Point;
pub use rng::{SearchRng, WalkRng};
