//! `op-graph` — the city graph the search walks over.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`record`]  | `CityRecord`, `EdgeRecord` (tabular input rows)           |
//! | [`graph`]   | `City`, `Graph` (CSR), `GraphBuilder`, `build_graph`      |
//! | [`error`]   | `GraphError`, `InvalidGraph`, `GraphResult<T>`            |
//!
//! A `Graph` is built once per solve request and is read-only afterwards, so
//! it can be shared by reference across search workers.

pub mod error;
pub mod graph;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult, InvalidGraph};
pub use graph::{City, Graph, GraphBuilder, build_graph};
pub use record::{CityRecord, EdgeRecord};
