//! `op-io` — loading the three uploaded tables.
//!
//! | Table   | Header                    | Loader                         |
//! |---------|---------------------------|--------------------------------|
//! | cities  | `name,x,y,value`          | [`load_cities_reader`]         |
//! | paths   | `city_from,city_to,time`  | [`load_edges_reader`]          |
//! | time    | `time`                    | [`load_time_budget_reader`]    |
//!
//! Each loader has a `*_csv(path)` twin that opens a file.  Only the format
//! is checked here; graph-level rules (known cities, positive times, no
//! isolated cities) are enforced by `op_graph::build_graph`.

pub mod error;
pub mod loader;


pub use error::{IoError, IoResult};
pub use loader::{
    load_cities_csv, load_cities_reader, load_edges_csv, load_edges_reader, load_graph,
    load_time_budget_csv, load_time_budget_reader,
};
