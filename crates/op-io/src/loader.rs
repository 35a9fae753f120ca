//! CSV table loaders.
//!
//! # CSV formats
//!
//! ```csv
//! name,x,y,value
//! Krakow,0,0,5
//! Tarnow,3,1,2
//! ```
//!
//! ```csv
//! city_from,city_to,time
//! Krakow,Tarnow,60
//! ```
//!
//! ```csv
//! time
//! 480
//! ```
//!
//! Fields are trimmed, so `Krakow, Tarnow, 60` reads the same as the compact
//! form.  Only the first row of the time table is used.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use op_graph::{CityRecord, EdgeRecord, Graph, build_graph};

use crate::{IoError, IoResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimeRecord {
    time: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the city table from a CSV file.
pub fn load_cities_csv(path: &Path) -> IoResult<Vec<CityRecord>> {
    load_cities_reader(File::open(path)?)
}

/// Like [`load_cities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for upload bodies held in
/// memory.
pub fn load_cities_reader<R: Read>(reader: R) -> IoResult<Vec<CityRecord>> {
    read_table(reader, "cities")
}

/// Load the path table from a CSV file.
pub fn load_edges_csv(path: &Path) -> IoResult<Vec<EdgeRecord>> {
    load_edges_reader(File::open(path)?)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
pub fn load_edges_reader<R: Read>(reader: R) -> IoResult<Vec<EdgeRecord>> {
    read_table(reader, "paths")
}

/// Load the working-time budget from a CSV file.
pub fn load_time_budget_csv(path: &Path) -> IoResult<f64> {
    load_time_budget_reader(File::open(path)?)
}

/// Like [`load_time_budget_csv`] but accepts any `Read` source.
///
/// Returns the `time` value of the first row; fails with
/// [`IoError::MissingBudget`] if the table has none.
pub fn load_time_budget_reader<R: Read>(reader: R) -> IoResult<f64> {
    let mut csv_reader = csv_reader(reader);
    match csv_reader.deserialize::<TimeRecord>().next() {
        None => Err(IoError::MissingBudget),
        Some(row) => row.map(|r| r.time).map_err(|e| parse_error("time", e)),
    }
}

/// Load the city and path tables and build the graph from them.
pub fn load_graph(cities_path: &Path, paths_path: &Path) -> IoResult<Graph> {
    let cities = load_cities_csv(cities_path)?;
    let edges = load_edges_csv(paths_path)?;
    debug!(cities = cities.len(), edges = edges.len(), "loaded graph tables");
    Ok(build_graph(&cities, &edges)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn read_table<T: DeserializeOwned, R: Read>(reader: R, table: &'static str) -> IoResult<Vec<T>> {
    csv_reader(reader)
        .deserialize::<T>()
        .map(|row| row.map_err(|e| parse_error(table, e)))
        .collect()
}

fn parse_error(table: &'static str, e: csv::Error) -> IoError {
    IoError::Parse { table, message: e.to_string() }
}
