//! Tabular input rows.
//!
//! Field names match the column headers of the uploaded tables, so a CSV
//! reader can deserialize straight into these types.

use serde::Deserialize;

/// One row of the city table: `name,x,y,value`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CityRecord {
    pub name:  String,
    pub x:     f64,
    pub y:     f64,
    pub value: f64,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, x: f64, y: f64, value: f64) -> Self {
        Self { name: name.into(), x, y, value }
    }
}

/// One row of the path table: `city_from,city_to,time`.  Undirected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EdgeRecord {
    pub city_from: String,
    pub city_to:   String,
    pub time:      f64,
}

impl EdgeRecord {
    pub fn new(city_from: impl Into<String>, city_to: impl Into<String>, time: f64) -> Self {
        Self { city_from: city_from.into(), city_to: city_to.into(), time }
    }
}
