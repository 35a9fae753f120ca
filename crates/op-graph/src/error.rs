//! Graph construction errors.

use thiserror::Error;

/// Errors produced while building a [`Graph`](crate::Graph).
///
/// All of them are fatal to the solve request; no partial graph is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge {city_from:?} - {city_to:?} references unknown city {missing:?}")]
    UnknownCity {
        city_from: String,
        city_to:   String,
        missing:   String,
    },

    #[error("invalid graph: {0}")]
    Invalid(#[from] InvalidGraph),
}

/// Structural problems that would make the graph unusable for searching.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidGraph {
    #[error("edge {city_from:?} - {city_to:?} has non-positive travel time {time}")]
    NonPositiveTime {
        city_from: String,
        city_to:   String,
        time:      f64,
    },

    #[error("city {0:?} has no neighbours")]
    IsolatedCity(String),

    #[error("city {0:?} is defined more than once")]
    DuplicateCity(String),

    #[error("city {city:?} has invalid reward value {value}")]
    InvalidValue { city: String, value: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
