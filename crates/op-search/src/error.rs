use op_core::CityId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// The walk reached a city with nothing to move to.  Graphs produced by
    /// `op-graph` never contain such a city.
    #[error("city {city:?} has no neighbours to walk to")]
    NoNeighbors { city: String },

    #[error("start city {0} is not in the graph")]
    UnknownStart(CityId),

    #[error("graph has no cities to start from")]
    EmptyGraph,

    #[error("search configuration error: {0}")]
    Config(String),

    #[error("search cancelled")]
    Cancelled,

    #[error("search deadline exceeded")]
    DeadlineExceeded,
}

pub type SearchResult<T> = Result<T, SearchError>;
