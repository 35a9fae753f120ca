use op_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("{table} table parse error: {message}")]
    Parse { table: &'static str, message: String },

    #[error("time table has no rows")]
    MissingBudget,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type IoResult<T> = Result<T, IoError>;
