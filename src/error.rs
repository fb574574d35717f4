use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("container `{container_id}` not found on the surface")]
    ContainerNotFound { container_id: String },

    #[error("no chart registered for container `{container_id}`")]
    ChartNotRegistered { container_id: String },

    #[error("field `{field}` missing from feed frame")]
    MissingField { field: String },

    #[error("malformed data: {0}")]
    MalformedData(String),

    #[error("series count changed mid-lifetime: expected {expected}, got {actual}")]
    SeriesCountMismatch { expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
