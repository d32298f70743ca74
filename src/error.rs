use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset index {index} out of range (datasets: {len})")]
    DatasetOutOfRange { index: usize, len: usize },

    #[error("element index {index} out of range (elements: {len})")]
    ElementOutOfRange { index: usize, len: usize },

    #[error("no {axis} axis configured")]
    MissingAxis { axis: &'static str },

    #[error("unknown scale id `{0}`")]
    UnknownScale(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),
}
