use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("center has {found} coordinates but the grid has {expected} dimensions")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("no angles given and the sample count is zero")]
    InvalidSampleCount,

    #[error("angle arrays have different shapes: {left:?} and {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
