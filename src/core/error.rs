use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Invalid grid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i64, height: i64 },

    #[error("Cell ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "Grid {width}x{height} is too small for pattern '{pattern}' (needs at least {min_width}x{min_height})"
    )]
    GridTooSmall {
        pattern: &'static str,
        min_width: usize,
        min_height: usize,
        width: usize,
        height: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
