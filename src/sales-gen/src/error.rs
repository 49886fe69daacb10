use std::result;

use arrow::error::ArrowError;
use thiserror::Error;

use crate::catalog::regions::Region;

pub type Result<T> = result::Result<T, SalesGenError>;

#[derive(Error, Debug)]
pub enum SalesGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("InvalidConfig: {0:?}")]
    InvalidConfig(String),
    #[error("region {0} has no stores")]
    EmptyRegion(Region),
    #[error("DuplicateId: {0:?}")]
    DuplicateId(String),
    #[error("EmptyCatalog: {0:?}")]
    EmptyCatalog(String),
    #[error("ArrowError: {0:?}")]
    ArrowError(#[from] ArrowError),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("UnknownRegion: {0:?}")]
    UnknownRegion(#[from] strum::ParseError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
}
