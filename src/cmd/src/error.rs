use std::result;

use sales_gen::error::SalesGenError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("SalesGen: {0:?}")]
    SalesGen(#[from] SalesGenError),
    #[error("FileNotFound: {0:?}")]
    FileNotFound(String),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("Config: {0:?}")]
    Config(#[from] ::config::ConfigError),
    #[error("ParseDate: {0:?}")]
    ParseDate(#[from] chrono::ParseError),
    #[error("TimeDurationOutOfRange: {0:?}")]
    TimeDurationOutOfRange(#[from] chrono::OutOfRangeError),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(tracing::subscriber::SetGlobalDefaultError),
}
