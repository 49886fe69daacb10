pub mod arrow;
pub mod config;
pub mod types;

pub use types::DECIMAL_PRECISION;
pub use types::DECIMAL_SCALE;
