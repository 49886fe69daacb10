use arrow::array::Decimal128Builder;
use arrow::error::ArrowError;

use crate::DECIMAL_PRECISION;
use crate::DECIMAL_SCALE;

pub struct DecimalBuilder {}

impl DecimalBuilder {
    pub fn with_capacity(capacity: usize) -> Result<Decimal128Builder, ArrowError> {
        Decimal128Builder::with_capacity(capacity)
            .with_precision_and_scale(DECIMAL_PRECISION, DECIMAL_SCALE)
    }
}
