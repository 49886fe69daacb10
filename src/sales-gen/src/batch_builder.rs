use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::array::Date32Builder;
use arrow::array::Decimal128Builder;
use arrow::array::Float64Builder;
use arrow::array::StringBuilder;
use arrow::array::UInt16Builder;
use arrow::array::UInt8Builder;
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::datatypes::Date32Type;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use common::arrow::DecimalBuilder;
use common::types::COLUMN_DATE;
use common::DECIMAL_SCALE;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::record::SalesRecord;
use crate::schema::dashboard_schema;
use crate::schema::sales_schema;

pub struct RecordBatchBuilder {
    date: Date32Builder,
    product_id: StringBuilder,
    product_name: StringBuilder,
    category: StringBuilder,
    brand: StringBuilder,
    region: StringBuilder,
    store_id: StringBuilder,
    store_name: StringBuilder,
    store_latitude: Float64Builder,
    store_longitude: Float64Builder,
    units_sold: UInt16Builder,
    unit_price: Decimal128Builder,
    promo: StringBuilder,
    discount_pct: UInt8Builder,
    revenue: Decimal128Builder,
    schema: SchemaRef,
    len: usize,
}

impl RecordBatchBuilder {
    pub fn new(cap: usize) -> Result<Self> {
        Ok(Self {
            date: Date32Builder::with_capacity(cap),
            product_id: StringBuilder::with_capacity(cap, cap * 5),
            product_name: StringBuilder::with_capacity(cap, cap * 16),
            category: StringBuilder::with_capacity(cap, cap * 12),
            brand: StringBuilder::with_capacity(cap, cap * 10),
            region: StringBuilder::with_capacity(cap, cap * 5),
            store_id: StringBuilder::with_capacity(cap, cap * 4),
            store_name: StringBuilder::with_capacity(cap, cap * 16),
            store_latitude: Float64Builder::with_capacity(cap),
            store_longitude: Float64Builder::with_capacity(cap),
            units_sold: UInt16Builder::with_capacity(cap),
            unit_price: DecimalBuilder::with_capacity(cap)?,
            promo: StringBuilder::with_capacity(cap, cap * 3),
            discount_pct: UInt8Builder::with_capacity(cap),
            revenue: DecimalBuilder::with_capacity(cap)?,
            schema: Arc::new(sales_schema()),
            len: 0,
        })
    }

    pub fn append(&mut self, rec: &SalesRecord) {
        self.date.append_value(Date32Type::from_naive_date(rec.date));
        self.product_id.append_value(&rec.product_id);
        self.product_name.append_value(&rec.product_name);
        self.category.append_value(&rec.category);
        self.brand.append_value(&rec.brand);
        self.region.append_value(rec.region.to_string());
        self.store_id.append_value(&rec.store_id);
        self.store_name.append_value(&rec.store_name);
        self.store_latitude.append_value(rec.store_latitude);
        self.store_longitude.append_value(rec.store_longitude);
        self.units_sold.append_value(rec.units_sold);
        self.unit_price.append_value(cents(rec.unit_price));
        self.promo.append_value(rec.promo.to_string());
        self.discount_pct.append_value(rec.discount_pct);
        self.revenue.append_value(cents(rec.revenue));

        self.len += 1;
    }

    pub fn build_record_batch(&mut self) -> Result<RecordBatch> {
        let cols: Vec<ArrayRef> = vec![
            Arc::new(self.date.finish()),
            Arc::new(self.product_id.finish()),
            Arc::new(self.product_name.finish()),
            Arc::new(self.category.finish()),
            Arc::new(self.brand.finish()),
            Arc::new(self.region.finish()),
            Arc::new(self.store_id.finish()),
            Arc::new(self.store_name.finish()),
            Arc::new(self.store_latitude.finish()),
            Arc::new(self.store_longitude.finish()),
            Arc::new(self.units_sold.finish()),
            Arc::new(self.unit_price.finish()),
            Arc::new(self.promo.finish()),
            Arc::new(self.discount_pct.finish()),
            Arc::new(self.revenue.finish()),
        ];

        let batch = RecordBatch::try_new(self.schema.clone(), cols)?;

        self.len = 0;
        Ok(batch)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// mantissa at the column scale
fn cents(mut v: Decimal) -> i128 {
    v.rescale(DECIMAL_SCALE as u32);
    v.mantissa()
}

pub fn build(records: &[SalesRecord]) -> Result<RecordBatch> {
    let mut builder = RecordBatchBuilder::new(records.len())?;
    for rec in records {
        builder.append(rec);
    }

    builder.build_record_batch()
}

/// Copy of `batch` with the date column cast to text, for consumers that
/// can't read native dates.
pub fn to_dashboard(batch: &RecordBatch) -> Result<RecordBatch> {
    let date_idx = batch.schema().index_of(COLUMN_DATE)?;
    let mut cols = batch.columns().to_vec();
    cols[date_idx] = cast(&cols[date_idx], &DataType::Utf8)?;

    Ok(RecordBatch::try_new(Arc::new(dashboard_schema()), cols)?)
}

/// First `n` rows rendered as a text table.
pub fn preview(batch: &RecordBatch, n: usize) -> Result<String> {
    let head = batch.slice(0, n.min(batch.num_rows()));
    Ok(pretty_format_batches(&[head])?.to_string())
}

pub fn memory_size(batch: &RecordBatch) -> usize {
    batch
        .columns()
        .iter()
        .map(|c| c.get_array_memory_size())
        .sum()
}
