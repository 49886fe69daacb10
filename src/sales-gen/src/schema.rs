use arrow::datatypes::DataType;
use arrow::datatypes::Field;
use arrow::datatypes::Schema;
use common::types::COLUMN_BRAND;
use common::types::COLUMN_CATEGORY;
use common::types::COLUMN_DATE;
use common::types::COLUMN_DISCOUNT_PCT;
use common::types::COLUMN_PRODUCT_ID;
use common::types::COLUMN_PRODUCT_NAME;
use common::types::COLUMN_PROMO;
use common::types::COLUMN_REGION;
use common::types::COLUMN_REVENUE;
use common::types::COLUMN_STORE_ID;
use common::types::COLUMN_STORE_LATITUDE;
use common::types::COLUMN_STORE_LONGITUDE;
use common::types::COLUMN_STORE_NAME;
use common::types::COLUMN_UNITS_SOLD;
use common::types::COLUMN_UNIT_PRICE;
use common::DECIMAL_PRECISION;
use common::DECIMAL_SCALE;

/// Schema of the in-memory table, with a native `Date32` date column.
pub fn sales_schema() -> Schema {
    Schema::new(fields(DataType::Date32))
}

/// Same columns as [`sales_schema`], date rendered as `YYYY-MM-DD` text.
pub fn dashboard_schema() -> Schema {
    Schema::new(fields(DataType::Utf8))
}

fn fields(date_type: DataType) -> Vec<Field> {
    let money = DataType::Decimal128(DECIMAL_PRECISION, DECIMAL_SCALE);
    vec![
        Field::new(COLUMN_DATE, date_type, false),
        Field::new(COLUMN_PRODUCT_ID, DataType::Utf8, false),
        Field::new(COLUMN_PRODUCT_NAME, DataType::Utf8, false),
        Field::new(COLUMN_CATEGORY, DataType::Utf8, false),
        Field::new(COLUMN_BRAND, DataType::Utf8, false),
        Field::new(COLUMN_REGION, DataType::Utf8, false),
        Field::new(COLUMN_STORE_ID, DataType::Utf8, false),
        Field::new(COLUMN_STORE_NAME, DataType::Utf8, false),
        Field::new(COLUMN_STORE_LATITUDE, DataType::Float64, false),
        Field::new(COLUMN_STORE_LONGITUDE, DataType::Float64, false),
        Field::new(COLUMN_UNITS_SOLD, DataType::UInt16, false),
        Field::new(COLUMN_UNIT_PRICE, money.clone(), false),
        Field::new(COLUMN_PROMO, DataType::Utf8, false),
        Field::new(COLUMN_DISCOUNT_PCT, DataType::UInt8, false),
        Field::new(COLUMN_REVENUE, money, false),
    ]
}

#[cfg(test)]
mod tests {
    use arrow::datatypes::DataType;
    use common::types::COLUMNS;

    use super::dashboard_schema;
    use super::sales_schema;

    #[test]
    fn test_column_order() {
        for schema in [sales_schema(), dashboard_schema()] {
            let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
            assert_eq!(names, COLUMNS.to_vec());
        }
    }

    #[test]
    fn test_only_date_differs() {
        let sales = sales_schema();
        let dashboard = dashboard_schema();
        assert_eq!(sales.field(0).data_type(), &DataType::Date32);
        assert_eq!(dashboard.field(0).data_type(), &DataType::Utf8);
        for idx in 1..sales.fields().len() {
            assert_eq!(sales.field(idx), dashboard.field(idx));
        }
    }
}
