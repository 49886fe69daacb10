// currency columns (unit price, revenue) are stored as fixed-point cents
pub const DECIMAL_PRECISION: u8 = 12;
pub const DECIMAL_SCALE: i8 = 2;

pub const COLUMN_DATE: &str = "date";
pub const COLUMN_PRODUCT_ID: &str = "product_id";
pub const COLUMN_PRODUCT_NAME: &str = "product_name";
pub const COLUMN_CATEGORY: &str = "category";
pub const COLUMN_BRAND: &str = "brand";
pub const COLUMN_REGION: &str = "region";
pub const COLUMN_STORE_ID: &str = "store_id";
pub const COLUMN_STORE_NAME: &str = "store_name";
pub const COLUMN_STORE_LATITUDE: &str = "store_latitude";
pub const COLUMN_STORE_LONGITUDE: &str = "store_longitude";
pub const COLUMN_UNITS_SOLD: &str = "units_sold";
pub const COLUMN_UNIT_PRICE: &str = "unit_price";
pub const COLUMN_PROMO: &str = "promo";
pub const COLUMN_DISCOUNT_PCT: &str = "discount_pct";
pub const COLUMN_REVENUE: &str = "revenue";

/// Output column order, shared by both exported files.
pub const COLUMNS: [&str; 15] = [
    COLUMN_DATE,
    COLUMN_PRODUCT_ID,
    COLUMN_PRODUCT_NAME,
    COLUMN_CATEGORY,
    COLUMN_BRAND,
    COLUMN_REGION,
    COLUMN_STORE_ID,
    COLUMN_STORE_NAME,
    COLUMN_STORE_LATITUDE,
    COLUMN_STORE_LONGITUDE,
    COLUMN_UNITS_SOLD,
    COLUMN_UNIT_PRICE,
    COLUMN_PROMO,
    COLUMN_DISCOUNT_PCT,
    COLUMN_REVENUE,
];

pub const DEFAULT_OUT_PATH: &str = "fmcg-sales-analysis";
pub const SALES_DATA_FILE: &str = "fmcg_sales_data.csv";
pub const DASHBOARD_DATA_FILE: &str = "fmcg_dashboard_data.csv";
