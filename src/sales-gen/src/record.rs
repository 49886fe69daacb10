use chrono::NaiveDate;
use rust_decimal::Decimal;
use strum_macros::Display;

use crate::catalog::Product;
use crate::catalog::Region;
use crate::catalog::Store;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display)]
pub enum Promo {
    Yes,
    No,
}

/// One generated row, keyed by (date, product, region), with the product and
/// the chosen store inlined.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub brand: String,
    pub region: Region,
    pub store_id: String,
    pub store_name: String,
    pub store_region: Region,
    pub store_latitude: f64,
    pub store_longitude: f64,
    pub units_sold: u16,
    pub unit_price: Decimal,
    pub promo: Promo,
    pub discount_pct: u8,
    pub revenue: Decimal,
}

impl SalesRecord {
    pub fn new(
        date: NaiveDate,
        product: &Product,
        region: Region,
        store: &Store,
        units_sold: u16,
        unit_price: Decimal,
        promo: Promo,
        discount_pct: u8,
    ) -> Self {
        Self {
            date,
            product_id: product.product_id.clone(),
            product_name: product.name.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            region,
            store_id: store.store_id.clone(),
            store_name: store.name.clone(),
            store_region: store.region,
            store_latitude: store.latitude,
            store_longitude: store.longitude,
            units_sold,
            unit_price,
            promo,
            discount_pct,
            revenue: Decimal::from(units_sold) * unit_price,
        }
    }
}
