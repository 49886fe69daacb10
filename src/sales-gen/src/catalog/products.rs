use std::collections::HashSet;
use std::io;

use serde::Deserialize;

use crate::error::Result;
use crate::error::SalesGenError;

const BUILTIN_PRODUCTS: &str = include_str!("../../data/products.csv");

#[derive(Debug, Clone, Deserialize)]
struct CSVProduct {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
}

/// Ordered product catalog. Row generation walks products in load order.
#[derive(Debug, Clone)]
pub struct ProductProvider {
    pub products: Vec<Product>,
}

impl ProductProvider {
    pub fn builtin() -> Result<Self> {
        Self::try_new_from_csv(BUILTIN_PRODUCTS.as_bytes())
    }

    pub fn try_new_from_csv<R: io::Read>(rdr: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(rdr);
        let mut products = Vec::with_capacity(16);
        let mut ids = HashSet::new();
        for res in rdr.deserialize() {
            let rec: CSVProduct = res?;
            if !ids.insert(rec.product_id.clone()) {
                return Err(SalesGenError::DuplicateId(format!(
                    "product {}",
                    rec.product_id
                )));
            }

            products.push(Product {
                product_id: rec.product_id,
                name: rec.name,
                category: rec.category,
                brand: rec.brand,
            });
        }

        if products.is_empty() {
            return Err(SalesGenError::EmptyCatalog("products".to_string()));
        }

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
