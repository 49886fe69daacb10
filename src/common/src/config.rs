use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::level_filters::LevelFilter;

use crate::types::DEFAULT_OUT_PATH;

#[derive(Debug, Clone)]
pub struct Output {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Generator {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub seed: Option<u64>,
    // half-open: [units_min, units_max)
    pub units_min: u16,
    pub units_max: u16,
    // half-open: [price_min_cents, price_max_cents)
    pub price_min_cents: i64,
    pub price_max_cents: i64,
    pub promo_probability: f64,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub products_path: Option<PathBuf>,
    pub stores_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output: Output,
    pub generator: Generator,
    pub catalog: Catalog,
    pub log: Log,
}

impl Default for Generator {
    fn default() -> Self {
        Generator {
            from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            to_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default(),
            seed: None,
            units_min: 30,
            units_max: 200,
            price_min_cents: 100,
            price_max_cents: 600,
            promo_probability: 0.3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: Output {
                path: PathBuf::from(DEFAULT_OUT_PATH),
            },
            generator: Generator::default(),
            catalog: Catalog {
                products_path: None,
                stores_path: None,
            },
            log: Log {
                level: LevelFilter::INFO,
            },
        }
    }
}
