use std::ops::Range;

use chrono::NaiveDate;
use common::DECIMAL_PRECISION;
use common::DECIMAL_SCALE;
use enum_iterator::all;
use enum_iterator::cardinality;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;
use tracing::info;

use crate::calendar::DateRange;
use crate::catalog::ProductProvider;
use crate::catalog::Region;
use crate::catalog::StoreProvider;
use crate::error::Result;
use crate::error::SalesGenError;
use crate::probability::Categorical;
use crate::record::Promo;
use crate::record::SalesRecord;

pub struct Config {
    pub dates: DateRange,
    pub units_sold: Range<u16>,
    // prices are drawn in whole cents, i.e. already rounded to 2 decimals
    pub unit_price_cents: Range<i64>,
    pub promo_probability: f64,
    pub discount_weights: Vec<(u8, f64)>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = common::config::Generator::default();
        Self {
            dates: DateRange::default(),
            units_sold: cfg.units_min..cfg.units_max,
            unit_price_cents: cfg.price_min_cents..cfg.price_max_cents,
            promo_probability: cfg.promo_probability,
            discount_weights: default_discount_weights(),
        }
    }
}

pub fn default_discount_weights() -> Vec<(u8, f64)> {
    vec![(10, 0.4), (15, 0.3), (20, 0.3)]
}

impl TryFrom<&common::config::Generator> for Config {
    type Error = SalesGenError;

    fn try_from(cfg: &common::config::Generator) -> Result<Self> {
        Ok(Self {
            dates: DateRange::try_new(cfg.from_date, cfg.to_date)?,
            units_sold: cfg.units_min..cfg.units_max,
            unit_price_cents: cfg.price_min_cents..cfg.price_max_cents,
            promo_probability: cfg.promo_probability,
            discount_weights: default_discount_weights(),
        })
    }
}

pub struct Generator {
    dates: DateRange,
    units_sold: Range<u16>,
    unit_price_cents: Range<i64>,
    products: ProductProvider,
    stores: StoreProvider,
    promo: Categorical<Promo>,
    discount: Categorical<u8>,
}

impl Generator {
    pub fn try_new(cfg: Config, products: ProductProvider, stores: StoreProvider) -> Result<Self> {
        if cfg.units_sold.is_empty() {
            return Err(SalesGenError::InvalidConfig(format!(
                "empty units sold range {:?}",
                cfg.units_sold
            )));
        }
        if cfg.unit_price_cents.is_empty() || cfg.unit_price_cents.start < 0 {
            return Err(SalesGenError::InvalidConfig(format!(
                "bad unit price range (cents) {:?}",
                cfg.unit_price_cents
            )));
        }
        if !(0. ..=1.).contains(&cfg.promo_probability) {
            return Err(SalesGenError::InvalidConfig(format!(
                "promo probability {} is out of [0, 1]",
                cfg.promo_probability
            )));
        }
        // largest price and revenue mantissas must fit the currency columns
        let max_price = cfg.unit_price_cents.end as i128 - 1;
        let max_revenue = (cfg.units_sold.end as i128 - 1) * max_price;
        if max_price.max(max_revenue) >= 10i128.pow(DECIMAL_PRECISION as u32) {
            return Err(SalesGenError::InvalidConfig(format!(
                "units sold {:?} and unit price (cents) {:?} overflow {} digit currency columns",
                cfg.units_sold, cfg.unit_price_cents, DECIMAL_PRECISION
            )));
        }
        if products.is_empty() {
            return Err(SalesGenError::EmptyCatalog("products".to_string()));
        }
        stores.ensure_regions_covered()?;

        let promo = Categorical::try_new(vec![
            (Promo::Yes, cfg.promo_probability),
            (Promo::No, 1. - cfg.promo_probability),
        ])?;
        let discount = Categorical::try_new(cfg.discount_weights)?;

        Ok(Self {
            dates: cfg.dates,
            units_sold: cfg.units_sold,
            unit_price_cents: cfg.unit_price_cents,
            products,
            stores,
            promo,
            discount,
        })
    }

    pub fn expected_rows(&self) -> usize {
        self.dates.len() * self.products.len() * cardinality::<Region>()
    }

    pub fn dates(&self) -> &DateRange {
        &self.dates
    }

    /// Produces one record per (date, product, region), dates ascending, then
    /// products in catalog order, then regions in declaration order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<SalesRecord>> {
        debug!(
            "dates: {} ({} .. {}), products: {}, stores: {}",
            self.dates.len(),
            self.dates.from(),
            self.dates.to(),
            self.products.len(),
            self.stores.len()
        );
        info!("generating {} sales records...", self.expected_rows());

        let mut records = Vec::with_capacity(self.expected_rows());
        for date in self.dates.iter() {
            self.generate_day(date, rng, &mut records)?;
        }

        Ok(records)
    }

    fn generate_day<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        rng: &mut R,
        out: &mut Vec<SalesRecord>,
    ) -> Result<()> {
        for product in self.products.products.iter() {
            for region in all::<Region>() {
                let store = self.stores.sample(region, rng)?;
                let units_sold = rng.gen_range(self.units_sold.clone());
                let unit_price = Decimal::new(
                    rng.gen_range(self.unit_price_cents.clone()),
                    DECIMAL_SCALE as u32,
                );
                let promo = *self.promo.sample(rng);
                let discount_pct = match promo {
                    Promo::Yes => *self.discount.sample(rng),
                    Promo::No => 0,
                };

                out.push(SalesRecord::new(
                    date,
                    product,
                    region,
                    store,
                    units_sold,
                    unit_price,
                    promo,
                    discount_pct,
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use enum_iterator::all;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    use super::Config;
    use super::Generator;
    use crate::calendar::DateRange;
    use crate::catalog::ProductProvider;
    use crate::catalog::Region;
    use crate::catalog::StoreProvider;
    use crate::error::SalesGenError;
    use crate::record::Promo;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn builtin_generator(cfg: Config) -> Generator {
        Generator::try_new(
            cfg,
            ProductProvider::builtin().unwrap(),
            StoreProvider::builtin().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_full_range() {
        let gen = builtin_generator(Config::default());
        assert_eq!(gen.expected_rows(), 5824);

        let mut rng = StdRng::seed_from_u64(2024);
        let records = gen.generate(&mut rng).unwrap();
        assert_eq!(records.len(), 182 * 8 * 4);

        let stores = StoreProvider::builtin().unwrap();
        for rec in records.iter() {
            assert_eq!(rec.revenue, Decimal::from(rec.units_sold) * rec.unit_price);
            match rec.promo {
                Promo::Yes => assert!([10, 15, 20].contains(&rec.discount_pct)),
                Promo::No => assert_eq!(rec.discount_pct, 0),
            }
            assert_eq!(rec.store_region, rec.region);
            let store = stores
                .stores
                .iter()
                .find(|s| s.store_id == rec.store_id)
                .unwrap();
            assert_eq!(store.region, rec.region);
            assert_eq!(store.name, rec.store_name);
            assert!((30..200).contains(&rec.units_sold));
            assert!(rec.unit_price >= Decimal::new(100, 2));
            assert!(rec.unit_price < Decimal::new(600, 2));
            assert_eq!(rec.unit_price.scale(), 2);
        }

        assert_eq!(records.first().unwrap().date, d(2024, 1, 1));
        assert_eq!(records.last().unwrap().date, d(2024, 6, 30));
    }

    #[test]
    fn test_row_order() {
        let gen = builtin_generator(Config::default());
        let products = ProductProvider::builtin().unwrap();
        let regions: Vec<Region> = all::<Region>().collect();
        let mut rng = StdRng::seed_from_u64(3);
        let records = gen.generate(&mut rng).unwrap();

        let mut it = records.iter();
        for date in gen.dates().iter() {
            for product in products.products.iter() {
                for region in regions.iter() {
                    let rec = it.next().unwrap();
                    assert_eq!(rec.date, date);
                    assert_eq!(rec.product_id, product.product_id);
                    assert_eq!(rec.product_name, product.name);
                    assert_eq!(rec.category, product.category);
                    assert_eq!(rec.brand, product.brand);
                    assert_eq!(rec.region, *region);
                }
            }
        }
        assert!(it.next().is_none());
    }

    #[test]
    fn test_single_day() {
        let cfg = Config {
            dates: DateRange::try_new(d(2024, 1, 1), d(2024, 1, 1)).unwrap(),
            ..Default::default()
        };
        let gen = builtin_generator(cfg);
        let mut rng = StdRng::seed_from_u64(11);
        let records = gen.generate(&mut rng).unwrap();
        assert_eq!(records.len(), 32);

        let mut keys: Vec<(String, Region)> = records
            .iter()
            .map(|r| (r.product_id.clone(), r.region))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 32);

        for rec in records.iter() {
            assert!(!rec.store_id.is_empty());
            assert!(!rec.store_name.is_empty());
            assert_eq!(rec.store_region, rec.region);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let gen = builtin_generator(Config::default());
        let a = gen.generate(&mut StdRng::seed_from_u64(99)).unwrap();
        let b = gen.generate(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);

        let c = gen.generate(&mut StdRng::seed_from_u64(100)).unwrap();
        assert_eq!(a.len(), c.len());
        for (x, y) in a.iter().zip(c.iter()) {
            assert_eq!(x.date, y.date);
            assert_eq!(x.product_id, y.product_id);
            assert_eq!(x.product_name, y.product_name);
            assert_eq!(x.category, y.category);
            assert_eq!(x.brand, y.brand);
            assert_eq!(x.region, y.region);
        }
        assert_ne!(a, c);
    }

    #[test]
    fn test_store_choice_is_not_sticky() {
        // the same (product, region) pair may land on different stores across dates
        let gen = builtin_generator(Config::default());
        let records = gen.generate(&mut StdRng::seed_from_u64(5)).unwrap();
        let stores: std::collections::HashSet<&str> = records
            .iter()
            .filter(|r| r.product_id == "P1001" && r.region == Region::North)
            .map(|r| r.store_id.as_str())
            .collect();
        assert!(stores.len() > 1);
    }

    #[test]
    fn test_promo_edges() {
        let week = DateRange::try_new(d(2024, 3, 1), d(2024, 3, 7)).unwrap();
        let never = builtin_generator(Config {
            dates: week,
            promo_probability: 0.,
            ..Default::default()
        });
        for rec in never.generate(&mut StdRng::seed_from_u64(1)).unwrap() {
            assert_eq!(rec.promo, Promo::No);
            assert_eq!(rec.discount_pct, 0);
        }

        let always = builtin_generator(Config {
            dates: week,
            promo_probability: 1.,
            ..Default::default()
        });
        for rec in always.generate(&mut StdRng::seed_from_u64(1)).unwrap() {
            assert_eq!(rec.promo, Promo::Yes);
            assert!([10, 15, 20].contains(&rec.discount_pct));
        }
    }

    #[test]
    fn test_promo_share() {
        let gen = builtin_generator(Config::default());
        let records = gen.generate(&mut StdRng::seed_from_u64(8)).unwrap();
        let promos = records.iter().filter(|r| r.promo == Promo::Yes).count();
        let share = promos as f64 / records.len() as f64;
        assert!((share - 0.3).abs() < 0.03, "promo share {share}");
    }

    #[test]
    fn test_invalid_config() {
        let bad = [
            Config {
                units_sold: 200..30,
                ..Default::default()
            },
            Config {
                unit_price_cents: 600..600,
                ..Default::default()
            },
            Config {
                promo_probability: 1.5,
                ..Default::default()
            },
            Config {
                promo_probability: f64::NAN,
                ..Default::default()
            },
            Config {
                discount_weights: vec![],
                ..Default::default()
            },
        ];
        for cfg in bad {
            assert!(Generator::try_new(
                cfg,
                ProductProvider::builtin().unwrap(),
                StoreProvider::builtin().unwrap()
            )
            .is_err());
        }
    }

    #[test]
    fn test_currency_overflow() {
        let overflowing = [
            Config {
                unit_price_cents: 100_000_000_000..100_000_000_001,
                ..Default::default()
            },
            Config {
                units_sold: 1..2,
                unit_price_cents: 1_000_000_000_000..1_000_000_000_001,
                ..Default::default()
            },
            Config {
                units_sold: 30..u16::MAX,
                unit_price_cents: 100..20_000_000,
                ..Default::default()
            },
        ];
        for cfg in overflowing {
            let res = Generator::try_new(
                cfg,
                ProductProvider::builtin().unwrap(),
                StoreProvider::builtin().unwrap(),
            );
            assert!(matches!(res, Err(SalesGenError::InvalidConfig(_))));
        }

        // largest revenue that still fits 12 digits
        let widest = Config {
            units_sold: 1..2,
            unit_price_cents: 999_999_999_999..1_000_000_000_000,
            ..Default::default()
        };
        assert!(Generator::try_new(
            widest,
            ProductProvider::builtin().unwrap(),
            StoreProvider::builtin().unwrap()
        )
        .is_ok());
    }

    #[test]
    fn test_region_without_stores() {
        let data = "store_id,name,region,latitude,longitude\n\
                    S1,A,North,1.0,1.0\n\
                    S2,B,South,1.0,1.0\n\
                    S3,C,East,1.0,1.0\n";
        let stores = StoreProvider::try_new_from_csv(data.as_bytes()).unwrap();
        let res = Generator::try_new(
            Config::default(),
            ProductProvider::builtin().unwrap(),
            stores,
        );
        assert!(matches!(res, Err(SalesGenError::EmptyRegion(Region::West))));
    }
}
