use std::collections::HashMap;
use std::collections::HashSet;
use std::io;
use std::str::FromStr;

use enum_iterator::all;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::catalog::regions::Region;
use crate::error::Result;
use crate::error::SalesGenError;

const BUILTIN_STORES: &str = include_str!("../../data/stores.csv");

#[derive(Debug, Clone, Deserialize)]
struct CSVStore {
    pub store_id: String,
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub store_id: String,
    pub name: String,
    pub region: Region,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug)]
pub struct StoreProvider {
    pub stores: Vec<Store>,
    // positions in `stores`, grouped by region in load order
    by_region: HashMap<Region, Vec<usize>>,
}

impl StoreProvider {
    pub fn builtin() -> Result<Self> {
        Self::try_new_from_csv(BUILTIN_STORES.as_bytes())
    }

    pub fn try_new_from_csv<R: io::Read>(rdr: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(rdr);
        let mut stores = Vec::with_capacity(32);
        let mut ids = HashSet::new();
        for res in rdr.deserialize() {
            let rec: CSVStore = res?;
            if !ids.insert(rec.store_id.clone()) {
                return Err(SalesGenError::DuplicateId(format!("store {}", rec.store_id)));
            }

            stores.push(Store {
                store_id: rec.store_id,
                name: rec.name,
                region: Region::from_str(rec.region.trim())?,
                latitude: rec.latitude,
                longitude: rec.longitude,
            });
        }

        if stores.is_empty() {
            return Err(SalesGenError::EmptyCatalog("stores".to_string()));
        }

        Ok(Self::new(stores))
    }

    pub fn new(stores: Vec<Store>) -> Self {
        let mut by_region: HashMap<Region, Vec<usize>> = HashMap::new();
        for (idx, store) in stores.iter().enumerate() {
            by_region.entry(store.region).or_default().push(idx);
        }

        Self { stores, by_region }
    }

    pub fn region_stores(&self, region: Region) -> impl Iterator<Item = &Store> {
        self.by_region
            .get(&region)
            .into_iter()
            .flatten()
            .map(|idx| &self.stores[*idx])
    }

    /// Fails on the first region, in generation order, that has no stores.
    pub fn ensure_regions_covered(&self) -> Result<()> {
        for region in all::<Region>() {
            if self.by_region.get(&region).map_or(true, |v| v.is_empty()) {
                return Err(SalesGenError::EmptyRegion(region));
            }
        }

        Ok(())
    }

    /// Uniform choice among the stores of `region`. Draws are independent,
    /// nothing is remembered between calls.
    pub fn sample<R: Rng + ?Sized>(&self, region: Region, rng: &mut R) -> Result<&Store> {
        self.by_region
            .get(&region)
            .and_then(|idx| idx.choose(rng))
            .map(|idx| &self.stores[*idx])
            .ok_or(SalesGenError::EmptyRegion(region))
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use enum_iterator::all;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::StoreProvider;
    use crate::catalog::regions::Region;
    use crate::error::SalesGenError;

    #[test]
    fn test_builtin() {
        let prov = StoreProvider::builtin().unwrap();
        assert_eq!(prov.len(), 20);
        prov.ensure_regions_covered().unwrap();
        for region in all::<Region>() {
            assert_eq!(prov.region_stores(region).count(), 5);
        }

        let s = &prov.stores[0];
        assert_eq!(s.store_id, "S001");
        assert_eq!(s.name, "MetroMart North");
        assert_eq!(s.region, Region::North);
        assert_eq!(s.latitude, 6.54321);
        assert_eq!(s.longitude, 3.32109);
    }

    #[test]
    fn test_sample_stays_in_region() {
        let prov = StoreProvider::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for region in all::<Region>() {
            let mut seen = HashSet::new();
            for _ in 0..500 {
                let store = prov.sample(region, &mut rng).unwrap();
                assert_eq!(store.region, region);
                seen.insert(store.store_id.clone());
            }
            // memoryless uniform choice reaches every store of the region
            assert_eq!(seen.len(), prov.region_stores(region).count());
        }
    }

    #[test]
    fn test_uncovered_region() {
        let data = "store_id,name,region,latitude,longitude\n\
                    S1,A,North,1.0,1.0\n\
                    S2,B,South,1.0,1.0\n\
                    S3,C,West,1.0,1.0\n";
        let prov = StoreProvider::try_new_from_csv(data.as_bytes()).unwrap();
        let err = prov.ensure_regions_covered().unwrap_err();
        assert!(matches!(err, SalesGenError::EmptyRegion(Region::East)));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            prov.sample(Region::East, &mut rng),
            Err(SalesGenError::EmptyRegion(Region::East))
        ));
    }

    #[test]
    fn test_unknown_region() {
        let data = "store_id,name,region,latitude,longitude\nS1,A,Central,1.0,1.0\n";
        let err = StoreProvider::try_new_from_csv(data.as_bytes()).err().unwrap();
        assert!(matches!(err, SalesGenError::UnknownRegion(_)));
    }

    #[test]
    fn test_duplicate_id() {
        let data = "store_id,name,region,latitude,longitude\n\
                    S1,A,North,1.0,1.0\n\
                    S1,B,South,1.0,1.0\n";
        let err = StoreProvider::try_new_from_csv(data.as_bytes()).err().unwrap();
        assert!(matches!(err, SalesGenError::DuplicateId(_)));
    }
}
