pub mod products;
pub mod regions;
pub mod stores;

pub use products::Product;
pub use products::ProductProvider;
pub use regions::Region;
pub use stores::Store;
pub use stores::StoreProvider;
