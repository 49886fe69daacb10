use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use bytesize::ByteSize;
use chrono::Duration;
use clap::Parser;
use common::config::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sales_gen::batch_builder;
use sales_gen::catalog::ProductProvider;
use sales_gen::catalog::StoreProvider;
use sales_gen::generator;
use sales_gen::generator::Generator;
use sales_gen::output;
use sales_gen::output::Exported;
use tracing::debug;
use tracing::info;

use crate::config::LogLevel;
use crate::error::Error;
use crate::error::Result;

#[derive(Parser, Clone, Debug, Default)]
pub struct Generate {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory the CSV files are written to
    #[arg(long)]
    pub out_path: Option<PathBuf>,
    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub from_date: Option<String>,
    /// Last day (inclusive), YYYY-MM-DD
    #[arg(long)]
    pub to_date: Option<String>,
    #[arg(long)]
    pub products_path: Option<PathBuf>,
    #[arg(long)]
    pub stores_path: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug)]
pub struct Summary {
    pub rows: usize,
    pub exported: Exported,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| Error::FileNotFound(format!("can't open {path:?}: {err}")))
}

pub fn run(cfg: Config) -> Result<Summary> {
    let started = Instant::now();

    info!("loading products...");
    let products = match &cfg.catalog.products_path {
        None => ProductProvider::builtin()?,
        Some(path) => ProductProvider::try_new_from_csv(open(path)?)?,
    };
    info!("loading stores...");
    let stores = match &cfg.catalog.stores_path {
        None => StoreProvider::builtin()?,
        Some(path) => StoreProvider::try_new_from_csv(open(path)?)?,
    };
    debug!("products: {}, stores: {}", products.len(), stores.len());

    let gen_cfg = generator::Config::try_from(&cfg.generator)?;
    let dates = gen_cfg.dates;
    debug!("from date {}", dates.from());
    debug!("to date {}", dates.to());
    debug!(
        "time range: {}",
        humantime::format_duration(Duration::days(dates.len() as i64).to_std()?)
    );

    let gen = Generator::try_new(gen_cfg, products, stores)?;
    let mut rng = match cfg.generator.seed {
        Some(seed) => {
            debug!("seed: {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    info!("generating simulated FMCG sales data...");
    let records = gen.generate(&mut rng)?;
    let batch = batch_builder::build(&records)?;
    debug!(
        "uncompressed dataset in-memory size: {}",
        ByteSize::b(batch_builder::memory_size(&batch) as u64)
    );
    debug!("first rows:\n{}", batch_builder::preview(&batch, 5)?);

    let exported = output::export(&cfg.output.path, &batch)?;
    info!(
        "data generation complete: {} rows in {}",
        batch.num_rows(),
        humantime::format_duration(started.elapsed())
    );

    Ok(Summary {
        rows: batch.num_rows(),
        exported,
    })
}
