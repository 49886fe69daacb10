use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;
use common::types::DASHBOARD_DATA_FILE;
use common::types::SALES_DATA_FILE;
use tracing::debug;
use tracing::info;

use crate::batch_builder::to_dashboard;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub sales_path: PathBuf,
    pub dashboard_path: PathBuf,
}

pub fn write_csv(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .build(BufWriter::new(file));
    writer.write(batch)?;
    writer.into_inner().flush()?;

    Ok(())
}

/// Writes the sales table and its text-dated dashboard copy into `dir`,
/// creating the directory first if needed.
pub fn export(dir: &Path, batch: &RecordBatch) -> Result<Exported> {
    fs::create_dir_all(dir)?;
    debug!("out path: {:?}", dir);

    let sales_path = dir.join(SALES_DATA_FILE);
    info!("writing {:?}...", sales_path);
    write_csv(&sales_path, batch)?;

    let dashboard_path = dir.join(DASHBOARD_DATA_FILE);
    info!("writing {:?}...", dashboard_path);
    write_csv(&dashboard_path, &to_dashboard(batch)?)?;

    Ok(Exported {
        sales_path,
        dashboard_path,
    })
}
