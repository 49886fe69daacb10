use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::command::generate::Generate;
use crate::error::Result;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Output {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Generator {
    pub from_date: String,
    pub to_date: String,
    pub seed: Option<u64>,
    pub units_min: u16,
    pub units_max: u16,
    pub price_min_cents: i64,
    pub price_max_cents: i64,
    pub promo_probability: f64,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    pub products_path: Option<PathBuf>,
    pub stores_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    pub output: Output,
    pub generator: Generator,
    #[serde(default)]
    pub catalog: Catalog,
    pub log: Log,
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Builds the config from built-in defaults, then the optional config file,
/// then command line flags. Later sources win.
pub fn load(args: &Generate) -> Result<Config> {
    let defaults = common::config::Config::default();
    let mut builder = ::config::Config::builder()
        .set_default("output.path", path_value(&defaults.output.path))?
        .set_default(
            "generator.from_date",
            defaults.generator.from_date.to_string(),
        )?
        .set_default("generator.to_date", defaults.generator.to_date.to_string())?
        .set_default("generator.units_min", defaults.generator.units_min as i64)?
        .set_default("generator.units_max", defaults.generator.units_max as i64)?
        .set_default(
            "generator.price_min_cents",
            defaults.generator.price_min_cents,
        )?
        .set_default(
            "generator.price_max_cents",
            defaults.generator.price_max_cents,
        )?
        .set_default(
            "generator.promo_probability",
            defaults.generator.promo_probability,
        )?
        .set_default("log.level", LogLevel::Info.as_str())?;

    if let Some(path) = &args.config {
        builder = builder.add_source(::config::File::from(path.clone()));
    }

    let config = builder
        .set_override_option("output.path", args.out_path.as_deref().map(path_value))?
        .set_override_option("generator.seed", args.seed)?
        .set_override_option("generator.from_date", args.from_date.clone())?
        .set_override_option("generator.to_date", args.to_date.clone())?
        .set_override_option(
            "catalog.products_path",
            args.products_path.as_deref().map(path_value),
        )?
        .set_override_option(
            "catalog.stores_path",
            args.stores_path.as_deref().map(path_value),
        )?
        .set_override_option("log.level", args.log_level.map(|l| l.as_str()))?
        .build()?;

    Ok(config.try_deserialize()?)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::from_str(s.trim())?)
}

impl TryInto<common::config::Config> for Config {
    type Error = crate::error::Error;

    fn try_into(self) -> std::result::Result<common::config::Config, Self::Error> {
        Ok(common::config::Config {
            output: common::config::Output {
                path: self.output.path,
            },
            generator: common::config::Generator {
                from_date: parse_date(&self.generator.from_date)?,
                to_date: parse_date(&self.generator.to_date)?,
                seed: self.generator.seed,
                units_min: self.generator.units_min,
                units_max: self.generator.units_max,
                price_min_cents: self.generator.price_min_cents,
                price_max_cents: self.generator.price_max_cents,
                promo_probability: self.generator.promo_probability,
            },
            catalog: common::config::Catalog {
                products_path: self.catalog.products_path,
                stores_path: self.catalog.stores_path,
            },
            log: common::config::Log {
                level: self.log.level.into(),
            },
        })
    }
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}
