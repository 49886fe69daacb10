use clap::Parser;
use clap::Subcommand;
use cmd::command::generate;
use cmd::command::generate::Generate;
use cmd::config;
use cmd::error::Error;
use cmd::error::Result;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Generate the sales dataset and write it as CSV
    Generate(Generate),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    // no subcommand runs the default generation
    let gen_args = match args.command {
        Some(Commands::Generate(gen_args)) => gen_args,
        None => Generate::default(),
    };

    let cfg: common::config::Config = config::load(&gen_args)?.try_into()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.log.level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(Error::SetGlobalDefaultError)?;

    let version = env!("CARGO_PKG_VERSION");
    info!("sales v{version}");

    let summary = generate::run(cfg)?;
    info!("sales data: {:?}", summary.exported.sales_path);
    info!("dashboard data: {:?}", summary.exported.dashboard_path);

    Ok(())
}
