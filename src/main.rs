use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use stepwise::core::config::{self, CliOverrides};
use stepwise::tui;

#[derive(Parser)]
#[command(name = "stepwise", about = "Two-screen terminal file wizard")]
struct Args {
    /// Directory to list on the first screen
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Simulated work delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Maximum number of directory entries to offer
    #[arg(long)]
    max_entries: Option<usize>,

    /// Log file path (default: debug.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Config file path (default: ~/.stepwise/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = config::load_config(args.config.as_deref()).map_err(io::Error::other)?;
    let cli = CliOverrides {
        directory: args.dir,
        max_entries: args.max_entries,
        delay_ms: args.delay_ms,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&loaded.config, &cli).map_err(io::Error::other)?;

    // The log sink is required: failing to open it is fatal
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(&resolved.log_file)?;
    WriteLogger::init(resolved.log_level, log_config, log_file).map_err(io::Error::other)?;

    match &loaded.source {
        Some(path) => log::info!("Loaded config from {}", path.display()),
        None => log::info!("No config file found, using defaults"),
    }
    log::debug!("Config: {:?}", loaded.config);

    log::info!(
        "Stepwise starting up in {} (delay {:?}, max {} entries)",
        resolved.directory.display(),
        resolved.delay,
        resolved.max_entries
    );

    tui::run(resolved)
}
