//! CampusBites console
//!
//! Opens the record files and runs the interactive menu on stdin/stdout.

use std::io;

use campusbites::{Config, Driver, RecordStore};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// CampusBites cafeteria console
#[derive(Parser, Debug)]
#[command(name = "campusbites")]
#[command(about = "Manage a cafeteria menu, customers and orders")]
#[command(version)]
struct Args {
    /// Directory holding the record files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Menu file name inside the data directory
    #[arg(long, default_value = "menu.txt")]
    menu_file: String,

    /// Customer file name inside the data directory
    #[arg(long, default_value = "customers.txt")]
    customer_file: String,

    /// Start with an empty menu instead of the sample menu on first run
    #[arg(long)]
    no_sample_menu: bool,
}

fn main() {
    // Diagnostics go to stderr so they never interleave with the console
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("CampusBites v{}", campusbites::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .menu_file(&args.menu_file)
        .customer_file(&args.customer_file)
        .seed_sample_menu(!args.no_sample_menu)
        .build();

    // Startup failures are reported; the exit status stays 0
    let store = match RecordStore::open_with_config(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open records: {}", e);
            eprintln!("Could not open records: {}", e);
            return;
        }
    };

    let stdin = io::stdin();
    let mut driver = Driver::new(store, stdin.lock(), io::stdout());
    if let Err(e) = driver.run() {
        tracing::error!("Console error: {}", e);
        eprintln!("Console error: {}", e);
    }
}
