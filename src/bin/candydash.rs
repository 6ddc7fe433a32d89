//! candydash - Interactive dashboard for a candy-route customer roster.
//!
//! Connects to the dashboard backend over HTTP, or runs fully offline on
//! embedded demo data:
//!   candydash --url http://localhost:5000
//!   CANDYDASH_URL=http://localhost:5000 candydash
//!   candydash --demo

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use candydash::client::{CustomerSource, DemoSource, HttpSource};
use candydash::tui::App;

/// Interactive dashboard for a candy-route customer roster.
#[derive(Parser)]
#[command(name = "candydash", about = "Candy route customer dashboard", version)]
struct Args {
    /// Base URL of the dashboard backend (e.g. http://localhost:5000).
    #[arg(long, env = "CANDYDASH_URL", conflicts_with = "demo")]
    url: Option<String>,

    /// Run on embedded demo data, no backend required.
    #[arg(long)]
    demo: bool,

    /// Clock refresh interval in seconds.
    #[arg(short, long, default_value = "1")]
    interval: u64,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("candydash={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let source: Arc<dyn CustomerSource + Send + Sync> = if args.demo {
        Arc::new(DemoSource::new())
    } else if let Some(url) = args.url.as_deref() {
        match HttpSource::new(url) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        eprintln!("Error: no backend configured");
        eprintln!("Usage: candydash --url http://localhost:5000   # live backend");
        eprintln!("       candydash --demo                        # embedded demo data");
        eprintln!("       (or set CANDYDASH_URL)");
        std::process::exit(1);
    };

    let app = match App::new(Arc::clone(&source)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error loading roster from {}: {}", source.label(), e);
            std::process::exit(1);
        }
    };

    let tick_rate = Duration::from_secs(args.interval.max(1));
    if let Err(e) = app.run(tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
