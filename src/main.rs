mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use motile::report;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report {
            records,
            common,
            model,
            now,
        } => report::run_report(&records, common.json, model, common.config.as_deref(), now),
        Commands::Estimate { record, common } => {
            report::run_estimate(&record, common.json, common.config.as_deref())
        }
        Commands::Tips { tips, date, json } => report::run_tips(&tips, date, json),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
