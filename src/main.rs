use anyhow::Result;
use colored::Colorize;
use dirsub::function::{run_scan, Config, ScanError};
use structopt::StructOpt;
use structopt::clap::ErrorKind;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // 1. parse arguments; help and version exit 0, usage errors exit with the config code
    let config = match Config::from_args_safe() {
        Ok(config) => config,
        Err(e) if matches!(e.kind, ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed) => e.exit(),
        Err(e) => {
            eprintln!("{}", e.message);
            std::process::exit(ScanError::InvalidConfig(e.message).exit_code());
        }
    };

    init_logging(config.verbose);

    // 2. run the scan
    if let Err(err) = run(config).await {
        eprintln!("{}", format!("Error: {}", err).magenta());
        let code = err
            .downcast_ref::<ScanError>()
            .map(ScanError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run(config: Config) -> Result<()> {
    let results = run_scan(config).await?;
    tracing::info!(results = results.len(), "scan complete");
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("dirsub={level},reqwest=warn,hyper=warn,hyper_util=warn"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
