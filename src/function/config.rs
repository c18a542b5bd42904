// config.rs
use structopt::StructOpt;
use std::path::PathBuf;
use std::time::Duration;
use super::ScanError;
use super::target::{self, ScanMode};

pub const MAX_THREADS: usize = 1000;
pub const MAX_TIMEOUT_SECS: u64 = 60;
pub const MAX_DEPTH: usize = 5;

#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "dirsub", about = "Directory/Subdomain enumeration on a website")]
pub struct Config {
    /// Path to the wordlist to use
    #[structopt(short, long)]
    pub wordlist: PathBuf,

    /// Number of threads to use (1-1000)
    #[structopt(short, long, default_value = "10")]
    pub threads: usize,

    /// Enable subdomain enumeration mode
    #[structopt(short, long, conflicts_with = "directories")]
    pub subdomains: bool,

    /// Enable directory enumeration mode (default)
    #[structopt(short, long)]
    pub directories: bool,

    /// Add a slash at the end of directory paths
    #[structopt(short = "f", long)]
    pub add_slash: bool,

    /// URL of the website to scan (e.g. https://example.com)
    #[structopt(short, long)]
    pub url: String,

    /// Per-request timeout in seconds (1-60)
    #[structopt(long, default_value = "10")]
    pub timeout: u64,

    /// Follow HTTP redirects instead of reporting 3xx responses
    #[structopt(long)]
    pub follow_redirects: bool,

    /// Subdomain mode: how many levels of discovered hosts to recurse into (1-5)
    #[structopt(long, default_value = "1")]
    pub depth: usize,

    /// Print results as JSON lines instead of colored text
    #[structopt(long)]
    pub json: bool,

    /// Print debug diagnostics to stderr
    #[structopt(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.threads == 0 || self.threads > MAX_THREADS {
            return Err(ScanError::InvalidConfig(format!(
                "threads must be between 1 and {}, got {}",
                MAX_THREADS, self.threads
            )));
        }

        if self.timeout == 0 || self.timeout > MAX_TIMEOUT_SECS {
            return Err(ScanError::InvalidConfig(format!(
                "timeout must be between 1 and {} seconds, got {}",
                MAX_TIMEOUT_SECS, self.timeout
            )));
        }

        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ScanError::InvalidConfig(format!(
                "depth must be between 1 and {}, got {}",
                MAX_DEPTH, self.depth
            )));
        }

        if self.depth > 1 && self.mode() != ScanMode::Subdomains {
            return Err(ScanError::InvalidConfig(
                "--depth only applies to subdomain mode (-s)".to_string(),
            ));
        }

        target::parse_base_url(&self.url)?;

        Ok(())
    }

    pub fn mode(&self) -> ScanMode {
        if self.subdomains {
            ScanMode::Subdomains
        } else {
            ScanMode::Directories
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
