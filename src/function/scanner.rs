// scanner.rs
use super::discovery;
use super::progress::{OutputFormat, Reporter};
use super::target::{self, ScanMode, ScanTarget};
use super::{wordlist, Config, ScanError, ScanResult, Summary};
use chrono::Local;
use futures::stream::{self, StreamExt};
use reqwest::{redirect, Client};
use std::time::{Duration, Instant};
use tokio::time;

/// Bounded-concurrency HTTP prober: one GET per target, one result per target.
#[derive(Debug, Clone)]
pub struct Scanner {
    client: Client,
    concurrency: usize,
    timeout: Duration,
}

impl Scanner {
    pub fn new(client: Client, concurrency: usize, timeout: Duration) -> Self {
        Scanner {
            client,
            concurrency: concurrency.max(1),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ScanError> {
        let client = build_client(config)?;
        Ok(Scanner::new(client, config.threads, config.request_timeout()))
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Requests every target with at most `concurrency` requests in flight and
    /// returns once all of them have a result.
    ///
    /// Each request runs in its own task, so a panic while probing one target
    /// becomes a network error for that target only.
    pub async fn scan(&self, targets: Vec<ScanTarget>, reporter: &Reporter) -> Vec<ScanResult> {
        stream::iter(targets)
            .map(|target| {
                let client = self.client.clone();
                let timeout = self.timeout;
                async move {
                    let fallback = target.clone();
                    match tokio::spawn(probe(client, target, timeout)).await {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::warn!(url = %fallback, "worker failed: {}", e);
                            let err = ScanError::NetworkError(format!("worker failed: {}", e));
                            ScanResult::from_error(fallback, &err)
                        }
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .inspect(|result| reporter.record(result))
            .collect::<Vec<_>>()
            .await
    }
}

async fn probe(client: Client, target: ScanTarget, timeout: Duration) -> ScanResult {
    let result = match time::timeout(timeout, client.get(target.as_str()).send()).await {
        Ok(Ok(response)) => ScanResult::from_status(target, response.status().as_u16()),
        Ok(Err(e)) => ScanResult::from_error(target, &ScanError::from(e)),
        Err(_) => {
            let err = ScanError::NetworkError(format!(
                "request timed out after {:.1}s",
                timeout.as_secs_f64()
            ));
            ScanResult::from_error(target, &err)
        }
    };
    tracing::debug!(url = %result.target, outcome = ?result.outcome, detail = %result.detail, "probed");
    result
}

pub fn build_client(config: &Config) -> Result<Client, ScanError> {
    let policy = if config.follow_redirects {
        redirect::Policy::default()
    } else {
        redirect::Policy::none()
    };

    Client::builder()
        .timeout(config.request_timeout())
        .redirect(policy)
        .user_agent(concat!("dirsub/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ScanError::ClientError(format!("failed to create HTTP client: {}", e)))
}

/// Validates the configuration, loads the wordlist and runs the scan for the
/// selected mode. Every fatal error is raised before the first request.
pub async fn run_scan(config: Config) -> Result<Vec<ScanResult>, ScanError> {
    config.validate()?;

    let base = target::parse_base_url(&config.url)?;
    let words = wordlist::load(&config.wordlist)?;
    let targets = target::build(&config.url, &words, config.mode(), config.add_slash)?;
    let scanner = Scanner::from_config(&config)?;

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    tracing::info!(
        url = %config.url,
        mode = ?config.mode(),
        targets = targets.len(),
        threads = scanner.concurrency(),
        timeout = config.timeout,
        "starting scan"
    );

    let reporter = Reporter::new(targets.len() as u64, config.mode().label(), format);
    let started_at = Local::now();
    let start = Instant::now();

    let results = match config.mode() {
        ScanMode::Directories => scanner.scan(targets, &reporter).await,
        ScanMode::Subdomains => {
            discovery::discover(&scanner, &base, targets, words, config.depth, &reporter).await
        }
    };

    reporter.finish();

    if !config.json {
        Summary::new(started_at, start.elapsed(), &results).print();
    }

    Ok(results)
}
