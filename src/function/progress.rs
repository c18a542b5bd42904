// progress.rs
use super::report::ScanResult;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Silent,
}

/// Prints result lines and tracks how many targets have completed.
///
/// The bar is drawn on stderr; result lines go to stdout while the bar is
/// suspended, so a line is never split or overdrawn.
pub struct Reporter {
    pb: ProgressBar,
    done: AtomicU64,
    format: OutputFormat,
}

impl Reporter {
    pub fn new(total: u64, label: &str, format: OutputFormat) -> Self {
        let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        pb.set_message(label.to_string());
        Reporter {
            pb,
            done: AtomicU64::new(0),
            format,
        }
    }

    /// No bar and no output; only counts.
    pub fn hidden(total: u64) -> Self {
        let pb = ProgressBar::hidden();
        pb.set_length(total);
        Reporter {
            pb,
            done: AtomicU64::new(0),
            format: OutputFormat::Silent,
        }
    }

    /// Grows the total when more targets are queued (recursive discovery).
    pub fn extend(&self, more: u64) {
        self.pb.inc_length(more);
    }

    pub fn total(&self) -> u64 {
        self.pb.length().unwrap_or(0)
    }

    pub fn completed(&self) -> u64 {
        self.done.load(Ordering::SeqCst)
    }

    pub fn record(&self, result: &ScanResult) {
        let line = match self.format {
            OutputFormat::Text => Some(result.render()),
            OutputFormat::Json => Some(result.to_json()),
            OutputFormat::Silent => None,
        };
        if let Some(line) = line {
            self.pb.suspend(|| {
                let mut out = std::io::stdout().lock();
                if let Err(e) = writeln!(out, "{}", line) {
                    tracing::debug!("failed to write result line: {}", e);
                }
            });
        }
        self.done.fetch_add(1, Ordering::SeqCst);
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
