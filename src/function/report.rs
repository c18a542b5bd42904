// report.rs
use super::classify::{classify, OutcomeCategory};
use super::target::ScanTarget;
use super::ScanError;
use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub target: ScanTarget,
    pub outcome: OutcomeCategory,
    /// Numeric status code, or the error message for network failures.
    pub detail: String,
}

impl ScanResult {
    pub fn from_status(target: ScanTarget, status: u16) -> Self {
        ScanResult {
            target,
            outcome: classify(Some(status)),
            detail: status.to_string(),
        }
    }

    pub fn from_error(target: ScanTarget, err: &ScanError) -> Self {
        let detail = match err {
            ScanError::NetworkError(msg) => msg.clone(),
            other => other.to_string(),
        };
        ScanResult {
            target,
            outcome: classify(None),
            detail,
        }
    }

    /// The result line, colored by outcome.
    pub fn render(&self) -> String {
        let line = match self.outcome {
            OutcomeCategory::NetworkError => format!("{} [Error]: {}", self.target, self.detail),
            _ => format!("{} [{}]", self.target, self.detail),
        };
        line.color(self.outcome.color()).to_string()
    }

    pub fn to_json(&self) -> String {
        // a struct of strings and a unit enum cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct Summary {
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
    pub total: usize,
    pub counts: HashMap<OutcomeCategory, usize>,
}

impl Summary {
    pub fn new(started_at: DateTime<Local>, elapsed: Duration, results: &[ScanResult]) -> Self {
        let mut counts = HashMap::new();
        for result in results {
            *counts.entry(result.outcome).or_insert(0) += 1;
        }
        Summary {
            started_at,
            elapsed,
            total: results.len(),
            counts,
        }
    }

    pub fn count(&self, outcome: OutcomeCategory) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    pub fn print(&self) {
        eprintln!("\n=== Scan summary ===");
        eprintln!("Started:  {}", self.started_at.format("%Y-%m-%d %H:%M:%S"));
        eprintln!("Elapsed:  {:.2}s", self.elapsed.as_secs_f64());
        eprintln!("Targets:  {}", self.total);
        for outcome in OutcomeCategory::ALL {
            let line = format!("  - {}: {}", outcome.label(), self.count(outcome));
            eprintln!("{}", line.color(outcome.color()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_result_renders_code() {
        colored::control::set_override(false);
        let result = ScanResult::from_status(ScanTarget::new("http://example.com/admin"), 301);
        assert_eq!(result.outcome, OutcomeCategory::Redirect);
        assert_eq!(result.render(), "http://example.com/admin [301]");
    }

    #[test]
    fn error_result_renders_message() {
        colored::control::set_override(false);
        let err = ScanError::NetworkError("request timed out".into());
        let result = ScanResult::from_error(ScanTarget::new("http://example.com/x"), &err);
        assert_eq!(result.outcome, OutcomeCategory::NetworkError);
        assert_eq!(result.render(), "http://example.com/x [Error]: request timed out");
    }

    #[test]
    fn json_line_has_all_fields() {
        let result = ScanResult::from_status(ScanTarget::new("http://example.com/a"), 404);
        let value: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(value["target"], "http://example.com/a");
        assert_eq!(value["outcome"], "client_error");
        assert_eq!(value["detail"], "404");
    }

    #[test]
    fn summary_counts_by_outcome() {
        let results = vec![
            ScanResult::from_status(ScanTarget::new("http://a/1"), 200),
            ScanResult::from_status(ScanTarget::new("http://a/2"), 200),
            ScanResult::from_status(ScanTarget::new("http://a/3"), 404),
            ScanResult::from_error(ScanTarget::new("http://a/4"), &ScanError::NetworkError("x".into())),
        ];
        let summary = Summary::new(Local::now(), Duration::from_secs(1), &results);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(OutcomeCategory::Success), 2);
        assert_eq!(summary.count(OutcomeCategory::ClientError), 1);
        assert_eq!(summary.count(OutcomeCategory::NetworkError), 1);
        assert_eq!(summary.count(OutcomeCategory::Redirect), 0);
    }
}
