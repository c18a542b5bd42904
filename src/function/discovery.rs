// discovery.rs
use super::classify::OutcomeCategory;
use super::progress::Reporter;
use super::scanner::Scanner;
use super::target::{self, ScanTarget};
use super::ScanResult;
use std::collections::HashSet;
use url::Url;

/// Breadth-first subdomain expansion with a visited set and a depth limit.
///
/// Level 1 is the wordlist applied to the root host. Every host that answered
/// with any HTTP status is expanded once more on the next level, until
/// `max_depth` levels have been scanned. A hostname is never queued twice
/// after level 1.
#[derive(Debug)]
pub struct Discovery {
    words: Vec<String>,
    max_depth: usize,
    depth: usize,
    visited: HashSet<String>,
    expanded: HashSet<String>,
}

impl Discovery {
    pub fn new(root: &Url, words: Vec<String>, max_depth: usize) -> Self {
        let mut visited = HashSet::new();
        if let Some(host) = root.host_str() {
            visited.insert(host.to_ascii_lowercase());
        }
        Discovery {
            words,
            max_depth: max_depth.max(1),
            depth: 0,
            visited,
            expanded: HashSet::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Registers the first level. Wordlist duplicates are kept at this level.
    pub fn start(&mut self, first_level: &[ScanTarget]) {
        self.depth = 1;
        for target in first_level {
            if let Some(host) = target.host() {
                self.visited.insert(host);
            }
        }
    }

    /// Targets for the next level, given the results of the current one.
    /// Empty once the depth limit is reached or nothing new was found.
    pub fn advance(&mut self, results: &[ScanResult]) -> Vec<ScanTarget> {
        if self.depth >= self.max_depth {
            return Vec::new();
        }
        self.depth += 1;

        let mut next = Vec::new();
        for result in results {
            if result.outcome == OutcomeCategory::NetworkError {
                continue;
            }
            let Ok(url) = Url::parse(result.target.as_str()) else {
                continue;
            };
            let Some(host) = url.host_str().map(|h| h.to_ascii_lowercase()) else {
                continue;
            };
            if !self.expanded.insert(host) {
                continue;
            }
            for candidate in target::subdomain_targets(&url, &self.words) {
                if let Some(child) = candidate.host() {
                    if self.visited.insert(child) {
                        next.push(candidate);
                    }
                }
            }
        }
        next
    }
}

/// Scans `first_level` and then recurses into discovered hosts level by level.
pub async fn discover(
    scanner: &Scanner,
    root: &Url,
    first_level: Vec<ScanTarget>,
    words: Vec<String>,
    max_depth: usize,
    reporter: &Reporter,
) -> Vec<ScanResult> {
    let mut discovery = Discovery::new(root, words, max_depth);
    discovery.start(&first_level);

    let mut all = Vec::new();
    let mut frontier = first_level;
    while !frontier.is_empty() {
        let results = scanner.scan(frontier, reporter).await;
        frontier = discovery.advance(&results);
        if !frontier.is_empty() {
            tracing::info!(
                depth = discovery.depth(),
                hosts = frontier.len(),
                "recursing into discovered subdomains"
            );
            reporter.extend(frontier.len() as u64);
        }
        all.extend(results);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::ScanError;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn found(url: &str) -> ScanResult {
        ScanResult::from_status(ScanTarget::new(url), 200)
    }

    fn unreachable(url: &str) -> ScanResult {
        ScanResult::from_error(ScanTarget::new(url), &ScanError::NetworkError("dns".into()))
    }

    fn root() -> Url {
        Url::parse("http://example.com").unwrap()
    }

    #[test]
    fn depth_one_never_recurses() {
        let mut discovery = Discovery::new(&root(), words(&["api"]), 1);
        discovery.start(&[ScanTarget::new("http://api.example.com")]);
        assert!(discovery.advance(&[found("http://api.example.com")]).is_empty());
    }

    #[test]
    fn expands_only_responding_hosts() {
        let mut discovery = Discovery::new(&root(), words(&["api", "dev"]), 2);
        discovery.start(&[
            ScanTarget::new("http://api.example.com"),
            ScanTarget::new("http://dev.example.com"),
        ]);
        let next = discovery.advance(&[
            found("http://api.example.com"),
            unreachable("http://dev.example.com"),
        ]);
        let urls: Vec<&str> = next.iter().map(|t| t.as_str()).collect();
        assert_eq!(urls, vec!["http://api.api.example.com", "http://dev.api.example.com"]);
        assert_eq!(discovery.depth(), 2);
    }

    #[test]
    fn never_requeues_a_visited_host() {
        let mut discovery = Discovery::new(&root(), words(&["a"]), 5);
        discovery.start(&[ScanTarget::new("http://a.example.com")]);

        let level2 = discovery.advance(&[found("http://a.example.com"), found("http://a.example.com")]);
        assert_eq!(level2.len(), 1);

        // the same host answering again must not produce more work
        let level3 = discovery.advance(&[found("http://a.example.com")]);
        assert!(level3.is_empty());
    }

    #[test]
    fn recursion_stays_under_the_root_domain() {
        let list = words(&["evil.org/", "x@attacker.net#", "www"]);
        let first = target::build("http://example.com", &list, crate::function::ScanMode::Subdomains, false)
            .unwrap();
        assert_eq!(first, vec![ScanTarget::new("http://www.example.com")]);

        let mut discovery = Discovery::new(&root(), list, 2);
        discovery.start(&first);
        let next = discovery.advance(&[found("http://www.example.com")]);
        assert_eq!(next, vec![ScanTarget::new("http://www.www.example.com")]);
    }

    #[test]
    fn terminates_within_max_depth() {
        let max_depth = 3;
        let mut discovery = Discovery::new(&root(), words(&["x", "y"]), max_depth);
        let first = vec![
            ScanTarget::new("http://x.example.com"),
            ScanTarget::new("http://y.example.com"),
        ];
        discovery.start(&first);

        let mut frontier = first;
        let mut levels = 1;
        while !frontier.is_empty() {
            let results: Vec<ScanResult> = frontier.iter().map(|t| found(t.as_str())).collect();
            frontier = discovery.advance(&results);
            if !frontier.is_empty() {
                levels += 1;
            }
            assert!(levels <= max_depth);
        }
        assert_eq!(levels, max_depth);
    }
}
