// target.rs
use super::ScanError;
use serde::Serialize;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Directories,
    Subdomains,
}

impl ScanMode {
    pub fn label(&self) -> &'static str {
        match self {
            ScanMode::Directories => "Directory Scan",
            ScanMode::Subdomains => "Subdomain Scan",
        }
    }
}

/// A fully qualified URL to request once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ScanTarget(String);

impl ScanTarget {
    pub fn new(url: impl Into<String>) -> Self {
        ScanTarget(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hostname of the target, lowercased. `None` if the URL has no host.
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.0)
            .ok()
            .and_then(|url| url.host_str().map(|h| h.to_ascii_lowercase()))
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a base URL, requiring an http(s) scheme and a host.
pub fn parse_base_url(base_url: &str) -> Result<Url, ScanError> {
    let url = Url::parse(base_url.trim())
        .map_err(|e| ScanError::InvalidUrl(format!("{} ({})", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ScanError::InvalidUrl(format!(
            "{} (scheme must be http or https)",
            base_url
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ScanError::InvalidUrl(format!("{} (missing host)", base_url))),
    }
}

/// Expands the wordlist into scan targets.
///
/// Directory mode joins `base_url` and each word with exactly one `/`: trailing
/// slashes on the base and leading slashes on the word are dropped first.
/// Subdomain mode keeps only the scheme, host and explicit port of `base_url`
/// and produces `{scheme}://{word}.{host}[:{port}]`.
pub fn build(
    base_url: &str,
    words: &[String],
    mode: ScanMode,
    add_slash: bool,
) -> Result<Vec<ScanTarget>, ScanError> {
    let url = parse_base_url(base_url)?;

    let targets = match mode {
        ScanMode::Directories => {
            let base = base_url.trim().trim_end_matches('/');
            words
                .iter()
                .map(|word| directory_target(base, word, add_slash))
                .collect()
        }
        ScanMode::Subdomains => {
            if add_slash {
                tracing::warn!("--add-slash is ignored in subdomain mode");
            }
            let targets = subdomain_targets(&url, words);
            if targets.is_empty() {
                return Err(ScanError::InvalidConfig(
                    "the wordlist has no valid subdomain labels".to_string(),
                ));
            }
            targets
        }
    };

    Ok(targets)
}

fn directory_target(base: &str, word: &str, add_slash: bool) -> ScanTarget {
    let path = word.trim().trim_start_matches('/');
    if add_slash {
        ScanTarget(format!("{}/{}/", base, path.trim_end_matches('/')))
    } else {
        ScanTarget(format!("{}/{}", base, path))
    }
}

/// A word usable in front of the base host: hostname label characters and
/// inner dots only.
fn is_host_label(word: &str) -> bool {
    !word.is_empty()
        && !word.starts_with('.')
        && !word.contains("..")
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// Words that are not hostname labels are skipped, so every target's host
/// ends with `.{host}`.
pub(crate) fn subdomain_targets(url: &Url, words: &[String]) -> Vec<ScanTarget> {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let port = url.port().map(|p| format!(":{}", p)).unwrap_or_default();
    let suffix = format!(".{}", host);

    let mut targets = Vec::with_capacity(words.len());
    for word in words {
        let label = word.trim().trim_end_matches('.');
        if !is_host_label(label) {
            tracing::warn!(word = %word, "skipping word that is not a hostname label");
            continue;
        }
        let target = ScanTarget(format!("{}://{}.{}{}", url.scheme(), label, host, port));
        match target.host() {
            Some(h) if h.ends_with(&suffix) => targets.push(target),
            _ => tracing::warn!(word = %word, "skipping word that leaves the target domain"),
        }
    }
    targets
}
