// wordlist.rs
use super::ScanError;
use std::fs;
use std::path::Path;

/// Reads a wordlist into whitespace-separated tokens, in file order.
///
/// Duplicates are kept and will be scanned once per occurrence.
pub fn load(path: &Path) -> Result<Vec<String>, ScanError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ScanError::IOError(format!("{}: {}", path.display(), e)))?;

    let words = parse(&content);
    if words.is_empty() {
        return Err(ScanError::EmptyWordlist(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), words = words.len(), "loaded wordlist");
    Ok(words)
}

fn parse(content: &str) -> Vec<String> {
    content
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn wordlist_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn splits_on_any_whitespace() {
        let words = parse("admin\nlogin  backup\r\n\tapi\n\n");
        assert_eq!(words, vec!["admin", "login", "backup", "api"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let file = wordlist_file("a\nb\na\n");
        assert_eq!(load(file.path()).unwrap(), vec!["a", "b", "a"]);
    }

    #[test]
    fn zero_byte_file_is_empty_wordlist() {
        let file = wordlist_file("");
        assert!(matches!(load(file.path()), Err(ScanError::EmptyWordlist(_))));
    }

    #[test]
    fn whitespace_only_file_is_empty_wordlist() {
        let file = wordlist_file(" \n\t\n");
        assert!(matches!(load(file.path()), Err(ScanError::EmptyWordlist(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(load(&path), Err(ScanError::IOError(_))));
    }
}
