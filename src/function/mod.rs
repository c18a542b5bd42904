pub mod classify;
pub mod config;
pub mod discovery;
pub mod error;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod target;
pub mod wordlist;

pub use self::classify::{classify, OutcomeCategory};
pub use self::config::Config;
pub use self::scanner::{run_scan, Scanner};
pub use self::report::{ScanResult, Summary};
pub use self::error::ScanError;
pub use self::target::{ScanMode, ScanTarget};
