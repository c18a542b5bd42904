// classify.rs
use colored::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    Success,
    Redirect,
    ClientError,
    ServerError,
    NetworkError,
}

impl OutcomeCategory {
    pub const ALL: [OutcomeCategory; 5] = [
        OutcomeCategory::Success,
        OutcomeCategory::Redirect,
        OutcomeCategory::ClientError,
        OutcomeCategory::ServerError,
        OutcomeCategory::NetworkError,
    ];

    pub fn color(&self) -> Color {
        match self {
            OutcomeCategory::Success => Color::Green,
            OutcomeCategory::Redirect => Color::Blue,
            OutcomeCategory::ClientError => Color::Red,
            OutcomeCategory::ServerError => Color::Yellow,
            OutcomeCategory::NetworkError => Color::Magenta,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutcomeCategory::Success => "1xx/2xx success",
            OutcomeCategory::Redirect => "3xx redirect",
            OutcomeCategory::ClientError => "4xx client error",
            OutcomeCategory::ServerError => "5xx server error",
            OutcomeCategory::NetworkError => "network error",
        }
    }
}

/// Maps a response status to its category. `None` means the request never got
/// a response (timeout, refused connection, DNS or TLS failure).
///
/// Informational 1xx codes count as success and anything from 600 up as a
/// server error, so every value of `u16` lands in exactly one bucket.
pub fn classify(status: Option<u16>) -> OutcomeCategory {
    match status {
        None => OutcomeCategory::NetworkError,
        Some(0..=299) => OutcomeCategory::Success,
        Some(300..=399) => OutcomeCategory::Redirect,
        Some(400..=499) => OutcomeCategory::ClientError,
        Some(500..) => OutcomeCategory::ServerError,
    }
}
