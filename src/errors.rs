//! Unified application error type.
//! All modules (api, core, cli, export, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // HTTP / API
    // ---------------------------
    /// The request itself failed (connect, DNS, TLS, body read...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,

    // ---------------------------
    // Selection errors
    // ---------------------------
    #[error("No trip list loaded")]
    NothingToSelect,

    #[error("Invalid trip position: {0}")]
    InvalidPosition(usize),

    #[error("Trip not found: {0}")]
    TripNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
