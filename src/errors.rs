//! Unified application error type.
//! Every module (config, core, export, utils) returns AppError so that the
//! binary can report any failure the same way and exit with status 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Invocation
    // ---------------------------
    #[error("{0}")]
    Usage(String),

    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("errore di I/O: {0}")]
    Io(#[from] io::Error),

    #[error("errore di serializzazione JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input workbook
    // ---------------------------
    #[error("file non trovato: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("impossibile leggere il file Excel: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("il file Excel non contiene fogli")]
    NoSheets,

    #[error("foglio '{name}' non trovato (fogli disponibili: {})", .available.join(", "))]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("il foglio '{0}' è vuoto: manca la riga di intestazione")]
    EmptySheet(String),

    #[error("colonne mancanti: {}\nHeader: {header:?}", .missing.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        header: Vec<String>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("errore di configurazione: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("errore interno: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
