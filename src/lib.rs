//! rkiosk library root.
//! Exposes the CLI parser, the high-level run() function and the conversion modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use cli::parser::Cli;
use config::Config;
use errors::{AppError, AppResult};
use utils::path::expand_tilde;

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI (help/version escono con 0, ogni altro errore con 1)
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(AppError::Usage(e.to_string().trim_end().to_string())),
    };

    // 2️⃣ carica config (default se non indicata)
    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    // 3️⃣ conversione
    cli::commands::convert::handle(&cli, &cfg)
}
