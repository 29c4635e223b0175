use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ConvertLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::path::{default_output_path, expand_tilde};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Some(input) = &cli.input else {
        return Err(AppError::Usage("Utilizzo: rkiosk <file.xlsx>".to_string()));
    };

    let input = expand_tilde(input);
    let output = match &cli.output {
        Some(o) => expand_tilde(o),
        None => default_output_path(&cfg.output_file)?,
    };

    ConvertLogic::convert(&input, &output, cfg, cli.sheet.as_deref())?;
    Ok(())
}
