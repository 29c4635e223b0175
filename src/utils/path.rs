//! Path utilities: expand ~, resolve the default output next to the executable.

use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Directory che contiene l'eseguibile (non la working directory).
pub fn program_dir() -> AppResult<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent().map(|p| p.to_path_buf()).ok_or_else(|| {
        AppError::Other(format!(
            "percorso eseguibile non valido: {}",
            exe.display()
        ))
    })
}

/// Percorso di output predefinito: `<dir eseguibile>/<file_name>`.
pub fn default_output_path(file_name: &str) -> AppResult<PathBuf> {
    Ok(program_dir()?.join(file_name))
}
