use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Sottostringa (case-insensitive) che identifica il foglio dei workshop
    #[serde(default = "default_sheet_keyword")]
    pub sheet_keyword: String,
    /// Nome del file generato accanto all'eseguibile
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_sheet_keyword() -> String {
    "analisi".to_string()
}
fn default_output_file() -> String {
    "data.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_keyword: default_sheet_keyword(),
            output_file: default_output_file(),
        }
    }
}

impl Config {
    /// Carica la configurazione YAML indicata, o i default se `path` è `None`.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("impossibile leggere {}: {e}", path.display()))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Interpreta un documento YAML; le chiavi assenti prendono il default.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

        if cfg.sheet_keyword.trim().is_empty() {
            return Err(AppError::Config("sheet_keyword non può essere vuoto".into()));
        }
        if cfg.output_file.trim().is_empty() {
            return Err(AppError::Config("output_file non può essere vuoto".into()));
        }

        Ok(cfg)
    }
}
