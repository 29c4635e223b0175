// src/export/json.rs

use crate::errors::AppResult;
use crate::models::WorkshopEvent;
use std::fs;
use std::path::Path;

/// Scrive gli eventi come array JSON indentato (UTF-8, caratteri non ASCII
/// lasciati come sono). Un file già esistente viene sostituito.
pub fn write_json(path: &Path, events: &[WorkshopEvent]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(events)?;
    fs::write(path, json)?;
    Ok(())
}

/// Rilegge un `data.json` generato in precedenza.
pub fn read_json(path: &Path) -> AppResult<Vec<WorkshopEvent>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
