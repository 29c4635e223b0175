//! Worksheet selection and loading.

use crate::errors::{AppError, AppResult};
use crate::models::Cell;
use crate::models::cell::row_from_data;
use crate::ui::messages::warning;
use calamine::{Reader, open_workbook_auto};
use std::path::Path;

/// Foglio scelto e se si tratta del fallback sul primo foglio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetChoice {
    pub name: String,
    pub fallback: bool,
}

/// Primo foglio il cui nome contiene `keyword` (case-insensitive),
/// altrimenti il primo foglio. `None` solo se non ci sono fogli.
pub fn select_sheet(names: &[String], keyword: &str) -> Option<SheetChoice> {
    let needle = keyword.to_lowercase();

    if let Some(name) = names.iter().find(|n| n.to_lowercase().contains(&needle)) {
        return Some(SheetChoice {
            name: name.clone(),
            fallback: false,
        });
    }

    names.first().map(|name| SheetChoice {
        name: name.clone(),
        fallback: true,
    })
}

/// Foglio indicato esplicitamente per nome esatto.
pub fn select_named(names: &[String], wanted: &str) -> AppResult<SheetChoice> {
    names
        .iter()
        .find(|n| n.as_str() == wanted)
        .map(|n| SheetChoice {
            name: n.clone(),
            fallback: false,
        })
        .ok_or_else(|| AppError::SheetNotFound {
            name: wanted.to_string(),
            available: names.to_vec(),
        })
}

/// Contenuto del foglio scelto, già convertito in celle tipizzate.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    /// Prima riga (intestazione) e righe dati.
    pub fn split_header(&self) -> AppResult<(&[Cell], &[Vec<Cell>])> {
        match self.rows.split_first() {
            Some((header, data)) => Ok((header.as_slice(), data)),
            None => Err(AppError::EmptySheet(self.name.clone())),
        }
    }
}

/// Apre il file in sola lettura e carica il foglio dei workshop.
///
/// - `explicit`: nome esatto del foglio (opzione `--sheet`)
/// - altrimenti primo foglio che contiene `keyword`, con warning se si
///   ripiega sul primo foglio.
pub fn load_worksheet(path: &Path, keyword: &str, explicit: Option<&str>) -> AppResult<Worksheet> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let choice = match explicit {
        Some(wanted) => select_named(&names, wanted)?,
        None => select_sheet(&names, keyword).ok_or(AppError::NoSheets)?,
    };

    if choice.fallback {
        warning(format!(
            "Foglio '{keyword}' non trovato, uso '{}'",
            choice.name
        ));
    }

    let range = workbook.worksheet_range(&choice.name)?;
    let rows = range.rows().map(row_from_data).collect();

    Ok(Worksheet {
        name: choice.name,
        rows,
    })
}
