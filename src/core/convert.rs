// src/core/convert.rs

use crate::config::Config;
use crate::core::extract::extract_events;
use crate::core::header::{ColumnMap, header_labels};
use crate::core::report::print_report;
use crate::core::sheet::load_worksheet;
use crate::core::sort::sort_events;
use crate::errors::{AppError, AppResult};
use crate::export::write_json;
use crate::models::WorkshopEvent;
use crate::ui::messages::info;
use std::path::Path;

/// Logica di alto livello della conversione Excel → `data.json`.
pub struct ConvertLogic;

impl ConvertLogic {
    /// Esegue l'intera pipeline:
    ///
    /// 1. sceglie il foglio (`sheet` esplicito oppure `cfg.sheet_keyword`)
    /// 2. risolve le colonne dall'intestazione
    /// 3. estrae, filtra e ordina gli eventi
    /// 4. scrive `output` e stampa il riepilogo
    ///
    /// Se mancano colonne obbligatorie il file di output non viene toccato.
    pub fn convert(
        input: &Path,
        output: &Path,
        cfg: &Config,
        sheet: Option<&str>,
    ) -> AppResult<Vec<WorkshopEvent>> {
        if !input.exists() {
            return Err(AppError::FileNotFound(input.to_path_buf()));
        }

        let worksheet = load_worksheet(input, &cfg.sheet_keyword, sheet)?;
        let (header_row, data_rows) = worksheet.split_header()?;

        let header = header_labels(header_row);
        info(format!("Colonne trovate: {header:?}"));

        let cols = ColumnMap::resolve(&header)?;

        let mut events = extract_events(data_rows, &cols);
        sort_events(&mut events);

        write_json(output, &events)?;
        print_report(&events, output);

        Ok(events)
    }
}
