//! Row extraction: riga del foglio → `WorkshopEvent`.
//!
//! Nessuna anomalia di una singola riga è fatale: date/ore non riconosciute
//! restano come testo, capienza/iscritti non numerici valgono 0.

use crate::core::header::{ColumnMap, Field};
use crate::models::{Cell, WorkshopEvent};

static EMPTY: Cell = Cell::Empty;

fn cell_at(row: &[Cell], idx: Option<usize>) -> &Cell {
    idx.and_then(|i| row.get(i)).unwrap_or(&EMPTY)
}

/// Data: `YYYY-MM-DD` per celle data, altrimenti il testo trimmato.
pub fn coerce_date(cell: &Cell) -> String {
    match cell {
        Cell::DateTime(dt) => dt.format("%Y-%m-%d").to_string(),
        other => other.trimmed(),
    }
}

/// Orario: `HH:MM` per celle ora o data/ora, altrimenti il testo trimmato.
pub fn coerce_time(cell: &Cell) -> String {
    match cell {
        Cell::Time(t) => t.format("%H:%M").to_string(),
        Cell::DateTime(dt) => dt.format("%H:%M").to_string(),
        other => other.trimmed(),
    }
}

/// Capienza / iscritti. Qualsiasi valore non interpretabile (o negativo) vale 0.
pub fn coerce_count(cell: &Cell) -> u32 {
    let value: Option<i64> = match cell {
        Cell::Int(i) => Some(*i),
        Cell::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        Cell::Bool(b) => Some(i64::from(*b)),
        Cell::Text(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    value
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Testo trimmato, con `default` per celle vuote.
pub fn coerce_text(cell: &Cell, default: &str) -> String {
    let s = cell.trimmed();
    if s.is_empty() { default.to_string() } else { s }
}

/// `true` se il titolo è assente o è il segnaposto `-`.
fn is_placeholder_title(cell: &Cell) -> bool {
    let t = cell.trimmed();
    t.is_empty() || t == "-"
}

/// Converte una riga in evento; `None` se la riga va scartata
/// (codice vuoto, titolo vuoto o `-`).
pub fn extract_event(row: &[Cell], cols: &ColumnMap) -> Option<WorkshopEvent> {
    let get = |field: Field| cell_at(row, cols.index_of(field));

    let code = get(Field::Code);
    if code.is_blank() {
        return None;
    }

    let title = get(Field::Title);
    if is_placeholder_title(title) {
        return None;
    }

    let count = |field: Field| {
        let cell = get(field);
        if cell.is_blank() { 0 } else { coerce_count(cell) }
    };

    Some(WorkshopEvent {
        date: coerce_date(get(Field::Date)),
        time: coerce_time(get(Field::Time)),
        kind: coerce_text(get(Field::Type), ""),
        code: code.trimmed(),
        partner: coerce_text(get(Field::Partner), "-"),
        room: coerce_text(get(Field::Room), ""),
        title: title.trimmed(),
        abstract_text: coerce_text(get(Field::Abstract), ""),
        link: coerce_text(get(Field::Link), ""),
        capacity: count(Field::Capacity),
        enrolled: count(Field::Enrolled),
    })
}

/// Estrae gli eventi da tutte le righe dati (intestazione esclusa).
pub fn extract_events(rows: &[Vec<Cell>], cols: &ColumnMap) -> Vec<WorkshopEvent> {
    rows.iter()
        .filter_map(|row| extract_event(row, cols))
        .collect()
}
