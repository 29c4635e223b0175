use crate::utils::excel_date::{
    parse_iso_datetime, parse_iso_duration_as_time, serial_to_datetime, serial_to_time,
};
use calamine::Data;
use chrono::{NaiveDateTime, NaiveTime};

/// Valore di una cella del foglio, già separato per tipo.
///
/// Viene costruito una sola volta al confine con il reader (calamine);
/// le funzioni di coercizione per i singoli campi lavorano solo su questo tipo.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl Cell {
    /// Rappresentazione testuale della cella (non trimmata).
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => {
                if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Cell::Bool(true) => "TRUE".to_string(),
            Cell::Bool(false) => "FALSE".to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Cell::Time(t) => t.format("%H:%M:%S").to_string(),
        }
    }

    /// `true` per celle vuote o contenenti solo spazi.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Testo trimmato della cella.
    pub fn trimmed(&self) -> String {
        self.to_text().trim().to_string()
    }
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => {
                let serial = dt.as_f64();
                if serial < 1.0 {
                    serial_to_time(serial)
                        .map(Cell::Time)
                        .unwrap_or(Cell::Float(serial))
                } else if dt.is_duration() {
                    // durate oltre le 24 ore: non sono orari
                    Cell::Float(serial)
                } else {
                    serial_to_datetime(serial)
                        .map(Cell::DateTime)
                        .unwrap_or(Cell::Float(serial))
                }
            }
            Data::DateTimeIso(s) => {
                if let Some(dt) = parse_iso_datetime(s) {
                    Cell::DateTime(dt)
                } else if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
                    Cell::Time(t)
                } else {
                    Cell::Text(s.clone())
                }
            }
            Data::DurationIso(s) => parse_iso_duration_as_time(s)
                .map(Cell::Time)
                .unwrap_or_else(|| Cell::Text(s.clone())),
        }
    }
}

/// Converte una riga del reader in celle tipizzate.
pub fn row_from_data(row: &[Data]) -> Vec<Cell> {
    row.iter().map(Cell::from).collect()
}
