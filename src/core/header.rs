//! Header mapping: trova le colonne del foglio a partire dai nomi
//! dell'intestazione, tramite una tabella fissa di alias.

use crate::errors::{AppError, AppResult};
use crate::models::Cell;
use std::fmt;

/// Campi logici di un evento.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Time,
    Type,
    Code,
    Partner,
    Room,
    Title,
    Abstract,
    Link,
    Capacity,
    Enrolled,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Date,
        Field::Time,
        Field::Type,
        Field::Code,
        Field::Partner,
        Field::Room,
        Field::Title,
        Field::Abstract,
        Field::Link,
        Field::Capacity,
        Field::Enrolled,
    ];

    /// Nomi di colonna accettati (già in minuscolo).
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Date => &["data"],
            Field::Time => &["orario", "ora"],
            Field::Type => &["tipologia", "tipo"],
            Field::Code => &["codice", "cod"],
            Field::Partner => &["partner"],
            Field::Room => &["aula", "sala", "room"],
            Field::Title => &["titolo", "title"],
            Field::Abstract => &["abstract", "descrizione"],
            Field::Link => &["link", "url"],
            Field::Capacity => &["capienza", "capacity", "posti"],
            Field::Enrolled => &["iscritti", "enrolled", "registrati"],
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::Date | Field::Time | Field::Type | Field::Code | Field::Title
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::Type => "type",
            Field::Code => "code",
            Field::Partner => "partner",
            Field::Room => "room",
            Field::Title => "title",
            Field::Abstract => "abstract",
            Field::Link => "link",
            Field::Capacity => "capacity",
            Field::Enrolled => "enrolled",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.aliases().join("/"))
    }
}

/// Indici di colonna risolti una volta sola dall'intestazione.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub time: usize,
    pub kind: usize,
    pub code: usize,
    pub title: usize,
    pub partner: Option<usize>,
    pub room: Option<usize>,
    pub abstract_text: Option<usize>,
    pub link: Option<usize>,
    pub capacity: Option<usize>,
    pub enrolled: Option<usize>,
}

impl ColumnMap {
    /// Risolve la mappa colonne; fallisce se manca una colonna obbligatoria.
    pub fn resolve(header: &[String]) -> AppResult<Self> {
        let lowered: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |field: Field| {
            lowered
                .iter()
                .position(|h| field.aliases().contains(&h.as_str()))
        };

        let missing: Vec<String> = Field::ALL
            .iter()
            .filter(|f| f.is_required() && find(**f).is_none())
            .map(|f| f.to_string())
            .collect();

        let (Some(date), Some(time), Some(kind), Some(code), Some(title)) = (
            find(Field::Date),
            find(Field::Time),
            find(Field::Type),
            find(Field::Code),
            find(Field::Title),
        ) else {
            return Err(AppError::MissingColumns {
                missing,
                header: header.to_vec(),
            });
        };

        Ok(Self {
            date,
            time,
            kind,
            code,
            title,
            partner: find(Field::Partner),
            room: find(Field::Room),
            abstract_text: find(Field::Abstract),
            link: find(Field::Link),
            capacity: find(Field::Capacity),
            enrolled: find(Field::Enrolled),
        })
    }

    /// Indice della colonna per un campo, se presente nell'intestazione.
    pub fn index_of(&self, field: Field) -> Option<usize> {
        match field {
            Field::Date => Some(self.date),
            Field::Time => Some(self.time),
            Field::Type => Some(self.kind),
            Field::Code => Some(self.code),
            Field::Title => Some(self.title),
            Field::Partner => self.partner,
            Field::Room => self.room,
            Field::Abstract => self.abstract_text,
            Field::Link => self.link,
            Field::Capacity => self.capacity,
            Field::Enrolled => self.enrolled,
        }
    }
}

/// Etichette dell'intestazione: celle mancanti diventano stringa vuota.
pub fn header_labels(row: &[Cell]) -> Vec<String> {
    row.iter().map(Cell::trimmed).collect()
}
