use serde::{Deserialize, Serialize};

/// Un workshop/sessione così come viene letto dalla pagina kiosk.
///
/// L'ordine dei campi è l'ordine delle chiavi nel `data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopEvent {
    pub date: String, // "YYYY-MM-DD" se la cella era una data
    pub time: String, // "HH:MM" se la cella era un orario
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
    pub partner: String,
    pub room: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub link: String,
    pub capacity: u32,
    pub enrolled: u32,
}

impl WorkshopEvent {
    /// Chiave di ordinamento: confronto lessicografico, non di calendario.
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (&self.date, &self.time, &self.code)
    }

    /// Sold out = capienza nota e iscritti >= capienza.
    pub fn is_sold_out(&self) -> bool {
        self.capacity > 0 && self.enrolled >= self.capacity
    }
}
