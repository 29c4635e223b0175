use crate::models::WorkshopEvent;

/// Ordina per (data, orario, codice) come stringhe. L'ordinamento è stabile.
pub fn sort_events(events: &mut [WorkshopEvent]) {
    events.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
