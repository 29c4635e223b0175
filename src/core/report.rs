//! Riepilogo a console dopo la generazione del JSON.

use crate::models::WorkshopEvent;
use crate::ui::messages::{detail, success};
use std::collections::BTreeMap;
use std::path::Path;

/// Conteggi per una singola data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: String,
    pub events: usize,
    pub sold_out: usize,
}

impl DaySummary {
    pub fn line(&self) -> String {
        format!(
            "{}: {} eventi ({} sold out)",
            self.date, self.events, self.sold_out
        )
    }
}

/// Raggruppa per data (ordinata come stringa) contando eventi e sold out.
pub fn summarize(events: &[WorkshopEvent]) -> Vec<DaySummary> {
    let mut by_date: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for e in events {
        let entry = by_date.entry(e.date.as_str()).or_default();
        entry.0 += 1;
        if e.is_sold_out() {
            entry.1 += 1;
        }
    }

    by_date
        .into_iter()
        .map(|(date, (events, sold_out))| DaySummary {
            date: date.to_string(),
            events,
            sold_out,
        })
        .collect()
}

pub fn print_report(events: &[WorkshopEvent], output: &Path) {
    println!();
    success(format!(
        "Generato {} con {} eventi",
        output.display(),
        events.len()
    ));

    for day in summarize(events) {
        detail(day.line());
    }
}
