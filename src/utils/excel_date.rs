// src/utils/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Epoch dei seriali Excel (sistema 1900, già corretto per il finto 29/02/1900).
fn excel_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

/// Converte un *seriale Excel* in data/ora, arrotondando al secondo.
///
/// Restituisce `None` per seriali negativi o non finiti.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let seconds = (serial * SECONDS_PER_DAY).round() as i64;
    excel_epoch()?.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Converte la sola parte frazionaria di un seriale in un orario.
pub fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let seconds = (serial.fract() * SECONDS_PER_DAY).round() as u32;
    // 23:59:59.6 arrotonda a mezzanotte
    NaiveTime::from_num_seconds_from_midnight_opt(seconds % 86_400, 0)
}

/// Interpreta le date/ore ISO prodotte dai file ODS.
pub fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let dt_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Interpreta una durata ISO 8601 del tipo `PT10H30M00S` come orario del giorno.
///
/// Durate di 24 ore o più non sono orari e restituiscono `None`.
pub fn parse_iso_duration_as_time(s: &str) -> Option<NaiveTime> {
    let body = s.strip_prefix("PT")?;

    let mut total = 0f64;
    let mut number = String::new();
    for ch in body.chars() {
        match ch {
            '0'..='9' | '.' => number.push(ch),
            'H' | 'M' | 'S' => {
                let value: f64 = number.parse().ok()?;
                number.clear();
                total += match ch {
                    'H' => value * 3600.0,
                    'M' => value * 60.0,
                    _ => value,
                };
            }
            _ => return None,
        }
    }

    if !number.is_empty() || total >= SECONDS_PER_DAY {
        return None;
    }

    NaiveTime::from_num_seconds_from_midnight_opt(total.round() as u32, 0)
}
