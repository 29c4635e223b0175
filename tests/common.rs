#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_xlsxwriter::{Format, Workbook};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rk() -> Command {
    cargo_bin_cmd!("rkiosk")
}

/// Create a temporary file path inside the system temp dir and ensure it's removed
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rkiosk.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Valore di una cella di fixture.
#[derive(Clone, Copy)]
pub enum V<'a> {
    S(&'a str),
    N(f64),
    /// Data "YYYY-MM-DD" scritta come seriale Excel
    D(&'a str),
    /// Orario "HH:MM" scritto come seriale Excel
    T(&'a str),
    /// Data e ora "YYYY-MM-DD HH:MM" scritta come seriale Excel
    DT(&'a str),
    E,
}

pub const HEADER: [&str; 11] = [
    "Data",
    "Orario",
    "Tipologia",
    "Codice",
    "Partner",
    "Aula",
    "Titolo",
    "Abstract",
    "Link",
    "Capienza",
    "Iscritti",
];

pub fn header_row() -> Vec<V<'static>> {
    HEADER.iter().map(|h| V::S(*h)).collect()
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}

pub fn date_serial(s: &str) -> f64 {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    naive_datetime_to_excel_serial(&d.and_hms_opt(0, 0, 0).unwrap())
}

pub fn time_serial(s: &str) -> f64 {
    let t = NaiveTime::parse_from_str(s, "%H:%M").unwrap();
    t.num_seconds_from_midnight() as f64 / 86400.0
}

pub fn datetime_serial(s: &str) -> f64 {
    let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
    naive_datetime_to_excel_serial(&dt)
}

/// Scrive un workbook con i fogli indicati (nome, righe).
pub fn write_workbook(path: &PathBuf, sheets: &[(&str, Vec<Vec<V>>)]) {
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");
    let time_fmt = Format::new().set_num_format("hh:mm");
    let dt_fmt = Format::new().set_num_format("yyyy-mm-dd hh:mm");

    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(*name).expect("sheet name");

        for (r, row) in rows.iter().enumerate() {
            let r = r as u32;
            for (c, v) in row.iter().enumerate() {
                let c = c as u16;
                match v {
                    V::S("") | V::E => {}
                    V::S(s) => {
                        ws.write_string(r, c, *s).expect("write string");
                    }
                    V::N(n) => {
                        ws.write_number(r, c, *n).expect("write number");
                    }
                    V::D(s) => {
                        ws.write_number_with_format(r, c, date_serial(s), &date_fmt)
                            .expect("write date");
                    }
                    V::T(s) => {
                        ws.write_number_with_format(r, c, time_serial(s), &time_fmt)
                            .expect("write time");
                    }
                    V::DT(s) => {
                        ws.write_number_with_format(r, c, datetime_serial(s), &dt_fmt)
                            .expect("write datetime");
                    }
                }
            }
        }
    }

    workbook.save(path).expect("save workbook");
}

/// Riga completa nell'ordine di `HEADER`.
#[allow(clippy::too_many_arguments)]
pub fn event_row<'a>(
    date: V<'a>,
    time: V<'a>,
    kind: &'a str,
    code: &'a str,
    title: &'a str,
    capacity: V<'a>,
    enrolled: V<'a>,
) -> Vec<V<'a>> {
    vec![
        date,
        time,
        V::S(kind),
        V::S(code),
        V::S("AcmeCo"),
        V::S("Room A"),
        V::S(title),
        V::S("desc"),
        V::S("http://x"),
        capacity,
        enrolled,
    ]
}
