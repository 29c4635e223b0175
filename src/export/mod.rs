// src/export/mod.rs

pub mod json;

pub use json::{read_json, write_json};
