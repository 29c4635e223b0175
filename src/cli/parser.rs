use clap::Parser;

/// Command-line interface definition for rkiosk
/// Converts the workshop workbook into the kiosk's data.json
#[derive(Parser, Debug)]
#[command(
    name = "rkiosk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert the workshop Excel file into data.json for the kiosk page",
    long_about = None
)]
pub struct Cli {
    /// Workbook to convert (.xlsx, .xlsm, .xlsb, .xls, .ods)
    #[arg(value_name = "FILE")]
    pub input: Option<String>,

    /// Write the JSON here instead of data.json next to the executable
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<String>,

    /// Use this sheet (exact name) instead of searching for "analisi"
    #[arg(long, short = 's', value_name = "NAME")]
    pub sheet: Option<String>,

    /// Load settings from a YAML configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<String>,
}
