use std::fmt;
use std::io::{self, IsTerminal};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Prefisso colorato solo se l'output è un terminale
/// (niente escape nei log o quando l'output viene catturato).
fn prefix(color: &str, icon: &str, tty: bool) -> String {
    if tty {
        format!("{color}{BOLD}{icon}{RESET}")
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let tty = io::stdout().is_terminal();
    println!("{} {}", prefix(FG_BLUE, ICON_INFO, tty), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    let tty = io::stdout().is_terminal();
    println!("{} {}", prefix(FG_GREEN, ICON_OK, tty), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    let tty = io::stdout().is_terminal();
    println!("{} {}", prefix(FG_YELLOW, ICON_WARN, tty), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    let tty = io::stderr().is_terminal();
    eprintln!("{} {}", prefix(FG_RED, ICON_ERR, tty), msg);
}

/// Riga indentata sotto un messaggio precedente (es. riepilogo per data).
pub fn detail<T: fmt::Display>(msg: T) {
    println!("   {}", msg);
}
