//! rkiosk main entrypoint.

use rkiosk::run;
use rkiosk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("ERRORE: {}", e));
        std::process::exit(1);
    }
}
