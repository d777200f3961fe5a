//! rfinanzas main entrypoint.

use rfinanzas::run;
use rfinanzas::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
