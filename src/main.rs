//! PontoCerto main entrypoint.

use pontocerto::run;
use pontocerto::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
