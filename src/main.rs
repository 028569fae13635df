//! presencia main entrypoint.

use presencia::run;
use presencia::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e.to_string());
        std::process::exit(1);
    }
}
