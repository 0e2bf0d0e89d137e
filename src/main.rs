//! frontdesk main entrypoint.

use frontdesk::errors::AppError;
use frontdesk::run;
use frontdesk::ui::messages::{error, field_errors};

fn main() {
    if let Err(e) = run() {
        match &e {
            AppError::Validation(errs) => field_errors(errs),
            other => error(format!("Error: {}", other)),
        }
        std::process::exit(1);
    }
}
