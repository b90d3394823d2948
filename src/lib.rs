mod cli;
pub mod reading;

use northchild_engine::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
