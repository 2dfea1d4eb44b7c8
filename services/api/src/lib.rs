mod cli;
mod console;
mod infra;
mod routes;
mod server;

use arch_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
