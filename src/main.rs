//! HTTP server for the payroll engine.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: holiday calendar directory (default `./config/ph`)
//! - `HOST_ADDRESS`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};

const DEFAULT_CONFIG_DIR: &str = "./config/ph";
const DEFAULT_HOST_ADDRESS: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_line_number(true)
        .init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let host_address =
        env::var("HOST_ADDRESS").unwrap_or_else(|_| DEFAULT_HOST_ADDRESS.to_string());

    let state = match AppState::load(&config_dir) {
        Ok(state) => state,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        calendar = state.calendar_code(),
        holidays = state.calendar().len(),
        "Configuration loaded"
    );

    let router = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&host_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %host_address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(address = %host_address, "Listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
