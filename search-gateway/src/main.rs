use std::process::ExitCode;

use tracing::{error, info};

use search_gateway::{server, telemetry, Dependencies, GatewayConfig, GatewayError};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Logging is not up yet, so configuration errors go straight to stderr.
    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init_tracing(config.log_format) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Search gateway exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: GatewayConfig) -> Result<(), GatewayError> {
    info!(version = env!("CARGO_PKG_VERSION"), "Starting search gateway");

    let dependencies = Dependencies::new(&config)?;
    server::serve(config.bind_addr, dependencies.backend).await
}
