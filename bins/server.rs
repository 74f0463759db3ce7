use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    dotenv().ok();

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "kyc_api", event = "config_invalid", error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };
    server::startup::init_logging_from(&cfg);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "kyc_api", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "kyc_api", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "kyc_api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "kyc api starting"
    );

    // ctrl-c is handled inside run_with_config via graceful shutdown
    match rt.block_on(server::startup::run_with_config(cfg)) {
        Ok(()) => {
            info!(service = "kyc_api", event = "stop", %service_id, pid, "kyc api stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "kyc_api", event = "run_failed", error = %e, "kyc api exited with error");
            ExitCode::FAILURE
        }
    }
}
