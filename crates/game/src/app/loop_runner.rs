use std::process::ExitCode;

use engine::run_loop;
use tracing::{error, info};

use super::bootstrap::build_app;

pub(crate) fn run() -> ExitCode {
    let mut app = match build_app() {
        Ok(app) => app,
        Err(error) => {
            error!(error = %error, "startup_failed");
            return ExitCode::FAILURE;
        }
    };

    match run_loop(&mut app.port, &mut app.world, &app.loop_config) {
        Ok(exit) => {
            info!(exit = ?exit, "shutdown");
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!(error = %error, "loop_failed");
            ExitCode::FAILURE
        }
    }
}
