use std::ffi::OsString;
use std::io;

use wtd::config::Config;
use wtd::launch::{Launcher, GENERIC_FAILURE_CODE};
use wtd::logging::init_tracing;

fn main() {
    if let Some(log_file) = init_tracing() {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            log_file = %log_file.display(),
            "wtd starting"
        );
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(GENERIC_FAILURE_CODE);
        }
    };

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let launcher = Launcher::from_config(&config.launcher);

    if let Err(e) = launcher.run(&args, &mut io::stdout()) {
        tracing::warn!(code = e.exit_code(), "Launch failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
