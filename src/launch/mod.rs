//! Launch orchestration.
//!
//! ```text
//! resolve program → read cwd → build LaunchParams → echo → spawn
//! ```
//!
//! Linear, no retries. The first failing step aborts the launch.

mod error;
mod resolver;
mod spawner;

pub use error::{LaunchError, GENERIC_FAILURE_CODE, NOT_FOUND_CODE};
#[cfg(windows)]
pub use resolver::AppPathsRegistry;
pub use resolver::{app_paths_key, resolver_for, AppResolver, FixedPath, SearchPath, APP_PATHS_SUBKEY};
pub use spawner::{DetachedSpawner, ProcessSpawner};

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::args::{build_launch_params, LaunchParams, PathStyle};
use crate::config::LauncherConfig;

/// Source of the launcher's current directory.
pub type CurrentDirFn = fn() -> io::Result<PathBuf>;

/// Runs one launch from raw args to spawned terminal.
pub struct Launcher {
    resolver: Box<dyn AppResolver>,
    spawner: Box<dyn ProcessSpawner>,
    current_dir: CurrentDirFn,
    style: PathStyle,
    echo: bool,
}

impl Launcher {
    pub fn new(resolver: Box<dyn AppResolver>, spawner: Box<dyn ProcessSpawner>) -> Self {
        Self {
            resolver,
            spawner,
            current_dir: std::env::current_dir,
            style: PathStyle::native(),
            echo: false,
        }
    }

    /// Launcher for this platform, set up from configuration.
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(resolver_for(config), Box::new(DetachedSpawner))
            .with_echo(config.echo_command_line())
    }

    pub fn with_current_dir(mut self, current_dir: CurrentDirFn) -> Self {
        self.current_dir = current_dir;
        self
    }

    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Print the assembled command line before spawning.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Launch the terminal for `raw_args` (program name excluded).
    ///
    /// Echo output, if enabled, goes to `out`.
    pub fn run<S: AsRef<OsStr>>(
        &self,
        raw_args: &[S],
        out: &mut dyn Write,
    ) -> Result<LaunchParams, LaunchError> {
        let _span = tracing::info_span!(
            "launch",
            resolver = self.resolver.name(),
            pid = std::process::id(),
            args = raw_args.len()
        )
        .entered();

        let program = self.resolver.resolve()?;
        tracing::debug!(program = %program.display(), "Resolved terminal");

        let cwd = (self.current_dir)().map_err(LaunchError::CurrentDirectory)?;
        let params = build_launch_params(raw_args, &program, cwd.as_os_str(), self.style);
        tracing::debug!(
            directory = %params.directory.to_string_lossy(),
            "Assembled command line: {}",
            params.command_line.to_string_lossy()
        );

        if self.echo {
            if let Err(e) = echo_line(out, &params.command_line) {
                tracing::debug!("Command line echo failed: {}", e);
            }
        }

        self.spawner
            .spawn(&params)
            .map_err(|source| LaunchError::Spawn {
                program: params.program.clone(),
                source,
            })?;

        Ok(params)
    }
}

/// Write `line` and a newline. Unix gets the exact bytes.
fn echo_line(out: &mut dyn Write, line: &OsStr) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(line.as_bytes())?;
    }

    #[cfg(not(unix))]
    out.write_all(line.to_string_lossy().as_bytes())?;

    out.write_all(b"\n")
}
