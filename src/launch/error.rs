//! Errors for the launch pipeline.
//!
//! Each failing step maps to one variant. The display text is the single
//! diagnostic line written to stderr, and [`LaunchError::exit_code`] is the
//! process exit status.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// OS code reported when a PATH search finds nothing.
/// `ENOENT` and `ERROR_FILE_NOT_FOUND` share this value.
pub const NOT_FOUND_CODE: i32 = 2;

/// Exit code for errors that carry no OS code.
pub const GENERIC_FAILURE_CODE: i32 = 1;

/// Errors that abort the launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// App Paths key missing or not readable.
    #[error("Cannot open registry '{key}', 0x{:08x}.", os_code(.source))]
    RegistryOpen {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Key exists but its default value is missing or not a string.
    #[error("Cannot query registry '{key}', 0x{:08x}.", os_code(.source))]
    RegistryQuery {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Executable not found on PATH.
    #[error("Cannot find '{application}' on PATH, 0x{:08x}.", NOT_FOUND_CODE)]
    NotOnPath {
        application: String,
        #[source]
        source: which::Error,
    },

    /// The OS could not report the current directory.
    #[error("Cannot get current directory 0x{:08x}.", os_code(.0))]
    CurrentDirectory(#[source] io::Error),

    /// The OS refused to create the process.
    #[error("Cannot create process '{}', 0x{:08x}.", .program.display(), os_code(.source))]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit status for this failure: the OS error code of the failing step.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::RegistryOpen { source, .. }
            | LaunchError::RegistryQuery { source, .. }
            | LaunchError::CurrentDirectory(source)
            | LaunchError::Spawn { source, .. } => os_code(source) as i32,
            LaunchError::NotOnPath { .. } => NOT_FOUND_CODE,
        }
    }
}

fn os_code(err: &io::Error) -> u32 {
    err.raw_os_error()
        .map(|code| code as u32)
        .unwrap_or(GENERIC_FAILURE_CODE as u32)
}
