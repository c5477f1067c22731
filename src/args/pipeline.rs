//! Pipeline — ties all argument processing stages together.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::args::assembler::ArgAssembler;
use crate::args::classifier::ParsedArgs;
use crate::args::directory::{resolve_directory, PathStyle};
use crate::args::registry::STARTING_DIRECTORY;

/// Ready-to-use parameters for spawning the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    /// Resolved path of the terminal executable.
    pub program: PathBuf,
    /// Arguments for the program, unquoted.
    pub args: Vec<OsString>,
    /// Everything after the program name as one string, quoted.
    pub tail: OsString,
    /// Full command line, starting with the quoted program.
    pub command_line: OsString,
    /// Directory passed with `-d`.
    pub directory: OsString,
}

/// Override given on the command line, short spelling first.
pub fn directory_override(parsed: &ParsedArgs) -> Option<&OsStr> {
    STARTING_DIRECTORY
        .names()
        .find_map(|name| parsed.get_os(name))
}

/// Build launch parameters from the caller's args (without `argv[0]`).
///
/// # Arguments
///
/// * `raw_args` - Arguments as received, program name excluded
/// * `program` - Resolved path of the terminal executable
/// * `cwd` - Current directory of the launcher
/// * `style` - Path conventions for the directory clause
pub fn build_launch_params<S: AsRef<OsStr>>(
    raw_args: &[S],
    program: &Path,
    cwd: &OsStr,
    style: PathStyle,
) -> LaunchParams {
    // Stage 1: Classify arguments
    let parsed = ParsedArgs::parse(raw_args);

    // Stage 2: Resolve directory
    let directory = resolve_directory(cwd, directory_override(&parsed), style);

    // Stage 3: Assemble arguments
    let assembler = ArgAssembler::from_passthrough(raw_args, &STARTING_DIRECTORY)
        .with_directory(directory.clone());

    LaunchParams {
        program: program.to_path_buf(),
        args: assembler.argv(),
        tail: assembler.tail(),
        command_line: assembler.command_line(program.as_os_str()),
        directory,
    }
}
