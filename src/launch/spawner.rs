//! Process spawners — start the terminal without waiting for it.

use std::io;
use std::process::{Command, Stdio};

use crate::args::LaunchParams;

/// Trait for starting the resolved program.
pub trait ProcessSpawner {
    /// Start the program described by `params` and return once the OS has
    /// accepted it. Must not wait for the child to exit.
    fn spawn(&self, params: &LaunchParams) -> io::Result<()>;
}

/// Native spawn: starts the child and drops its handle straight away.
///
/// On Windows the assembled tail is passed verbatim so the terminal sees the
/// exact quoting we built. Elsewhere the argument vector is used. The child
/// gets null stdio and holds none of the launcher's console handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSpawner;

impl ProcessSpawner for DetachedSpawner {
    fn spawn(&self, params: &LaunchParams) -> io::Result<()> {
        let mut cmd = Command::new(&params.program);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.raw_arg(&params.tail);
        }

        #[cfg(not(windows))]
        cmd.args(&params.args);

        let child = cmd.spawn()?;
        tracing::info!(pid = child.id(), program = %params.program.display(), "Terminal started");
        // Dropping `Child` closes our handles without waiting.
        drop(child);
        Ok(())
    }
}
