//! Argument assembler — forwarded args plus the directory clause.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use crate::args::registry::{FlagDef, STARTING_DIRECTORY};

/// Builder for the arguments handed to the terminal.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    args: Vec<OsString>,
    directory: Option<OsString>,
}

impl ArgAssembler {
    /// Start with the caller's args, minus every use of `intercepted`.
    ///
    /// The intercepted flag always takes the token after it with it, whatever
    /// that token looks like.
    pub fn from_passthrough<S: AsRef<OsStr>>(raw_args: &[S], intercepted: &FlagDef) -> Self {
        let mut args = Vec::with_capacity(raw_args.len());
        let mut iter = raw_args.iter().map(AsRef::as_ref);

        while let Some(arg) = iter.next() {
            if intercepted.matches(arg) {
                iter.next();
                continue;
            }
            args.push(arg.to_os_string());
        }

        Self {
            args,
            directory: None,
        }
    }

    /// Set the starting directory clause.
    pub fn with_directory(mut self, dir: impl Into<OsString>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Forwarded args, without the directory clause.
    pub fn passthrough(&self) -> &[OsString] {
        &self.args
    }

    /// Argument vector for spawners that take separate arguments.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = self.args.clone();
        if let Some(dir) = &self.directory {
            argv.push(STARTING_DIRECTORY.emitted().into());
            argv.push(dir.clone());
        }
        argv
    }

    /// Everything after the program name, as one command-line string.
    ///
    /// Each forwarded arg is followed by a space and quoted if it contains
    /// one. The directory is always quoted.
    pub fn tail(&self) -> OsString {
        let mut line = OsString::new();
        for arg in &self.args {
            line.push(quote_if_spaced(arg));
            line.push(" ");
        }
        if let Some(dir) = &self.directory {
            line.push(STARTING_DIRECTORY.emitted());
            line.push(" \"");
            line.push(dir);
            line.push("\"");
        }
        line
    }

    /// Full command line, starting with the quoted program path.
    pub fn command_line(&self, program: &OsStr) -> OsString {
        let mut line = OsString::from("\"");
        line.push(program);
        line.push("\" ");
        line.push(self.tail());
        line
    }
}

fn quote_if_spaced(arg: &OsStr) -> Cow<'_, OsStr> {
    if arg.as_encoded_bytes().contains(&b' ') {
        let mut quoted = OsString::from("\"");
        quoted.push(arg);
        quoted.push("\"");
        Cow::Owned(quoted)
    } else {
        Cow::Borrowed(arg)
    }
}
