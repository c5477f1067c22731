//! Argument classifier — raw args → option table + positionals.
//!
//! Three kinds of arguments are recognized:
//!
//! - *flag*: a name with no value after it (`-y`, `--yes`), stored as `"1"`.
//! - *named value*: a name followed by a value (`--port 80`).
//! - *positional*: a value with no name before it (`config.json`).
//!
//! A name is any argument starting with `-`; all leading dashes are stripped.
//! The first argument made only of dashes is a separator: it is discarded and
//! every argument after it is positional, whatever it looks like.
//!
//! ```text
//! --port 80 -udp -- config.json -x
//! ```
//!
//! gives `port = 80`, `udp = 1` and the positionals `config.json`, `-x`.
//!
//! Classification never fails. A value after a flag is accepted as that
//! flag's value, so `--yes 1` means the same as `--yes`.
//!
//! Values and positionals are kept as `OsString`, byte for byte. Names are
//! lookup keys only; a name that is not valid Unicode is stored under its
//! lossy form.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Value stored for a name that has no value after it.
pub const FLAG_VALUE: &str = "1";

/// Scan state between two arguments.
#[derive(Debug)]
enum ScanState<'a> {
    /// No name is waiting for a value.
    Idle,
    /// A name was seen and the next value (if any) belongs to it.
    Pending(Cow<'a, str>),
    /// The separator was seen; everything else is positional.
    Separated,
}

/// Result of classifying raw arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    values: HashMap<String, OsString>,
    positionals: Vec<OsString>,
}

/// Name carried by `arg` with its dashes stripped, or `None` for a value.
/// An empty name means the argument was all dashes.
fn name_of(arg: &OsStr) -> Option<Cow<'_, str>> {
    let bytes = arg.as_encoded_bytes();
    if bytes.first() != Some(&b'-') {
        return None;
    }
    let dashes = bytes.iter().take_while(|&&b| b == b'-').count();
    Some(String::from_utf8_lossy(&bytes[dashes..]))
}

impl ParsedArgs {
    /// Classify `raw_args` in a single left-to-right pass.
    pub fn parse<S: AsRef<OsStr>>(raw_args: &[S]) -> Self {
        let mut parsed = Self::default();
        let mut state = ScanState::Idle;

        for arg in raw_args {
            let arg = arg.as_ref();

            if let ScanState::Separated = state {
                parsed.positionals.push(arg.to_os_string());
                continue;
            }

            let pending = std::mem::replace(&mut state, ScanState::Idle);
            match name_of(arg) {
                Some(name) => {
                    if let ScanState::Pending(prev) = pending {
                        parsed.insert_flag(prev);
                    }
                    state = if name.is_empty() {
                        ScanState::Separated
                    } else {
                        ScanState::Pending(name)
                    };
                }
                None => match pending {
                    ScanState::Pending(name) => parsed.insert(name, arg),
                    _ => parsed.positionals.push(arg.to_os_string()),
                },
            }
        }

        if let ScanState::Pending(name) = state {
            parsed.insert_flag(name);
        }

        parsed
    }

    // First write wins.
    fn insert(&mut self, name: Cow<'_, str>, value: &OsStr) {
        self.values
            .entry(name.into_owned())
            .or_insert_with(|| value.to_os_string());
    }

    fn insert_flag(&mut self, name: Cow<'_, str>) {
        self.insert(name, OsStr::new(FLAG_VALUE));
    }

    /// Is the named option present?
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Raw value of the named option, or `None` if it was not given.
    pub fn get_os(&self, name: &str) -> Option<&OsStr> {
        self.values.get(name).map(OsString::as_os_str)
    }

    /// Value of the named option.
    ///
    /// `None` if it was not given or is not valid Unicode; see [`Self::get_os`].
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_os(name)?.to_str()
    }

    /// Value of the named option, or `default` if [`Self::get`] has none.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Number of positionals.
    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// Is there a positional at `index`?
    pub fn has_positional(&self, index: usize) -> bool {
        index < self.positionals.len()
    }

    /// Raw positional at `index`, or `None` if out of range.
    pub fn positional_os(&self, index: usize) -> Option<&OsStr> {
        self.positionals.get(index).map(OsString::as_os_str)
    }

    /// Positional at `index`; `None` if out of range or not valid Unicode.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional_os(index)?.to_str()
    }

    /// Positional at `index`, or `default` if [`Self::positional`] has none.
    pub fn positional_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.positional(index).unwrap_or(default)
    }

    /// All named options, in no particular order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &OsStr)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_os_str()))
    }

    /// All positionals, in input order.
    pub fn positionals(&self) -> &[OsString] {
        &self.positionals
    }
}
