//! The one option the launcher consumes itself.
//!
//! Every other argument is forwarded to the terminal untouched.

use std::ffi::OsStr;

/// A flag with a long and an optional short spelling.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Primary long form (e.g., "--startingDirectory").
    pub long: &'static str,
    /// Optional short form (e.g., "-d").
    pub short: Option<&'static str>,
}

/// Working-directory override. The short form is also what gets emitted.
pub const STARTING_DIRECTORY: FlagDef = FlagDef {
    long: "--startingDirectory",
    short: Some("-d"),
};

impl FlagDef {
    /// Check if this definition matches the given argument exactly.
    pub fn matches(&self, arg: impl AsRef<OsStr>) -> bool {
        let arg = arg.as_ref();
        arg == self.long || self.short.is_some_and(|short| arg == short)
    }

    /// Names under which the classifier stores this flag, short form first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.short
            .into_iter()
            .chain(std::iter::once(self.long))
            .map(|s| s.trim_start_matches('-'))
    }

    /// Spelling used when re-injecting the flag.
    pub fn emitted(&self) -> &'static str {
        self.short.unwrap_or(self.long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_both_spellings_exactly() {
        assert!(STARTING_DIRECTORY.matches("-d"));
        assert!(STARTING_DIRECTORY.matches("--startingDirectory"));
        assert!(!STARTING_DIRECTORY.matches("--d"));
        assert!(!STARTING_DIRECTORY.matches("-startingDirectory"));
    }

    #[test]
    fn names_are_stripped_short_first() {
        let names: Vec<_> = STARTING_DIRECTORY.names().collect();
        assert_eq!(names, vec!["d", "startingDirectory"]);
    }

    #[test]
    fn long_only_flag_emits_long_form() {
        let flag = FlagDef {
            long: "--title",
            short: None,
        };
        assert_eq!(flag.emitted(), "--title");
        assert_eq!(flag.names().collect::<Vec<_>>(), vec!["title"]);
    }
}
