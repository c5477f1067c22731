//! Working-directory resolution for the `-d` clause.
//!
//! Works on `OsStr` so a directory that is not valid Unicode reaches the
//! terminal unchanged.

use std::ffi::{OsStr, OsString};

/// Path conventions used when resolving an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `C:\dir`, separator `\`.
    Windows,
    /// `/dir`, separator `/`.
    Posix,
}

impl PathStyle {
    /// Style of the platform we are running on.
    pub fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            PathStyle::Windows => "\\",
            PathStyle::Posix => "/",
        }
    }

    /// Is `dir` absolute under this style?
    ///
    /// Windows uses the drive-letter heuristic: an ASCII letter followed by `:`.
    pub fn is_absolute(self, dir: impl AsRef<OsStr>) -> bool {
        let bytes = dir.as_ref().as_encoded_bytes();
        match self {
            PathStyle::Windows => {
                matches!(bytes, [letter, b':', ..] if letter.is_ascii_alphabetic())
            }
            PathStyle::Posix => bytes.first() == Some(&b'/'),
        }
    }

    /// Remove a single trailing separator, if any.
    pub fn trim_trailing(self, dir: &OsStr) -> &OsStr {
        match dir.as_encoded_bytes().strip_suffix(self.separator().as_bytes()) {
            // SAFETY: `rest` ends right before an ASCII separator, which is a
            // valid split point of the encoded bytes.
            Some(rest) => unsafe { OsStr::from_encoded_bytes_unchecked(rest) },
            None => dir,
        }
    }
}

/// Pick the directory the new terminal starts in.
///
/// With no override the current directory is used. An absolute override
/// replaces it; a relative one is joined onto it.
pub fn resolve_directory(
    cwd: impl AsRef<OsStr>,
    dir_override: Option<&OsStr>,
    style: PathStyle,
) -> OsString {
    let cwd = cwd.as_ref();
    let resolved = match dir_override {
        None => cwd.to_os_string(),
        Some(dir) if style.is_absolute(dir) => dir.to_os_string(),
        Some(dir) => {
            let mut joined = style.trim_trailing(cwd).to_os_string();
            joined.push(style.separator());
            joined.push(dir);
            joined
        }
    };
    style.trim_trailing(&resolved).to_os_string()
}
