use std::path::PathBuf;

use serde::Deserialize;

/// Root configuration container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// How the terminal is found and launched.
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    /// Executable name looked up in App Paths (Windows) or on PATH.
    #[serde(default = "default_application")]
    pub application: String,
    /// Explicit executable path. Skips the lookup entirely.
    #[serde(default)]
    pub app_path: Option<PathBuf>,
    /// Print the assembled command line before spawning.
    /// Defaults to on in debug builds only.
    #[serde(default)]
    pub echo_command_line: Option<bool>,
}

fn default_application() -> String {
    "wt.exe".to_string()
}

impl LauncherConfig {
    pub fn echo_command_line(&self) -> bool {
        self.echo_command_line.unwrap_or(cfg!(debug_assertions))
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            application: default_application(),
            app_path: None,
            echo_command_line: None,
        }
    }
}
