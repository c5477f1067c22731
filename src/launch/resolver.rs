//! Application resolvers — find the terminal executable.

use std::path::PathBuf;

use crate::config::LauncherConfig;
use crate::launch::error::LaunchError;

/// Per-user application registration key, relative to `HKEY_CURRENT_USER`.
pub const APP_PATHS_SUBKEY: &str = r"Software\Microsoft\Windows\CurrentVersion\App Paths";

/// Trait for locating an installed application.
pub trait AppResolver {
    /// Returns the name of this resolver for logging.
    fn name(&self) -> &'static str;

    /// Resolve the executable path. Called once per launch.
    fn resolve(&self) -> Result<PathBuf, LaunchError>;
}

/// Full registry path for `application`, as shown in diagnostics.
pub fn app_paths_key(application: &str) -> String {
    format!(r"HKCU\{}\{}", APP_PATHS_SUBKEY, application)
}

/// Path taken verbatim from configuration.
#[derive(Debug, Clone)]
pub struct FixedPath {
    path: PathBuf,
}

impl FixedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AppResolver for FixedPath {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn resolve(&self) -> Result<PathBuf, LaunchError> {
        Ok(self.path.clone())
    }
}

/// Default value of the application's App Paths key.
#[cfg(windows)]
#[derive(Debug, Clone)]
pub struct AppPathsRegistry {
    application: String,
}

#[cfg(windows)]
impl AppPathsRegistry {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
        }
    }
}

#[cfg(windows)]
impl AppResolver for AppPathsRegistry {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn resolve(&self) -> Result<PathBuf, LaunchError> {
        use winreg::enums::{HKEY_CURRENT_USER, KEY_QUERY_VALUE};
        use winreg::RegKey;

        let subkey = format!(r"{}\{}", APP_PATHS_SUBKEY, self.application);
        let key = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags(&subkey, KEY_QUERY_VALUE)
            .map_err(|source| LaunchError::RegistryOpen {
                key: app_paths_key(&self.application),
                source,
            })?;

        let value: String = key
            .get_value("")
            .map_err(|source| LaunchError::RegistryQuery {
                key: app_paths_key(&self.application),
                source,
            })?;

        Ok(PathBuf::from(value))
    }
}

/// First match for the application on `PATH`.
#[derive(Debug, Clone)]
pub struct SearchPath {
    application: String,
}

impl SearchPath {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
        }
    }
}

impl AppResolver for SearchPath {
    fn name(&self) -> &'static str {
        "path"
    }

    fn resolve(&self) -> Result<PathBuf, LaunchError> {
        which::which(&self.application).map_err(|source| LaunchError::NotOnPath {
            application: self.application.clone(),
            source,
        })
    }
}

/// Pick the resolver for this platform and configuration.
///
/// An explicit `app_path` always wins. Otherwise Windows reads App Paths
/// and other platforms search `PATH`.
pub fn resolver_for(config: &LauncherConfig) -> Box<dyn AppResolver> {
    if let Some(path) = &config.app_path {
        return Box::new(FixedPath::new(path.clone()));
    }

    #[cfg(windows)]
    return Box::new(AppPathsRegistry::new(config.application.clone()));

    #[cfg(not(windows))]
    return Box::new(SearchPath::new(config.application.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_matches_registry_layout() {
        assert_eq!(
            app_paths_key("wt.exe"),
            r"HKCU\Software\Microsoft\Windows\CurrentVersion\App Paths\wt.exe"
        );
    }

    #[test]
    fn configured_path_skips_lookup() {
        let config = LauncherConfig {
            app_path: Some(PathBuf::from("/opt/term/bin/term")),
            ..LauncherConfig::default()
        };
        let resolver = resolver_for(&config);
        assert_eq!(resolver.name(), "fixed");
        assert_eq!(resolver.resolve().unwrap(), PathBuf::from("/opt/term/bin/term"));
    }

    #[test]
    fn missing_executable_on_path_is_not_found() {
        let err = SearchPath::new("wtd-test-no-such-binary-7f3a")
            .resolve()
            .unwrap_err();
        assert!(matches!(err, LaunchError::NotOnPath { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
