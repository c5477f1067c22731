//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;
use wtd::args::LaunchParams;
use wtd::launch::{AppResolver, LaunchError, ProcessSpawner};

pub fn raw_args(args: Vec<&str>) -> Vec<OsString> {
    args.into_iter().map(OsString::from).collect()
}

/// Resolver that fails like a missing App Paths key.
pub struct MissingKey;

impl AppResolver for MissingKey {
    fn name(&self) -> &'static str {
        "missing-key"
    }

    fn resolve(&self) -> Result<PathBuf, LaunchError> {
        Err(LaunchError::RegistryOpen {
            key: "HKCU\\Test\\wt.exe".to_string(),
            source: io::Error::from_raw_os_error(2),
        })
    }
}

/// Spawner that records every launch it is asked for.
#[derive(Clone, Default)]
pub struct RecordingSpawner {
    pub launches: Rc<RefCell<Vec<LaunchParams>>>,
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, params: &LaunchParams) -> io::Result<()> {
        self.launches.borrow_mut().push(params.clone());
        Ok(())
    }
}

/// Output that rejects every write.
pub struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Spawner that always fails with the given OS code.
pub struct FailingSpawner(pub i32);

impl ProcessSpawner for FailingSpawner {
    fn spawn(&self, _params: &LaunchParams) -> io::Result<()> {
        Err(io::Error::from_raw_os_error(self.0))
    }
}

pub fn work_dir() -> io::Result<PathBuf> {
    Ok(PathBuf::from("C:\\work"))
}

pub fn no_dir() -> io::Result<PathBuf> {
    Err(io::Error::from_raw_os_error(3))
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A path inside `dir` that does not exist.
pub fn missing_program(dir: &Path) -> PathBuf {
    dir.join("no-such-terminal")
}
