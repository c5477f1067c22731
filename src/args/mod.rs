//! Argument handling pipeline for wtd.
//!
//! ```text
//! argv[1..] → Classify → Resolve directory → Assemble → LaunchParams
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod assembler;
mod classifier;
mod directory;
mod pipeline;
mod registry;

pub use assembler::ArgAssembler;
pub use classifier::{ParsedArgs, FLAG_VALUE};
pub use directory::{resolve_directory, PathStyle};
pub use pipeline::{build_launch_params, directory_override, LaunchParams};
pub use registry::{FlagDef, STARTING_DIRECTORY};
