//! Command-line interface for cloud-detect.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`detect`] - The detection command

pub mod args;
pub mod detect;

pub use args::Cli;
pub use detect::DetectCommand;
