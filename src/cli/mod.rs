//! Command-line interface module.

mod args;
pub mod common;
pub mod convert;
pub mod info;
pub mod optimize;
pub mod resize;
pub mod session;

pub use args::{Cli, Commands, ResizeArgs};
