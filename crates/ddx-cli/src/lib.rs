//! Library components of the `ddx` command-line front end.

pub mod commands;
pub mod config;
pub mod intake;
pub mod logging;
pub mod render;
