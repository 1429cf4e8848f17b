//! Logging testbed progress
mod display;

pub use display::DisplayLogger;
