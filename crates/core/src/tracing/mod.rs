//! Tracing subscriber setup for native hosts
//!
//! Library code only emits `tracing` events; binaries and test harnesses
//! call [`init_tracing`] once to print them.

pub mod config;
pub mod init;

pub use config::InstrumentationConfig;
pub use init::{init_default, init_dev, init_tracing};
