// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use tiny_checks_domain as domain;
pub use tiny_checks_shared_kernel as shared_kernel;
