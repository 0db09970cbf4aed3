//! Weather Dashboard library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod app;
pub mod config;
pub mod ui;
