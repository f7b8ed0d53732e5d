//! Task API library
//!
//! Exports the store, service and HTTP layers for the binary and for tests.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod service;
pub mod types;
