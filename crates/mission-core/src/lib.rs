//! Core types and utilities for the mission statement genome system.

pub mod types;
pub mod config;
pub mod error;
pub mod report;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
pub use report::*;
