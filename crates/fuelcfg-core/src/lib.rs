//! # fuelcfg-core
//!
//! Core types and utilities shared across all fuelcfg crates.
//!
//! This crate provides:
//! - FuelcfgError enum for unified error handling
//! - Lexical path normalization and base-directory resolution
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod utils;

// Re-export commonly used types
pub use error::{FuelcfgError, FuelcfgResult};
