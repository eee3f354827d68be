//! Core domain types and utilities for the cadence scheduling platform.
//!
//! This crate provides the foundational identifier types and error handling
//! shared by the cadence crates.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::JobId;
