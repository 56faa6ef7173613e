//! # pydeps-core
//!
//! Foundation crate for the pydeps import analyzer.
//! Errors, configuration, tracing setup, and shared collection types.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
