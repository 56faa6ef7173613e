//! Shared types used across pydeps crates.

pub mod collections;
