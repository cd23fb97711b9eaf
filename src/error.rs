//! Simulation errors
//!
//! Contract violations (bad geometry handed to a constructor) and
//! configuration documents that fail to decode. Expected query misses such as
//! "no obstacle here" are `Option::None`, never errors.

use thiserror::Error;

use crate::sim::Vector;

#[derive(Debug, Error)]
pub enum SimError {
    /// A vector argument had a NaN or infinite component
    #[error("{what} must be a finite vector, got ({}, {})", value.x, value.y)]
    NonFinite { what: &'static str, value: Vector },
    /// Actor size with a negative component
    #[error("actor size must be non-negative, got ({}, {})", .0.x, .0.y)]
    NegativeSize(Vector),
    /// Settings or symbol table JSON did not decode
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
