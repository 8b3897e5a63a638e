// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Typed failures for the mix pipeline.
//!
//! Validation problems are recoverable and reported before any computation runs.
//! Model problems only disable the prediction path; metrics, curve and cost stay
//! computable from a manually supplied strength.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    #[error("unknown specimen shape: {0} (expected cylinder or cube)")]
    UnknownShape(String),

    #[error("invalid sensitivity sweep: {reason}")]
    InvalidSweep { reason: String },

    #[error("malformed request: {message}")]
    InvalidRequest { message: String },

    #[error("sampleCount = {count} exceeds the maximum of {max}")]
    SampleCount { count: usize, max: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("regression model unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("cannot read model artifact {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed model artifact: {message}")]
    Parse { message: String },

    #[error("model artifact schema version {found} is not supported (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("feature order mismatch at position {position}: expected {expected}, artifact has {found}")]
    FeatureOrderMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("model returned a non-finite strength")]
    NonFiniteOutput,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("cannot read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed config: {message}")]
    Parse { message: String },

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
