// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for policy parsing and defaults configuration.
//!
//! Defaulting itself is total and has no error type. Errors only arise when parsing
//! policy values from strings or loading operator-supplied defaults.

use thiserror::Error;

/// A string did not name a known autoscaler class.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown autoscaler class '{0}'")]
pub struct ParseClassError(pub String);

/// A string did not name a known scaling metric.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown scaling metric '{0}'")]
pub struct ParseMetricError(pub String);

/// Errors that can occur while loading operator-supplied defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The default class was configured as an empty string
    #[error("Default autoscaler class '{key}' must not be empty")]
    EmptyClass {
        /// The configuration key that held the empty value
        key: String,
    },

    /// A numeric key held a value that is not an integer
    #[error("Invalid integer for '{key}': '{value}'")]
    InvalidInteger {
        /// The configuration key being parsed
        key: String,
        /// The raw value found under the key
        value: String,
        /// Underlying parse failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// The default container concurrency lies outside `[0, max_limit]`
    #[error("Default container concurrency {value} must be between 0 and {max_limit}")]
    ContainerConcurrencyOutOfRange {
        /// Configured default
        value: i64,
        /// Configured ceiling
        max_limit: i64,
    },

    /// The container concurrency ceiling is below 1
    #[error("Container concurrency max limit {value} must be at least 1")]
    InvalidMaxLimit {
        /// Configured ceiling
        value: i64,
    },

    /// The container concurrency ceiling exceeds what the resource schema admits
    #[error("Container concurrency max limit {value} must not exceed {ceiling}")]
    MaxLimitTooHigh {
        /// Configured ceiling
        value: i64,
        /// Largest value the `containerConcurrency` schema accepts
        ceiling: i64,
    },

    /// The YAML document could not be decoded
    #[error("Failed to parse defaults YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The defaults file could not be read
    #[error("Failed to read defaults file '{path}': {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
