// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Autoscaling policy values and the class → metric defaulting table.
//!
//! Class and metric annotation values are modelled as enums so the mapping between
//! them lives in one table, [`CLASS_POLICIES`]. Adding a class with its own default
//! metric means adding a variant and a row; the defaulter's control flow does not
//! change.
//!
//! Annotation values are still plain strings on the resource. Classes the table does
//! not know about are carried through untouched and get [`FALLBACK_METRIC`].
//!
//! # Example
//!
//! ```rust
//! use podautoscaler::policy::{default_metric_for, Class, Metric};
//!
//! assert_eq!(default_metric_for(Class::Hpa.as_str()), Metric::Cpu);
//! assert_eq!(default_metric_for(Class::Kpa.as_str()), Metric::Concurrency);
//! assert_eq!(default_metric_for("custom.example.com"), Metric::Concurrency);
//! ```

use crate::constants::{CLASS_HPA, CLASS_KPA, METRIC_CONCURRENCY, METRIC_CPU, METRIC_RPS};
use crate::errors::{ParseClassError, ParseMetricError};
use std::fmt;
use std::str::FromStr;

/// Autoscaler implementation selected by the class annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    /// Knative Pod Autoscaler (request-driven, supports scale to zero)
    Kpa,
    /// Kubernetes Horizontal Pod Autoscaler (resource-driven)
    Hpa,
}

impl Class {
    /// Annotation value for this class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kpa => CLASS_KPA,
            Self::Hpa => CLASS_HPA,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Class {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CLASS_KPA => Ok(Self::Kpa),
            CLASS_HPA => Ok(Self::Hpa),
            other => Err(ParseClassError(other.to_string())),
        }
    }
}

/// Signal the autoscaler scales on, selected by the metric annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// In-flight requests per replica
    Concurrency,
    /// CPU utilization
    Cpu,
    /// Requests per second per replica
    Rps,
}

impl Metric {
    /// Annotation value for this metric.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concurrency => METRIC_CONCURRENCY,
            Self::Cpu => METRIC_CPU,
            Self::Rps => METRIC_RPS,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            METRIC_CONCURRENCY => Ok(Self::Concurrency),
            METRIC_CPU => Ok(Self::Cpu),
            METRIC_RPS => Ok(Self::Rps),
            other => Err(ParseMetricError(other.to_string())),
        }
    }
}

/// Default metric per known class.
pub const CLASS_POLICIES: &[(Class, Metric)] = &[
    (Class::Kpa, Metric::Concurrency),
    (Class::Hpa, Metric::Cpu),
];

/// Metric used for classes missing from [`CLASS_POLICIES`].
pub const FALLBACK_METRIC: Metric = Metric::Concurrency;

/// Class applied when a resource does not name one.
pub const DEFAULT_CLASS: Class = Class::Kpa;

/// Default metric for a class annotation value.
///
/// Unknown values are not an error: they get [`FALLBACK_METRIC`].
#[must_use]
pub fn default_metric_for(class: &str) -> Metric {
    CLASS_POLICIES
        .iter()
        .find(|(known, _)| known.as_str() == class)
        .map_or(FALLBACK_METRIC, |(_, metric)| *metric)
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
