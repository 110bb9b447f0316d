// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Autoscaling annotation keys and read-side accessors for `PodAutoscaler`.
//!
//! Scaling knobs that are not part of the typed spec travel as annotations on the
//! resource. This module defines the keys and the helpers that resolve them, falling
//! back to the same policy the defaulter applies when an annotation is absent.
//!
//! # Example
//!
//! ```rust
//! use podautoscaler::annotations::{CLASS_ANNOTATION_KEY, MIN_SCALE_ANNOTATION_KEY};
//! use podautoscaler::constants::{CLASS_HPA, METRIC_CPU};
//! use podautoscaler::crd::{PodAutoscaler, PodAutoscalerSpec};
//! use std::collections::BTreeMap;
//!
//! let mut pa = PodAutoscaler::new("hello", PodAutoscalerSpec::default());
//! pa.metadata.annotations = Some(BTreeMap::from([
//!     (CLASS_ANNOTATION_KEY.to_string(), CLASS_HPA.to_string()),
//!     (MIN_SCALE_ANNOTATION_KEY.to_string(), "2".to_string()),
//! ]));
//!
//! assert_eq!(pa.class(), CLASS_HPA);
//! assert_eq!(pa.metric(), METRIC_CPU);
//! assert_eq!(pa.scale_bounds(), (2, 0));
//! ```

use crate::constants::{
    DEFAULT_CONTAINER_CONCURRENCY, TARGET_MIN, WINDOW_MAX_SECS, WINDOW_MIN_SECS,
};
use crate::crd::PodAutoscaler;
use crate::duration::parse_go_duration;
use crate::policy::{default_metric_for, DEFAULT_CLASS};
use std::time::Duration;

// ============================================================================
// Autoscaling Annotations
// ============================================================================

/// Annotation selecting the autoscaler implementation (KPA, HPA, ...)
pub const CLASS_ANNOTATION_KEY: &str = "autoscaling.knative.dev/class";

/// Annotation selecting the signal the autoscaler scales on
pub const METRIC_ANNOTATION_KEY: &str = "autoscaling.knative.dev/metric";

/// Annotation holding the lower replica bound
pub const MIN_SCALE_ANNOTATION_KEY: &str = "autoscaling.knative.dev/minScale";

/// Annotation holding the upper replica bound (0 = unbounded)
pub const MAX_SCALE_ANNOTATION_KEY: &str = "autoscaling.knative.dev/maxScale";

/// Annotation holding the per-replica target for the selected metric
pub const TARGET_ANNOTATION_KEY: &str = "autoscaling.knative.dev/target";

/// Annotation holding the stable averaging window as a Go-style duration
pub const WINDOW_ANNOTATION_KEY: &str = "autoscaling.knative.dev/window";

impl PodAutoscaler {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata
            .annotations
            .as_ref()
            .and_then(|annotations| annotations.get(key))
            .map(String::as_str)
    }

    /// Autoscaler class of this resource.
    ///
    /// Returns the class annotation verbatim when present, otherwise the built-in
    /// default class. Unknown classes are returned as-is.
    #[must_use]
    pub fn class(&self) -> &str {
        self.annotation(CLASS_ANNOTATION_KEY).unwrap_or(DEFAULT_CLASS.as_str())
    }

    /// Metric the autoscaler scales on.
    ///
    /// Returns the metric annotation verbatim when present, otherwise the default
    /// metric for [`Self::class`].
    #[must_use]
    pub fn metric(&self) -> &str {
        self.annotation(METRIC_ANNOTATION_KEY)
            .unwrap_or_else(|| default_metric_for(self.class()).as_str())
    }

    /// Replica bounds as `(min, max)`.
    ///
    /// Missing or unparseable annotations read as `0`. A max of `0` means unbounded.
    #[must_use]
    pub fn scale_bounds(&self) -> (i32, i32) {
        let bound = |key: &str| {
            self.annotation(key)
                .and_then(|value| value.parse::<i32>().ok())
                .unwrap_or(0)
        };
        (
            bound(MIN_SCALE_ANNOTATION_KEY),
            bound(MAX_SCALE_ANNOTATION_KEY),
        )
    }

    /// Per-replica target for the scaling metric, if set to a usable value.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.annotation(TARGET_ANNOTATION_KEY)
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|target| *target >= TARGET_MIN)
    }

    /// Stable window, if set to a duration within the accepted range.
    #[must_use]
    pub fn window(&self) -> Option<Duration> {
        let min = Duration::from_secs(WINDOW_MIN_SECS);
        let max = Duration::from_secs(WINDOW_MAX_SECS);

        self.annotation(WINDOW_ANNOTATION_KEY)
            .and_then(|value| parse_go_duration(value).ok())
            .filter(|window| (min..=max).contains(window))
    }

    /// Container concurrency from the spec, `0` (unbounded) when unset.
    #[must_use]
    pub fn container_concurrency(&self) -> i64 {
        self.spec
            .container_concurrency
            .unwrap_or(DEFAULT_CONTAINER_CONCURRENCY)
    }
}

#[cfg(test)]
#[path = "annotations_tests.rs"]
mod annotations_tests;
