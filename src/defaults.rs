// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Defaulting for `PodAutoscaler` resources.
//!
//! Defaulting fills in fields a caller left unset and never touches a field that is
//! already set. It runs once on a decoded object before the object is handed on for
//! validation or reconciliation. The operation is total: it cannot fail, performs no
//! I/O and holds no state between calls, so applying it twice is the same as applying
//! it once.
//!
//! # Resolution order
//!
//! 1. The annotations map is created if missing.
//! 2. Class: a present class annotation is kept verbatim, otherwise the default class
//!    is set.
//! 3. Metric: a present metric annotation is kept, otherwise it is derived from the
//!    class resolved in step 2 via [`crate::policy::default_metric_for`].
//! 4. Container concurrency: a present value (including `0`) is kept, otherwise the
//!    default is set.
//!
//! # Example
//!
//! ```rust
//! use podautoscaler::annotations::{CLASS_ANNOTATION_KEY, METRIC_ANNOTATION_KEY};
//! use podautoscaler::crd::PodAutoscaler;
//! use podautoscaler::defaults::Defaultable;
//!
//! let pa = PodAutoscaler::default().with_defaults();
//!
//! let annotations = pa.metadata.annotations.as_ref().unwrap();
//! assert_eq!(annotations[CLASS_ANNOTATION_KEY], "kpa.autoscaling.knative.dev");
//! assert_eq!(annotations[METRIC_ANNOTATION_KEY], "concurrency");
//! assert_eq!(pa.spec.container_concurrency, Some(0));
//! ```

use crate::annotations::{CLASS_ANNOTATION_KEY, METRIC_ANNOTATION_KEY};
use crate::config::Defaults;
use crate::crd::{PodAutoscaler, PodAutoscalerSpec};
use crate::policy::default_metric_for;
use std::sync::LazyLock;

static BUILTIN_DEFAULTS: LazyLock<Defaults> = LazyLock::new(Defaults::default);

/// Types that can fill their unset fields with defaults.
pub trait Defaultable {
    /// Fill unset fields from `defaults`, leaving set fields untouched.
    fn set_defaults_with(&mut self, defaults: &Defaults);

    /// Fill unset fields from the built-in defaults.
    fn set_defaults(&mut self) {
        self.set_defaults_with(&BUILTIN_DEFAULTS);
    }

    /// By-value form of [`Self::set_defaults`].
    #[must_use]
    fn with_defaults(mut self) -> Self
    where
        Self: Sized,
    {
        self.set_defaults();
        self
    }
}

impl Defaultable for PodAutoscalerSpec {
    fn set_defaults_with(&mut self, defaults: &Defaults) {
        if self.container_concurrency.is_none() {
            self.container_concurrency = Some(defaults.container_concurrency);
        }
    }
}

impl Defaultable for PodAutoscaler {
    fn set_defaults_with(&mut self, defaults: &Defaults) {
        let annotations = self.metadata.annotations.get_or_insert_with(Default::default);

        let class = annotations
            .entry(CLASS_ANNOTATION_KEY.to_string())
            .or_insert_with(|| defaults.pod_autoscaler_class.clone())
            .clone();

        annotations
            .entry(METRIC_ANNOTATION_KEY.to_string())
            .or_insert_with(|| default_metric_for(&class).as_str().to_string());

        self.spec.set_defaults_with(defaults);
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod defaults_tests;
