// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the `PodAutoscaler` API.
//!
//! This module contains the numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// API group for the `PodAutoscaler` CRD
pub const API_GROUP: &str = "autoscaling.internal.knative.dev";

/// API version for the `PodAutoscaler` CRD
pub const API_VERSION: &str = "v1alpha1";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "autoscaling.internal.knative.dev/v1alpha1";

/// Kind name for `PodAutoscaler` resource
pub const KIND_POD_AUTOSCALER: &str = "PodAutoscaler";

// ============================================================================
// Class and Metric Values
// ============================================================================

/// Class value selecting the Knative Pod Autoscaler
pub const CLASS_KPA: &str = "kpa.autoscaling.knative.dev";

/// Class value selecting the Kubernetes Horizontal Pod Autoscaler
pub const CLASS_HPA: &str = "hpa.autoscaling.knative.dev";

/// Metric value for scaling on in-flight request concurrency
pub const METRIC_CONCURRENCY: &str = "concurrency";

/// Metric value for scaling on CPU utilization
pub const METRIC_CPU: &str = "cpu";

/// Metric value for scaling on requests per second
pub const METRIC_RPS: &str = "rps";

// ============================================================================
// Defaulting Constants
// ============================================================================

/// Container concurrency applied when the spec leaves it unset (0 = unbounded)
pub const DEFAULT_CONTAINER_CONCURRENCY: i64 = 0;

/// Upper bound an operator may configure for the default container concurrency
pub const DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT: i64 = 1000;

// ============================================================================
// Annotation Bounds
// ============================================================================

/// Smallest usable value of the target annotation
pub const TARGET_MIN: f64 = 0.01;

/// Shortest accepted stable window (6 seconds)
pub const WINDOW_MIN_SECS: u64 = 6;

/// Longest accepted stable window (1 hour)
pub const WINDOW_MAX_SECS: u64 = 3600;

// ============================================================================
// Defaults ConfigMap Keys
// ============================================================================

/// ConfigMap key overriding the default autoscaler class
pub const CONFIG_KEY_POD_AUTOSCALER_CLASS: &str = "pod-autoscaler-class";

/// ConfigMap key overriding the default container concurrency
pub const CONFIG_KEY_CONTAINER_CONCURRENCY: &str = "container-concurrency";

/// ConfigMap key overriding the container concurrency ceiling
pub const CONFIG_KEY_CONTAINER_CONCURRENCY_MAX_LIMIT: &str = "container-concurrency-max-limit";
