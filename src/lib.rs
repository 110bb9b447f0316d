// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # PodAutoscaler - autoscaling resource types and defaulting for Kubernetes
//!
//! This library provides the `PodAutoscaler` custom resource and the defaulting that
//! runs on every decoded object before it is validated or reconciled.
//!
//! ## Overview
//!
//! A `PodAutoscaler` binds a scalable workload to an autoscaler implementation. The
//! implementation (class) and the signal it scales on (metric) are chosen through
//! annotations. Defaulting guarantees both annotations and the container concurrency
//! are present without ever overwriting what the caller set.
//!
//! ## Modules
//!
//! - [`crd`] - Custom Resource Definition types for `PodAutoscaler`
//! - [`defaults`] - The `Defaultable` trait and `PodAutoscaler` defaulting
//! - [`policy`] - Class and metric values and the class → metric table
//! - [`annotations`] - Annotation keys and read-side accessors
//! - [`config`] - Operator-supplied defaults from ConfigMaps or YAML
//! - [`duration`] - Go-style duration parsing for annotation values
//! - [`constants`] - API and policy constants
//! - [`errors`] - Error types for parsing and configuration
//!
//! ## Example
//!
//! ```rust
//! use podautoscaler::annotations::CLASS_ANNOTATION_KEY;
//! use podautoscaler::constants::{CLASS_HPA, METRIC_CPU};
//! use podautoscaler::crd::{PodAutoscaler, PodAutoscalerSpec};
//! use podautoscaler::defaults::Defaultable;
//! use std::collections::BTreeMap;
//!
//! let mut pa = PodAutoscaler::new("hello", PodAutoscalerSpec::default());
//! pa.metadata.annotations = Some(BTreeMap::from([(
//!     CLASS_ANNOTATION_KEY.to_string(),
//!     CLASS_HPA.to_string(),
//! )]));
//!
//! pa.set_defaults();
//!
//! assert_eq!(pa.metric(), METRIC_CPU);
//! assert_eq!(pa.spec.container_concurrency, Some(0));
//! ```

pub mod annotations;
pub mod config;
pub mod constants;
pub mod crd;
pub mod defaults;
pub mod duration;
pub mod errors;
pub mod policy;
