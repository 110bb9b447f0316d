// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definition (CRD) for pod autoscaling.
//!
//! This module defines the [`PodAutoscaler`] resource: the internal object that binds a
//! scalable workload to an autoscaler implementation. Scaling knobs outside the typed
//! spec (class, metric, bounds, target, window) travel as annotations, see
//! [`crate::annotations`].
//!
//! # Example: Creating a PodAutoscaler
//!
//! ```rust,no_run
//! use podautoscaler::crd::{PodAutoscaler, PodAutoscalerSpec, ProtocolType};
//! use k8s_openapi::api::core::v1::ObjectReference;
//!
//! let spec = PodAutoscalerSpec {
//!     container_concurrency: Some(10),
//!     scale_target_ref: ObjectReference {
//!         api_version: Some("apps/v1".to_string()),
//!         kind: Some("Deployment".to_string()),
//!         name: Some("hello-deployment".to_string()),
//!         ..Default::default()
//!     },
//!     protocol_type: Some(ProtocolType::Http1),
//! };
//!
//! let pa = PodAutoscaler::new("hello", spec);
//! ```

use crate::constants::DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT;
use k8s_openapi::api::core::v1::ObjectReference;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Condition represents an observation of a resource's current state.
///
/// Conditions are used in status subresources to communicate the state of
/// a resource to users and controllers.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition. Common types include: Ready, Active, `ScaleTargetInitialized`.
    pub r#type: String,

    /// Status of the condition: True, False, or Unknown.
    pub status: String,

    /// Brief CamelCase reason for the condition's last transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Human-readable message indicating details about the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Last time the condition transitioned from one status to another (RFC3339 format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// Application protocol spoken by the scaled workload.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum ProtocolType {
    /// HTTP/1.1
    #[serde(rename = "http1")]
    Http1,
    /// HTTP/2 over cleartext
    #[serde(rename = "h2c")]
    H2c,
}

/// `PodAutoscaler` status
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodAutoscalerStatus {
    /// Status conditions, `Ready` among them.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Generation of the spec most recently acted on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Name of the Service fronting the scaled pods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Name of the Service scraped for scaling metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_service_name: Option<String>,
    /// Replica count the autoscaler last asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_scale: Option<i32>,
    /// Replica count observed on the scale target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_scale: Option<i32>,
}

/// `PodAutoscaler` binds a scalable workload to an autoscaler implementation.
///
/// The autoscaler class and the metric it scales on are chosen through annotations.
/// Objects are passed through [`crate::defaults::Defaultable`] before they are handed
/// on, which guarantees class, metric and container concurrency are always set.
///
/// # Example
///
/// ```yaml
/// apiVersion: autoscaling.internal.knative.dev/v1alpha1
/// kind: PodAutoscaler
/// metadata:
///   name: hello
///   namespace: default
///   annotations:
///     autoscaling.knative.dev/class: kpa.autoscaling.knative.dev
///     autoscaling.knative.dev/metric: concurrency
/// spec:
///   containerConcurrency: 0
///   scaleTargetRef:
///     apiVersion: apps/v1
///     kind: Deployment
///     name: hello-deployment
///   protocolType: http1
/// ```
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[kube(
    group = "autoscaling.internal.knative.dev",
    version = "v1alpha1",
    kind = "PodAutoscaler",
    namespaced,
    shortname = "kpa",
    shortname = "pa",
    derive = "PartialEq",
    derive = "Default",
    doc = "PodAutoscaler binds a scalable workload to an autoscaler implementation. The autoscaler class and scaling metric are selected through annotations."
)]
#[kube(status = "PodAutoscalerStatus")]
#[kube(
    printcolumn = r#"{"name":"DesiredScale","type":"integer","jsonPath":".status.desiredScale"}"#,
    printcolumn = r#"{"name":"ActualScale","type":"integer","jsonPath":".status.actualScale"}"#,
    printcolumn = r#"{"name":"Ready","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PodAutoscalerSpec {
    /// Maximum number of requests a single replica handles at once.
    ///
    /// `0` means unbounded. Unset values are filled in by defaulting; an explicit `0`
    /// is kept as the caller's choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT))]
    pub container_concurrency: Option<i64>,

    /// Reference to the workload (e.g. a Deployment) whose replicas are scaled.
    #[serde(default)]
    pub scale_target_ref: ObjectReference,

    /// Protocol the workload serves, used to pick how requests are proxied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<ProtocolType>,
}

#[cfg(test)]
#[path = "crd_tests.rs"]
mod crd_tests;
