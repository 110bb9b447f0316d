// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common fixtures and proptest strategies for integration tests

#![allow(dead_code)]

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use podautoscaler::annotations::{
    CLASS_ANNOTATION_KEY, METRIC_ANNOTATION_KEY, MIN_SCALE_ANNOTATION_KEY,
};
use podautoscaler::config::Defaults;
use podautoscaler::constants::{CLASS_HPA, CLASS_KPA, METRIC_CONCURRENCY, METRIC_CPU, METRIC_RPS};
use podautoscaler::crd::{PodAutoscaler, PodAutoscalerSpec, PodAutoscalerStatus, ProtocolType};
use proptest::collection::btree_map;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Build a `PodAutoscaler` with the given annotations and container concurrency.
pub fn build_pa(annotations: Option<&[(&str, &str)]>, concurrency: Option<i64>) -> PodAutoscaler {
    PodAutoscaler {
        metadata: ObjectMeta {
            annotations: annotations.map(|pairs| {
                pairs
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect()
            }),
            ..Default::default()
        },
        spec: PodAutoscalerSpec {
            container_concurrency: concurrency,
            ..Default::default()
        },
        status: None,
    }
}

/// Class values including ones the policy table does not know.
fn class_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(CLASS_KPA.to_string()),
        Just(CLASS_HPA.to_string()),
        Just(String::new()),
        "[a-z]{1,8}\\.example\\.com",
    ]
}

fn metric_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(METRIC_CONCURRENCY.to_string()),
        Just(METRIC_CPU.to_string()),
        Just(METRIC_RPS.to_string()),
        "[a-z]{1,8}",
    ]
}

fn annotations() -> impl Strategy<Value = Option<BTreeMap<String, String>>> {
    (
        proptest::option::of(class_value()),
        proptest::option::of(metric_value()),
        btree_map("[a-z]{1,6}/[a-z]{1,6}", "[a-z0-9]{0,6}", 0..3),
        proptest::option::of(0..20i32),
        any::<bool>(),
    )
        .prop_map(|(class, metric, extra, min_scale, absent)| {
            let mut map = extra;
            if let Some(class) = class {
                map.insert(CLASS_ANNOTATION_KEY.to_string(), class);
            }
            if let Some(metric) = metric {
                map.insert(METRIC_ANNOTATION_KEY.to_string(), metric);
            }
            if let Some(min_scale) = min_scale {
                map.insert(MIN_SCALE_ANNOTATION_KEY.to_string(), min_scale.to_string());
            }
            // An absent map and an empty map are distinct inputs
            if absent && map.is_empty() {
                None
            } else {
                Some(map)
            }
        })
}

fn protocol_type() -> impl Strategy<Value = Option<ProtocolType>> {
    proptest::option::of(prop_oneof![Just(ProtocolType::Http1), Just(ProtocolType::H2c)])
}

fn status() -> impl Strategy<Value = Option<PodAutoscalerStatus>> {
    proptest::option::of((0..10i32, 0..10i32).prop_map(|(desired, actual)| {
        PodAutoscalerStatus {
            desired_scale: Some(desired),
            actual_scale: Some(actual),
            ..Default::default()
        }
    }))
}

/// Arbitrary partially populated `PodAutoscaler`.
pub fn pod_autoscaler() -> impl Strategy<Value = PodAutoscaler> {
    (
        annotations(),
        proptest::option::of(0..=1000i64),
        proptest::option::of("[a-z]{1,10}"),
        protocol_type(),
        status(),
    )
        .prop_map(|(annotations, concurrency, name, protocol_type, status)| {
            PodAutoscaler {
                metadata: ObjectMeta {
                    name,
                    annotations,
                    ..Default::default()
                },
                spec: PodAutoscalerSpec {
                    container_concurrency: concurrency,
                    protocol_type,
                    ..Default::default()
                },
                status,
            }
        })
}

/// Arbitrary valid operator defaults.
pub fn operator_defaults() -> impl Strategy<Value = Defaults> {
    (
        prop_oneof![Just(CLASS_KPA.to_string()), Just(CLASS_HPA.to_string())],
        0..=100i64,
    )
        .prop_map(|(pod_autoscaler_class, container_concurrency)| Defaults {
            pod_autoscaler_class,
            container_concurrency,
            ..Defaults::default()
        })
}
