// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `PodAutoscaler` defaulting.

#[cfg(test)]
mod tests {
    use crate::annotations::{CLASS_ANNOTATION_KEY, METRIC_ANNOTATION_KEY, MIN_SCALE_ANNOTATION_KEY};
    use crate::config::Defaults;
    use crate::constants::{CLASS_HPA, CLASS_KPA, METRIC_CONCURRENCY, METRIC_CPU, METRIC_RPS};
    use crate::crd::{
        Condition, PodAutoscaler, PodAutoscalerSpec, PodAutoscalerStatus, ProtocolType,
    };
    use crate::defaults::Defaultable;
    use k8s_openapi::api::core::v1::ObjectReference;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn annotated(pairs: &[(&str, &str)]) -> PodAutoscaler {
        PodAutoscaler {
            metadata: ObjectMeta {
                annotations: Some(
                    pairs
                        .iter()
                        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                        .collect(),
                ),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn with_concurrency(pa: PodAutoscaler, concurrency: i64) -> PodAutoscaler {
        PodAutoscaler {
            spec: PodAutoscalerSpec {
                container_concurrency: Some(concurrency),
                ..pa.spec.clone()
            },
            ..pa
        }
    }

    // ========================================================================
    // Table-driven scenarios
    // ========================================================================

    #[test]
    fn test_pod_autoscaler_defaulting() {
        let cases = vec![
            (
                "empty",
                PodAutoscaler::default(),
                with_concurrency(
                    annotated(&[
                        (CLASS_ANNOTATION_KEY, CLASS_KPA),
                        (METRIC_ANNOTATION_KEY, METRIC_CONCURRENCY),
                    ]),
                    0,
                ),
            ),
            (
                "no overwrite",
                with_concurrency(PodAutoscaler::default(), 1),
                with_concurrency(
                    annotated(&[
                        (CLASS_ANNOTATION_KEY, CLASS_KPA),
                        (METRIC_ANNOTATION_KEY, METRIC_CONCURRENCY),
                    ]),
                    1,
                ),
            ),
            (
                "partially initialized",
                PodAutoscaler {
                    spec: PodAutoscalerSpec {
                        container_concurrency: None,
                        ..Default::default()
                    },
                    ..Default::default()
                },
                with_concurrency(
                    annotated(&[
                        (CLASS_ANNOTATION_KEY, CLASS_KPA),
                        (METRIC_ANNOTATION_KEY, METRIC_CONCURRENCY),
                    ]),
                    0,
                ),
            ),
            (
                "hpa class is not overwritten and defaults to cpu",
                annotated(&[(CLASS_ANNOTATION_KEY, CLASS_HPA)]),
                with_concurrency(
                    annotated(&[
                        (CLASS_ANNOTATION_KEY, CLASS_HPA),
                        (METRIC_ANNOTATION_KEY, METRIC_CPU),
                    ]),
                    0,
                ),
            ),
        ];

        for (name, input, want) in cases {
            let mut got = input;
            got.set_defaults();
            assert_eq!(want, got, "SetDefaults (-want, +got) for case '{name}'");
        }
    }

    // ========================================================================
    // Class and metric resolution
    // ========================================================================

    #[test]
    fn test_unknown_class_passes_through_with_concurrency_metric() {
        let mut pa = annotated(&[(CLASS_ANNOTATION_KEY, "custom.example.com")]);
        pa.set_defaults();

        let annotations = pa.metadata.annotations.unwrap();
        assert_eq!(annotations[CLASS_ANNOTATION_KEY], "custom.example.com");
        assert_eq!(annotations[METRIC_ANNOTATION_KEY], METRIC_CONCURRENCY);
    }

    #[test]
    fn test_empty_class_value_is_kept() {
        let mut pa = annotated(&[(CLASS_ANNOTATION_KEY, "")]);
        pa.set_defaults();

        let annotations = pa.metadata.annotations.unwrap();
        assert_eq!(annotations[CLASS_ANNOTATION_KEY], "");
        assert_eq!(annotations[METRIC_ANNOTATION_KEY], METRIC_CONCURRENCY);
    }

    #[test]
    fn test_existing_metric_is_kept_even_if_class_suggests_another() {
        let mut pa = annotated(&[
            (CLASS_ANNOTATION_KEY, CLASS_HPA),
            (METRIC_ANNOTATION_KEY, METRIC_RPS),
        ]);
        pa.set_defaults();

        let annotations = pa.metadata.annotations.unwrap();
        assert_eq!(annotations[CLASS_ANNOTATION_KEY], CLASS_HPA);
        assert_eq!(annotations[METRIC_ANNOTATION_KEY], METRIC_RPS);
    }

    #[test]
    fn test_metric_without_class_gets_default_class() {
        let mut pa = annotated(&[(METRIC_ANNOTATION_KEY, METRIC_CPU)]);
        pa.set_defaults();

        let annotations = pa.metadata.annotations.unwrap();
        assert_eq!(annotations[CLASS_ANNOTATION_KEY], CLASS_KPA);
        assert_eq!(annotations[METRIC_ANNOTATION_KEY], METRIC_CPU);
    }

    #[test]
    fn test_empty_annotation_map_is_filled() {
        let mut pa = annotated(&[]);
        pa.set_defaults();

        assert_eq!(pa.metadata.annotations.unwrap().len(), 2);
    }

    // ========================================================================
    // Container concurrency
    // ========================================================================

    #[test]
    fn test_explicit_zero_concurrency_is_kept() {
        let mut pa = with_concurrency(PodAutoscaler::default(), 0);
        pa.set_defaults_with(&Defaults {
            container_concurrency: 50,
            ..Defaults::default()
        });

        assert_eq!(pa.spec.container_concurrency, Some(0));
    }

    #[test]
    fn test_spec_defaulting_only_touches_concurrency() {
        let mut spec = PodAutoscalerSpec {
            container_concurrency: None,
            scale_target_ref: ObjectReference {
                kind: Some("Deployment".to_string()),
                name: Some("hello".to_string()),
                ..Default::default()
            },
            protocol_type: Some(ProtocolType::H2c),
        };
        spec.set_defaults();

        assert_eq!(spec.container_concurrency, Some(0));
        assert_eq!(spec.scale_target_ref.name.as_deref(), Some("hello"));
        assert_eq!(spec.protocol_type, Some(ProtocolType::H2c));
    }

    // ========================================================================
    // Untouched fields and idempotence
    // ========================================================================

    #[test]
    fn test_unrelated_fields_are_untouched() {
        let status = PodAutoscalerStatus {
            conditions: vec![Condition {
                r#type: "Ready".to_string(),
                status: "True".to_string(),
                ..Default::default()
            }],
            desired_scale: Some(3),
            actual_scale: Some(2),
            ..Default::default()
        };

        let mut pa = annotated(&[(MIN_SCALE_ANNOTATION_KEY, "1")]);
        pa.metadata.name = Some("hello".to_string());
        pa.metadata.namespace = Some("default".to_string());
        pa.metadata.labels = Some(BTreeMap::from([("app".to_string(), "hello".to_string())]));
        pa.spec.protocol_type = Some(ProtocolType::Http1);
        pa.status = Some(status.clone());

        let before = pa.clone();
        pa.set_defaults();

        assert_eq!(pa.metadata.name, before.metadata.name);
        assert_eq!(pa.metadata.namespace, before.metadata.namespace);
        assert_eq!(pa.metadata.labels, before.metadata.labels);
        assert_eq!(pa.spec.protocol_type, Some(ProtocolType::Http1));
        assert_eq!(pa.spec.scale_target_ref, before.spec.scale_target_ref);
        assert_eq!(pa.status, Some(status));
        assert_eq!(
            pa.metadata.annotations.unwrap()[MIN_SCALE_ANNOTATION_KEY],
            "1"
        );
    }

    #[test]
    fn test_defaulting_is_idempotent() {
        let once = annotated(&[(CLASS_ANNOTATION_KEY, CLASS_HPA)]).with_defaults();
        let twice = once.clone().with_defaults();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_with_defaults_matches_set_defaults() {
        let input = with_concurrency(PodAutoscaler::default(), 7);

        let mut mutated = input.clone();
        mutated.set_defaults();

        assert_eq!(mutated, input.with_defaults());
    }

    // ========================================================================
    // Operator-supplied defaults
    // ========================================================================

    #[test]
    fn test_operator_defaults_fill_unset_fields() {
        let defaults = Defaults {
            pod_autoscaler_class: CLASS_HPA.to_string(),
            container_concurrency: 10,
            ..Defaults::default()
        };

        let mut pa = PodAutoscaler::default();
        pa.set_defaults_with(&defaults);

        let annotations = pa.metadata.annotations.as_ref().unwrap();
        assert_eq!(annotations[CLASS_ANNOTATION_KEY], CLASS_HPA);
        assert_eq!(annotations[METRIC_ANNOTATION_KEY], METRIC_CPU);
        assert_eq!(pa.spec.container_concurrency, Some(10));
    }

    #[test]
    fn test_operator_defaults_never_override_caller_values() {
        let defaults = Defaults {
            pod_autoscaler_class: CLASS_HPA.to_string(),
            container_concurrency: 10,
            ..Defaults::default()
        };

        let mut pa = with_concurrency(annotated(&[(CLASS_ANNOTATION_KEY, CLASS_KPA)]), 3);
        pa.set_defaults_with(&defaults);

        let annotations = pa.metadata.annotations.as_ref().unwrap();
        assert_eq!(annotations[CLASS_ANNOTATION_KEY], CLASS_KPA);
        assert_eq!(annotations[METRIC_ANNOTATION_KEY], METRIC_CONCURRENCY);
        assert_eq!(pa.spec.container_concurrency, Some(3));
    }
}
