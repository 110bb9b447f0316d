// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Operator-supplied defaults for `PodAutoscaler` defaulting.
//!
//! The built-in [`Defaults`] select the KPA class and an unbounded (`0`) container
//! concurrency. Operators may override them from the data section of a ConfigMap or
//! from a YAML document. Every loader validates the result before handing it out.
//!
//! # ConfigMap keys
//!
//! | Key                               | Default                        |
//! |-----------------------------------|--------------------------------|
//! | `pod-autoscaler-class`            | `kpa.autoscaling.knative.dev`  |
//! | `container-concurrency`           | `0`                            |
//! | `container-concurrency-max-limit` | `1000`                         |
//!
//! # Example
//!
//! ```rust
//! use podautoscaler::config::Defaults;
//! use podautoscaler::constants::CLASS_HPA;
//! use std::collections::BTreeMap;
//!
//! let data = BTreeMap::from([
//!     ("pod-autoscaler-class".to_string(), CLASS_HPA.to_string()),
//!     ("container-concurrency".to_string(), "10".to_string()),
//! ]);
//!
//! let defaults = Defaults::from_config_map(&data).unwrap();
//! assert_eq!(defaults.pod_autoscaler_class, CLASS_HPA);
//! assert_eq!(defaults.container_concurrency, 10);
//! ```

use crate::constants::{
    CONFIG_KEY_CONTAINER_CONCURRENCY, CONFIG_KEY_CONTAINER_CONCURRENCY_MAX_LIMIT,
    CONFIG_KEY_POD_AUTOSCALER_CLASS, DEFAULT_CONTAINER_CONCURRENCY,
    DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT,
};
use crate::errors::ConfigError;
use crate::policy::DEFAULT_CLASS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Values the defaulter fills into unset fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Defaults {
    /// Class annotation value applied when a resource names none
    pub pod_autoscaler_class: String,

    /// Container concurrency applied when the spec leaves it unset
    pub container_concurrency: i64,

    /// Ceiling for `container_concurrency`, at most
    /// [`DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT`]
    pub container_concurrency_max_limit: i64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            pod_autoscaler_class: DEFAULT_CLASS.as_str().to_string(),
            container_concurrency: DEFAULT_CONTAINER_CONCURRENCY,
            container_concurrency_max_limit: DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT,
        }
    }
}

impl Defaults {
    /// Build defaults from the data section of a ConfigMap.
    ///
    /// Absent keys keep their built-in values. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric key is not an integer or the resulting
    /// defaults fail [`Self::validate`].
    pub fn from_config_map(data: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut defaults = Self::default();

        for (key, value) in data {
            match key.as_str() {
                CONFIG_KEY_POD_AUTOSCALER_CLASS => {
                    defaults.pod_autoscaler_class = value.trim().to_string();
                }
                CONFIG_KEY_CONTAINER_CONCURRENCY => {
                    defaults.container_concurrency = parse_integer(key, value)?;
                }
                CONFIG_KEY_CONTAINER_CONCURRENCY_MAX_LIMIT => {
                    defaults.container_concurrency_max_limit = parse_integer(key, value)?;
                }
                _ => debug!(key = %key, "Ignoring unknown defaults key"),
            }
        }

        defaults.validate()?;
        debug!(?defaults, "Loaded PodAutoscaler defaults from ConfigMap data");
        Ok(defaults)
    }

    /// Build defaults from a YAML document using camelCase field names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on malformed input, or a validation error.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document decodes to null rather than an empty mapping
        let defaults: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };

        defaults.validate()?;
        debug!(?defaults, "Loaded PodAutoscaler defaults from YAML");
        Ok(defaults)
    }

    /// Read and parse a YAML defaults file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the errors of
    /// [`Self::from_yaml`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Check the defaults are usable.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyClass`] if the class is blank
    /// - [`ConfigError::InvalidMaxLimit`] if the ceiling is below 1
    /// - [`ConfigError::MaxLimitTooHigh`] if the ceiling is above the schema maximum
    /// - [`ConfigError::ContainerConcurrencyOutOfRange`] if the default is negative or
    ///   above the ceiling
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pod_autoscaler_class.trim().is_empty() {
            return Err(ConfigError::EmptyClass {
                key: CONFIG_KEY_POD_AUTOSCALER_CLASS.to_string(),
            });
        }

        if self.container_concurrency_max_limit < 1 {
            return Err(ConfigError::InvalidMaxLimit {
                value: self.container_concurrency_max_limit,
            });
        }

        // The CRD schema caps containerConcurrency at this value
        if self.container_concurrency_max_limit > DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT {
            return Err(ConfigError::MaxLimitTooHigh {
                value: self.container_concurrency_max_limit,
                ceiling: DEFAULT_CONTAINER_CONCURRENCY_MAX_LIMIT,
            });
        }

        if !(0..=self.container_concurrency_max_limit).contains(&self.container_concurrency) {
            return Err(ConfigError::ContainerConcurrencyOutOfRange {
                value: self.container_concurrency,
                max_limit: self.container_concurrency_max_limit,
            });
        }

        Ok(())
    }
}

fn parse_integer(key: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
