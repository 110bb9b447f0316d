// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRD YAML Generator
//!
//! Generates the Kubernetes CRD YAML for `PodAutoscaler` from the Rust types in
//! src/crd.rs, so the manifest under deploy/crds/ always matches the code.
//!
//! Usage:
//!   cargo run --bin crdgen -- [--output-dir deploy/crds]

use anyhow::{Context, Result};
use clap::Parser;
use kube::CustomResourceExt;
use podautoscaler::crd::PodAutoscaler;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const COPYRIGHT_HEADER: &str = "# Copyright (c) 2025 Erick Bourgeois, firestoned
# SPDX-License-Identifier: MIT
#
# This file is AUTO-GENERATED from src/crd.rs
# DO NOT EDIT MANUALLY - Run `cargo run --bin crdgen` to regenerate
#
";

#[derive(Debug, Parser)]
#[command(name = "crdgen", about = "Generate the PodAutoscaler CRD manifest")]
struct Args {
    /// Directory the CRD YAML is written to
    #[arg(long, default_value = "deploy/crds")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    debug!(?args, "Parsed arguments");

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    info!("Generating CRD YAML files from src/crd.rs");
    generate_crd::<PodAutoscaler>("podautoscalers.crd.yaml", &args.output_dir)?;
    info!(output_dir = %args.output_dir.display(), "Successfully generated CRD YAML files");

    Ok(())
}

// Respects RUST_LOG (default: info) and RUST_LOG_FORMAT (text or json)
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }
}

fn generate_crd<T>(filename: &str, output_dir: &Path) -> Result<()>
where
    T: CustomResourceExt,
{
    let crd = T::crd();
    let yaml = serde_yaml::to_string(&crd).context("Failed to serialize CRD to YAML")?;

    let content = format!("{COPYRIGHT_HEADER}{yaml}");

    let output_path = output_dir.join(filename);
    fs::write(&output_path, content)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(file = %filename, "Generated CRD");

    Ok(())
}
