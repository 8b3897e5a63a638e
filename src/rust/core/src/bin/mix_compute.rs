// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! mix_compute: CLI for single-mix evaluation
//!
//! Takes a JSON mix design on stdin or as --json, assembles the model input,
//! predicts strength (or takes --strength), and prints a JSON report with
//! derived metrics, the stress-strain curve and the cost breakdown.
//!
//! Usage:
//!   echo '{"cement":350,"water":180,"coarse_agg":1000,"fine_agg":800,"age":28}' | mix_compute --model model.json evaluate
//!   mix_compute evaluate --json '{"cement":350,...}' --strength 30 --shape cube
//!   mix_compute --model model.json sensitivity --feature water --min 140 --max 220 --steps 9
//!   mix_compute --model model.json status
//!
//! Logs go to stderr (RUST_LOG controls the level); stdout carries only JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mixlab_core::kernel::{MixRequest, SensitivityRequest};
use mixlab_core::science::{SpecimenShape, MAX_SAMPLE_COUNT};
use mixlab_core::tensors::{Feature, MixDesign};
use mixlab_core::{MixConfig, MixKernel};

#[derive(Parser, Debug)]
#[command(name = "mix_compute")]
#[command(version)]
#[command(about = "Concrete mix evaluation: strength, w/b checks, stress-strain curve and cost")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Linear model artifact (overrides modelPath from the config)
    #[arg(short, long, global = true)]
    model: Option<PathBuf>,

    /// Specimen shape: cylinder or cube
    #[arg(long, global = true)]
    shape: Option<SpecimenShape>,

    /// Stress-strain sample count (2 to 100000)
    #[arg(long, global = true, value_parser = parse_samples)]
    samples: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one mix
    Evaluate {
        /// Mix JSON; read from stdin when omitted
        #[arg(long)]
        json: Option<String>,

        /// Use this strength (MPa) instead of the model
        #[arg(long)]
        strength: Option<f64>,
    },
    /// Sweep one input and report predicted strength
    Sensitivity {
        /// Mix JSON; read from stdin when omitted
        #[arg(long)]
        json: Option<String>,

        /// Input to vary (e.g. water, cement, flyAsh, age)
        #[arg(long)]
        feature: Feature,

        #[arg(long)]
        min: Option<f64>,

        #[arg(long)]
        max: Option<f64>,

        #[arg(long, default_value_t = 20)]
        steps: usize,
    },
    /// Report whether the model loaded
    Status,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    model_ready: bool,
    status: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let kernel = build_kernel(&args)?;

    match &args.command {
        Commands::Evaluate { json, strength } => {
            let mix = read_mix(json.as_deref())?;
            let request = MixRequest {
                shape: args.shape,
                strength_mpa: *strength,
                sample_count: args.samples,
                ..MixRequest::new(mix)
            };
            let report = kernel.evaluate(&request).context("evaluation failed")?;
            info!(
                strength_mpa = report.prediction.strength_mpa,
                cost = report.cost.total_cost_per_cubic_meter,
                "mix evaluated"
            );
            emit(&report, args.pretty)
        }
        Commands::Sensitivity {
            json,
            feature,
            min,
            max,
            steps,
        } => {
            let mix = read_mix(json.as_deref())?;
            let request = SensitivityRequest {
                mix,
                feature: *feature,
                min: *min,
                max: *max,
                steps: *steps,
            };
            let curve = kernel
                .sensitivity(&request)
                .with_context(|| format!("sensitivity sweep over {} failed", feature.name()))?;
            emit(&curve, args.pretty)
        }
        Commands::Status => emit(
            &StatusReport {
                model_ready: kernel.model().is_ready(),
                status: kernel.model_status(),
            },
            args.pretty,
        ),
    }
}

/// RUST_LOG when set and valid, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn build_kernel(args: &Args) -> Result<MixKernel> {
    let mut config = match &args.config {
        Some(path) => MixConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MixConfig::default(),
    };
    if let Some(model) = &args.model {
        config.model_path = Some(model.clone());
    }
    if let Some(shape) = args.shape {
        config.default_shape = shape;
    }
    if let Some(samples) = args.samples {
        config.sample_count = samples;
    }
    config.validate().context("invalid configuration")?;

    let kernel = MixKernel::from_config(config);
    info!(status = %kernel.model_status(), "kernel ready");
    Ok(kernel)
}

fn parse_samples(s: &str) -> Result<usize, String> {
    let count: usize = s.parse().map_err(|e| format!("{}", e))?;
    if !(2..=MAX_SAMPLE_COUNT).contains(&count) {
        return Err(format!("must be between 2 and {}", MAX_SAMPLE_COUNT));
    }
    Ok(count)
}

fn read_mix(json: Option<&str>) -> Result<MixDesign> {
    let input = match json {
        Some(s) => s.to_string(),
        None => {
            if io::stdin().is_terminal() {
                bail!("no mix given: pass --json or pipe a JSON mix on stdin");
            }
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading mix from stdin")?;
            buf
        }
    };
    serde_json::from_str(&input).context("invalid mix JSON")
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
