// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MixLab: Mix Evaluation Kernel
//
// This file is part of MixLab, developed by Santhosh Shyamsundar, Prabhu S., and Studio Tyto.
// For licensing terms, see the LICENSE file in the project root.

// ============================================================================
// MixKernel: Request -> Report Orchestrator
// ============================================================================
// One call per "calculate" action. The kernel holds only read-only state
// (config + loaded model); every request carries everything else explicitly.
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::config::MixConfig;
use crate::error::{MixError, ValidationError};
use crate::formulas::{MIN_CEMENT_CONTENT, WB_RATIO_LIMIT};
use crate::model::{LinearStrengthModel, ModelSlot};
use crate::science::{
    compute_metrics, estimate_cost, simulate, sweep, CostBreakdown, CurvePoint, DerivedMetrics,
    Landmarks, PredictionResult, PriceTable, SensitivityCurve, SpecimenShape, MAX_SAMPLE_COUNT,
};
use crate::tensors::{assemble_with, Feature, FeatureVector, FieldBounds, MixDesign};

/// A single evaluation command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixRequest {
    pub mix: MixDesign,
    /// Falls back to `MixConfig::default_shape`.
    #[serde(default)]
    pub shape: Option<SpecimenShape>,
    /// Manual strength (MPa); bypasses the model when present.
    #[serde(default)]
    pub strength_mpa: Option<f64>,
    #[serde(default)]
    pub prices: Option<PriceTable>,
    #[serde(default)]
    pub sample_count: Option<usize>,
}

impl MixRequest {
    pub fn new(mix: MixDesign) -> Self {
        MixRequest {
            mix,
            shape: None,
            strength_mpa: None,
            prices: None,
            sample_count: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityRequest {
    pub mix: MixDesign,
    pub feature: Feature,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default = "default_sweep_steps")]
    pub steps: usize,
}

fn default_sweep_steps() -> usize {
    20
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationEvent {
    fn new(topic: &str, severity: Severity, message: String) -> Self {
        ValidationEvent {
            topic: topic.to_string(),
            message,
            severity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StrengthSource {
    #[serde(rename_all = "camelCase")]
    Model { model_id: String },
    Manual,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveReport {
    pub peak_ksc: f64,
    pub points: Vec<CurvePoint>,
    pub landmarks: Option<Landmarks>,
}

/// Everything a dashboard or report exporter needs for one mix.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixReport {
    pub features: FeatureVector,
    pub prediction: PredictionResult,
    pub strength_source: StrengthSource,
    pub metrics: DerivedMetrics,
    pub stress_strain: CurveReport,
    pub cost: CostBreakdown,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f64,
}

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct MixKernel {
    config: MixConfig,
    model: ModelSlot,
}

#[wasm_bindgen]
impl MixKernel {
    /// Default configuration, no model loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> MixKernel {
        MixKernel::with_model(
            MixConfig::default(),
            ModelSlot::unavailable("no model configured"),
        )
    }

    /// Replace the configuration from JSON. Returns a JSON envelope.
    pub fn configure(&mut self, config_json: &str) -> String {
        let outcome = MixConfig::from_json_str(config_json)
            .map(|config| {
                self.config = config;
                "configured"
            })
            .map_err(MixError::from);
        envelope(outcome)
    }

    /// Install a linear model from the artifact text. Returns a JSON envelope
    /// with the resulting status; a bad artifact leaves prediction disabled.
    pub fn load_model(&mut self, artifact_json: &str) -> String {
        let outcome = LinearStrengthModel::from_json(artifact_json).map_err(MixError::from);
        self.model = match &outcome {
            Ok(model) => ModelSlot::ready(model.clone()),
            Err(e) => ModelSlot::unavailable(e.to_string()),
        };
        envelope(outcome.map(|_| self.model.status()))
    }

    pub fn model_status(&self) -> String {
        self.model.status()
    }

    /// Evaluate a JSON [`MixRequest`]; returns `{"result": MixReport}` or `{"error": "..."}`.
    pub fn evaluate_json(&self, request_json: &str) -> String {
        envelope(parse::<MixRequest>(request_json).and_then(|req| self.evaluate(&req)))
    }

    /// Sweep a JSON [`SensitivityRequest`]; same envelope as `evaluate_json`.
    pub fn sensitivity_json(&self, request_json: &str) -> String {
        envelope(parse::<SensitivityRequest>(request_json).and_then(|req| self.sensitivity(&req)))
    }
}

impl Default for MixKernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure Rust API (non-wasm-bindgen)
impl MixKernel {
    pub fn with_model(config: MixConfig, model: ModelSlot) -> Self {
        MixKernel { config, model }
    }

    /// Build from config, loading `model_path` if set.
    pub fn from_config(config: MixConfig) -> Self {
        let model = match &config.model_path {
            Some(path) => ModelSlot::load(path),
            None => ModelSlot::unavailable("no model configured"),
        };
        MixKernel { config, model }
    }

    pub fn config(&self) -> &MixConfig {
        &self.config
    }

    pub fn model(&self) -> &ModelSlot {
        &self.model
    }

    pub fn evaluate(&self, request: &MixRequest) -> Result<MixReport, MixError> {
        let start = instant::Instant::now();
        let mix = &request.mix;

        // 1. Validate + assemble; nothing else runs on bad input
        let sample_count = request.sample_count.unwrap_or(self.config.sample_count);
        if sample_count > MAX_SAMPLE_COUNT {
            return Err(ValidationError::SampleCount {
                count: sample_count,
                max: MAX_SAMPLE_COUNT,
            }
            .into());
        }
        let features = assemble_with(mix, &self.config.bounds)?;

        // 2. Strength: manual override, otherwise the model
        let (prediction, strength_source) = match request.strength_mpa {
            Some(mpa) if !mpa.is_finite() => {
                return Err(ValidationError::NotFinite {
                    field: "strengthMpa",
                }
                .into());
            }
            Some(mpa) => (PredictionResult::from_mpa(mpa), StrengthSource::Manual),
            None => {
                let prediction = self.model.predict(&features)?;
                let model_id = self.model.model_id().unwrap_or("anonymous").to_string();
                (prediction, StrengthSource::Model { model_id })
            }
        };

        // 3. Derived metrics
        let shape = request.shape.unwrap_or(self.config.default_shape);
        let metrics = compute_metrics(mix, prediction.strength_mpa, shape);

        // 4. Stress-strain on the shape-corrected strength
        let curve = simulate(metrics.shape_corrected_ksc, sample_count);
        let stress_strain = CurveReport {
            peak_ksc: curve.peak(),
            points: curve.to_points(),
            landmarks: curve.landmarks(),
        };

        // 5. Cost
        let prices = request.prices.as_ref().unwrap_or(&self.config.prices);
        let cost = estimate_cost(mix, prices);

        let events = Self::events(mix, &metrics, &cost, &strength_source);
        let compute_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            strength_mpa = prediction.strength_mpa,
            source = ?strength_source,
            compute_time_ms,
            "mix evaluated"
        );

        Ok(MixReport {
            features,
            prediction,
            strength_source,
            metrics,
            stress_strain,
            cost,
            events,
            compute_time_ms,
        })
    }

    pub fn sensitivity(&self, request: &SensitivityRequest) -> Result<SensitivityCurve, MixError> {
        let defaults = self.config.bounds.for_feature(request.feature);
        let range = match (request.min, request.max) {
            (None, None) => None,
            (min, max) => Some(FieldBounds::new(
                min.unwrap_or(defaults.min),
                max.unwrap_or(defaults.max),
            )),
        };
        sweep(
            &request.mix,
            request.feature,
            range,
            request.steps,
            &self.config.bounds,
            &self.model,
        )
    }

    fn events(
        mix: &MixDesign,
        metrics: &DerivedMetrics,
        cost: &CostBreakdown,
        source: &StrengthSource,
    ) -> Vec<ValidationEvent> {
        let mut events = Vec::new();

        if metrics.standards.wb_ratio_ok {
            events.push(ValidationEvent::new(
                "MIX.STANDARDS",
                Severity::Info,
                format!(
                    "w/b ratio {:.2} <= {:.2}: suitable for general / exterior use",
                    metrics.water_binder_ratio, WB_RATIO_LIMIT
                ),
            ));
        } else {
            events.push(ValidationEvent::new(
                "MIX.STANDARDS",
                Severity::Warning,
                format!(
                    "w/b ratio {:.2} exceeds {:.2}: not recommended for exterior exposure",
                    metrics.water_binder_ratio, WB_RATIO_LIMIT
                ),
            ));
        }

        if metrics.standards.cement_ok {
            events.push(ValidationEvent::new(
                "MIX.STANDARDS",
                Severity::Info,
                format!(
                    "Cement {:.0} kg/m³ >= {:.0}: adequate durability",
                    mix.cement, MIN_CEMENT_CONTENT
                ),
            ));
        } else {
            events.push(ValidationEvent::new(
                "MIX.STANDARDS",
                Severity::Warning,
                format!(
                    "Cement {:.0} kg/m³ below {:.0}: durability may be inadequate",
                    mix.cement, MIN_CEMENT_CONTENT
                ),
            ));
        }

        if let Some(top) = cost.dominant() {
            let share = cost.share(top.material).unwrap_or(0.0) * 100.0;
            events.push(ValidationEvent::new(
                "MIX.COST",
                Severity::Info,
                format!(
                    "Most of the cost comes from {} ({:.1}%); reduce it first to save budget",
                    top.label, share
                ),
            ));
        }

        if *source == StrengthSource::Manual {
            events.push(ValidationEvent::new(
                "MODEL",
                Severity::Info,
                "Strength supplied manually; model prediction skipped".to_string(),
            ));
        }

        events
    }
}

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, MixError> {
    serde_json::from_str(json).map_err(|e| {
        MixError::from(ValidationError::InvalidRequest {
            message: e.to_string(),
        })
    })
}

fn envelope<T: Serialize>(outcome: Result<T, MixError>) -> String {
    let value = match outcome {
        Ok(result) => serde_json::json!({ "result": result }),
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    };
    serde_json::to_string(&value).unwrap_or_default()
}
