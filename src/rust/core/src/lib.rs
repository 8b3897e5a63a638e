// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MixLab: Mix Design Evaluation Core
// Feature pipeline, derived metrics, stress-strain simulation and cost
//

pub mod config;
pub mod error;
pub mod formulas;
pub mod kernel;
pub mod model;
pub mod science;
pub mod tensors;
#[cfg(test)]
pub mod tests_pipeline;

// Re-export core types
pub use config::MixConfig;
pub use error::{ConfigError, MixError, ModelError, ValidationError};
pub use kernel::{MixKernel, MixReport, MixRequest, SensitivityRequest};
pub use model::{LinearStrengthModel, ModelSlot, StrengthModel};
pub use science::{
    compute_metrics, estimate_cost, simulate, CostBreakdown, DerivedMetrics, PredictionResult,
    PriceTable, SpecimenShape, StressStrainCurve,
};
pub use tensors::{assemble, Feature, FeatureVector, MixDesign};
