// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod cost;
pub mod metrics;
pub mod sensitivity;
pub mod strength;
pub mod stress_strain;

pub use cost::{estimate_cost, CostBreakdown, CostItem, PriceTable};
pub use metrics::{compute_metrics, DerivedMetrics, SpecimenShape, StandardsChecks};
pub use sensitivity::{sweep, SensitivityCurve, SensitivityPoint, MAX_SWEEP_STEPS};
pub use strength::PredictionResult;
pub use stress_strain::{
    simulate, CurvePoint, Landmarks, StressStrainCurve, DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT,
};
