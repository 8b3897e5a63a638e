// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! One-at-a-time sensitivity of predicted strength to a single input.

use serde::{Deserialize, Serialize};

use crate::error::{MixError, ValidationError};
use crate::model::ModelSlot;
use crate::tensors::{assemble_with, Feature, FieldBounds, InputBounds, MixDesign};

/// Upper limit on sweep resolution.
pub const MAX_SWEEP_STEPS: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    pub value: f64,
    pub strength_mpa: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityCurve {
    pub feature: Feature,
    /// Value of the feature in the unmodified mix.
    pub baseline_value: f64,
    pub points: Vec<SensitivityPoint>,
}

impl SensitivityCurve {
    /// Strength change per unit of the feature across the whole sweep.
    pub fn mean_slope(&self) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        let span = last.value - first.value;
        if span == 0.0 {
            return None;
        }
        Some((last.strength_mpa - first.strength_mpa) / span)
    }
}

/// Vary `feature` over `range` (defaults to its input bounds) in `steps`
/// evenly spaced values, holding every other input fixed.
pub fn sweep(
    mix: &MixDesign,
    feature: Feature,
    range: Option<FieldBounds>,
    steps: usize,
    bounds: &InputBounds,
    model: &ModelSlot,
) -> Result<SensitivityCurve, MixError> {
    let range = range.unwrap_or_else(|| bounds.for_feature(feature));
    if steps < 2 {
        return Err(ValidationError::InvalidSweep {
            reason: format!("need at least 2 steps, got {}", steps),
        }
        .into());
    }
    if steps > MAX_SWEEP_STEPS {
        return Err(ValidationError::InvalidSweep {
            reason: format!("at most {} steps allowed, got {}", MAX_SWEEP_STEPS, steps),
        }
        .into());
    }
    if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
        return Err(ValidationError::InvalidSweep {
            reason: format!("range [{}, {}] is not ordered", range.min, range.max),
        }
        .into());
    }

    // The unmodified mix must be valid before anything is predicted
    assemble_with(mix, bounds)?;

    let step = (range.max - range.min) / (steps - 1) as f64;
    let mut points = Vec::new();
    for i in 0..steps {
        let value = if i == steps - 1 {
            range.max
        } else {
            range.min + step * i as f64
        };
        let features = assemble_with(&mix.with_value(feature, value), bounds)?;
        let prediction = model.predict(&features)?;
        points.push(SensitivityPoint {
            value,
            strength_mpa: prediction.strength_mpa,
        });
    }

    Ok(SensitivityCurve {
        feature,
        baseline_value: mix.value(feature),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::tensors::FeatureVector;

    fn reference_mix() -> MixDesign {
        MixDesign {
            cement: 350.0,
            slag: 0.0,
            fly_ash: 0.0,
            water: 180.0,
            superplasticizer: 0.0,
            coarse_aggregate: 1000.0,
            fine_aggregate: 800.0,
            age_days: 28.0,
        }
    }

    fn water_sensitive() -> ModelSlot {
        ModelSlot::ready(|fv: &FeatureVector| 80.0 - 0.2 * fv.get(Feature::Water))
    }

    #[test]
    fn test_sweep_over_explicit_range() {
        let curve = sweep(
            &reference_mix(),
            Feature::Water,
            Some(FieldBounds::new(140.0, 220.0)),
            5,
            &InputBounds::default(),
            &water_sensitive(),
        )
        .unwrap();

        let values: Vec<f64> = curve.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![140.0, 160.0, 180.0, 200.0, 220.0]);
        assert_eq!(curve.baseline_value, 180.0);
        assert!((curve.mean_slope().unwrap() + 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_default_range_is_input_bounds() {
        let curve = sweep(
            &reference_mix(),
            Feature::AgeDays,
            None,
            3,
            &InputBounds::default(),
            &water_sensitive(),
        )
        .unwrap();
        let values: Vec<f64> = curve.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1.0, 183.0, 365.0]);
    }

    #[test]
    fn test_range_outside_bounds_is_rejected() {
        let err = sweep(
            &reference_mix(),
            Feature::Cement,
            Some(FieldBounds::new(500.0, 1500.0)),
            3,
            &InputBounds::default(),
            &water_sensitive(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MixError::Validation(ValidationError::OutOfRange { field: "cement", .. })
        ));
    }

    #[test]
    fn test_bad_sweep_parameters() {
        let mix = reference_mix();
        let bounds = InputBounds::default();
        let model = water_sensitive();
        assert!(matches!(
            sweep(&mix, Feature::Water, None, 1, &bounds, &model),
            Err(MixError::Validation(ValidationError::InvalidSweep { .. }))
        ));
        assert!(matches!(
            sweep(&mix, Feature::Water, Some(FieldBounds::new(200.0, 100.0)), 4, &bounds, &model),
            Err(MixError::Validation(ValidationError::InvalidSweep { .. }))
        ));
    }

    #[test]
    fn test_oversized_sweep_rejected() {
        let mix = reference_mix();
        let bounds = InputBounds::default();
        let model = water_sensitive();
        assert!(sweep(&mix, Feature::Water, None, MAX_SWEEP_STEPS, &bounds, &model).is_ok());
        for steps in [MAX_SWEEP_STEPS + 1, usize::MAX] {
            assert!(matches!(
                sweep(&mix, Feature::Water, None, steps, &bounds, &model),
                Err(MixError::Validation(ValidationError::InvalidSweep { .. }))
            ));
        }
    }

    #[test]
    fn test_sweep_needs_a_model() {
        let err = sweep(
            &reference_mix(),
            Feature::Water,
            None,
            4,
            &InputBounds::default(),
            &ModelSlot::unavailable("not loaded"),
        )
        .unwrap_err();
        assert!(matches!(err, MixError::Model(ModelError::Unavailable { .. })));
    }
}
