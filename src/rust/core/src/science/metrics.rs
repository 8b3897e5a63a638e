// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Derived Metrics
//!
//! Ratios, unit conversion, specimen-shape correction and the two standards
//! checks shown next to a prediction. Inputs are assumed already validated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::formulas::{
    mpa_to_ksc, water_binder_ratio, CUBE_SHAPE_FACTOR, CYLINDER_SHAPE_FACTOR,
    MIN_CEMENT_CONTENT, WB_RATIO_LIMIT,
};
use crate::tensors::MixDesign;

/// Test specimen geometry the strength is reported for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecimenShape {
    /// The model's native training basis.
    #[default]
    Cylinder,
    Cube,
}

impl SpecimenShape {
    pub fn factor(self) -> f64 {
        match self {
            SpecimenShape::Cylinder => CYLINDER_SHAPE_FACTOR,
            SpecimenShape::Cube => CUBE_SHAPE_FACTOR,
        }
    }
}

impl FromStr for SpecimenShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cylinder" | "cyl" => Ok(SpecimenShape::Cylinder),
            "cube" => Ok(SpecimenShape::Cube),
            _ => Err(ValidationError::UnknownShape(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsChecks {
    /// w/b <= 0.50: suitable for general / exterior use.
    pub wb_ratio_ok: bool,
    /// cement >= 300 kg/m³: adequate durability.
    pub cement_ok: bool,
}

impl StandardsChecks {
    pub fn evaluate(water_binder_ratio: f64, cement: f64) -> Self {
        StandardsChecks {
            wb_ratio_ok: water_binder_ratio <= WB_RATIO_LIMIT,
            cement_ok: cement >= MIN_CEMENT_CONTENT,
        }
    }

    pub fn all_pass(&self) -> bool {
        self.wb_ratio_ok && self.cement_ok
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub total_binder: f64,
    pub water_binder_ratio: f64,
    pub strength_ksc: f64,
    pub shape: SpecimenShape,
    pub shape_factor: f64,
    pub shape_corrected_ksc: f64,
    pub standards: StandardsChecks,
}

pub fn compute_metrics(
    mix: &MixDesign,
    strength_mpa: f64,
    shape: SpecimenShape,
) -> DerivedMetrics {
    let total_binder = mix.total_binder();
    let wb = water_binder_ratio(mix.water, total_binder);
    let strength_ksc = mpa_to_ksc(strength_mpa);
    let shape_factor = shape.factor();

    DerivedMetrics {
        total_binder,
        water_binder_ratio: wb,
        strength_ksc,
        shape,
        shape_factor,
        shape_corrected_ksc: strength_ksc * shape_factor,
        standards: StandardsChecks::evaluate(wb, mix.cement),
    }
}
