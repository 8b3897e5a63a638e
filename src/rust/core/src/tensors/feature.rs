// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Feature Assembler
//!
//! Projects a [`MixDesign`] onto the fixed 8-slot input of the strength model.
//! The slot order is an interface contract with the model artifact: a model
//! fitted on a different order still produces numbers, just wrong ones. The
//! order is therefore versioned (`FEATURE_SCHEMA_VERSION`) and model artifacts
//! declare the names they were fitted on.

use nalgebra::SVector;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::mix::{InputBounds, Material, MixDesign};
use crate::error::ValidationError;

pub const FEATURE_COUNT: usize = 8;

/// Bumped whenever `FEATURE_NAMES` changes.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "cement",
    "slag",
    "flyAsh",
    "water",
    "superplasticizer",
    "coarseAggregate",
    "fineAggregate",
    "ageDays",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    Cement,
    Slag,
    FlyAsh,
    Water,
    Superplasticizer,
    CoarseAggregate,
    FineAggregate,
    AgeDays,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Cement,
        Feature::Slag,
        Feature::FlyAsh,
        Feature::Water,
        Feature::Superplasticizer,
        Feature::CoarseAggregate,
        Feature::FineAggregate,
        Feature::AgeDays,
    ];

    /// Slot in the feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// `None` for curing age.
    pub fn material(self) -> Option<Material> {
        match self {
            Feature::Cement => Some(Material::Cement),
            Feature::Slag => Some(Material::Slag),
            Feature::FlyAsh => Some(Material::FlyAsh),
            Feature::Water => Some(Material::Water),
            Feature::Superplasticizer => Some(Material::Superplasticizer),
            Feature::CoarseAggregate => Some(Material::CoarseAggregate),
            Feature::FineAggregate => Some(Material::FineAggregate),
            Feature::AgeDays => None,
        }
    }
}

impl FromStr for Feature {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "cement" => Ok(Feature::Cement),
            "slag" => Ok(Feature::Slag),
            "flyash" => Ok(Feature::FlyAsh),
            "water" => Ok(Feature::Water),
            "superplasticizer" | "sp" => Ok(Feature::Superplasticizer),
            "coarseaggregate" | "coarseagg" | "coarse" => Ok(Feature::CoarseAggregate),
            "fineaggregate" | "fineagg" | "fine" => Ok(Feature::FineAggregate),
            "agedays" | "age" => Ok(Feature::AgeDays),
            _ => Err(ValidationError::UnknownFeature(s.to_string())),
        }
    }
}

/// Ordered model input. Only constructible through [`assemble`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn to_svector(&self) -> SVector<f64, FEATURE_COUNT> {
        SVector::from(self.0)
    }
}

/// Validate against the default bounds and package the mix in model order.
pub fn assemble(mix: &MixDesign) -> Result<FeatureVector, ValidationError> {
    assemble_with(mix, &InputBounds::default())
}

pub fn assemble_with(
    mix: &MixDesign,
    bounds: &InputBounds,
) -> Result<FeatureVector, ValidationError> {
    mix.validate(bounds)?;
    Ok(FeatureVector(Feature::ALL.map(|f| mix.value(f))))
}
