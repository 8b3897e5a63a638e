// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::feature::Feature;
use crate::error::ValidationError;

/// Batched ingredients of a mix, in feature order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Material {
    Cement,
    Slag,
    FlyAsh,
    Water,
    Superplasticizer,
    CoarseAggregate,
    FineAggregate,
}

impl Material {
    pub const ALL: [Material; 7] = [
        Material::Cement,
        Material::Slag,
        Material::FlyAsh,
        Material::Water,
        Material::Superplasticizer,
        Material::CoarseAggregate,
        Material::FineAggregate,
    ];

    /// Display label used by charts and reports.
    pub fn label(self) -> &'static str {
        match self {
            Material::Cement => "Cement",
            Material::Slag => "Slag",
            Material::FlyAsh => "Fly Ash",
            Material::Water => "Water",
            Material::Superplasticizer => "Superplasticizer",
            Material::CoarseAggregate => "Coarse Agg",
            Material::FineAggregate => "Fine Agg",
        }
    }

    pub fn feature(self) -> Feature {
        match self {
            Material::Cement => Feature::Cement,
            Material::Slag => Feature::Slag,
            Material::FlyAsh => Feature::FlyAsh,
            Material::Water => Feature::Water,
            Material::Superplasticizer => Feature::Superplasticizer,
            Material::CoarseAggregate => Feature::CoarseAggregate,
            Material::FineAggregate => Feature::FineAggregate,
        }
    }

    pub fn is_binder(self) -> bool {
        matches!(self, Material::Cement | Material::Slag | Material::FlyAsh)
    }
}

impl FromStr for Material {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Feature::from_str(s)?.material() {
            Some(material) => Ok(material),
            None => Err(ValidationError::UnknownFeature(s.to_string())),
        }
    }
}

/// Raw mix-design input: masses in kg/m³, age in days.
///
/// Field names follow the feature schema (`flyAsh`, `coarseAggregate`, ...);
/// the snake_case short forms used by the physics bridge are accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixDesign {
    pub cement: f64,
    #[serde(default)]
    pub slag: f64,
    #[serde(default, alias = "fly_ash")]
    pub fly_ash: f64,
    pub water: f64,
    #[serde(default, alias = "sp")]
    pub superplasticizer: f64,
    #[serde(alias = "coarse_agg", alias = "coarse")]
    pub coarse_aggregate: f64,
    #[serde(alias = "fine_agg", alias = "fine")]
    pub fine_aggregate: f64,
    #[serde(alias = "age", alias = "age_days")]
    pub age_days: f64,
}

impl MixDesign {
    pub fn quantity(&self, material: Material) -> f64 {
        self.value(material.feature())
    }

    /// Value of any model input, including curing age.
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Cement => self.cement,
            Feature::Slag => self.slag,
            Feature::FlyAsh => self.fly_ash,
            Feature::Water => self.water,
            Feature::Superplasticizer => self.superplasticizer,
            Feature::CoarseAggregate => self.coarse_aggregate,
            Feature::FineAggregate => self.fine_aggregate,
            Feature::AgeDays => self.age_days,
        }
    }

    /// Copy of this mix with one input replaced.
    pub fn with_value(mut self, feature: Feature, value: f64) -> MixDesign {
        match feature {
            Feature::Cement => self.cement = value,
            Feature::Slag => self.slag = value,
            Feature::FlyAsh => self.fly_ash = value,
            Feature::Water => self.water = value,
            Feature::Superplasticizer => self.superplasticizer = value,
            Feature::CoarseAggregate => self.coarse_aggregate = value,
            Feature::FineAggregate => self.fine_aggregate = value,
            Feature::AgeDays => self.age_days = value,
        }
        self
    }

    /// cement + slag + fly ash
    pub fn total_binder(&self) -> f64 {
        self.cement + self.slag + self.fly_ash
    }

    /// Total batched mass per m³ (age excluded).
    pub fn total_mass(&self) -> f64 {
        Material::ALL.iter().map(|&m| self.quantity(m)).sum()
    }

    /// Checks every input against `bounds` in feature order.
    ///
    /// The first offending field is reported; nothing is clamped.
    pub fn validate(&self, bounds: &InputBounds) -> Result<(), ValidationError> {
        for feature in Feature::ALL {
            let value = self.value(feature);
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: feature.name(),
                });
            }
            let range = bounds.for_feature(feature);
            if !range.contains(value) {
                return Err(ValidationError::OutOfRange {
                    field: feature.name(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

/// Inclusive accepted range for one input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Accepted input ranges, one per feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputBounds {
    pub cement: FieldBounds,
    pub slag: FieldBounds,
    pub fly_ash: FieldBounds,
    pub water: FieldBounds,
    pub superplasticizer: FieldBounds,
    pub coarse_aggregate: FieldBounds,
    pub fine_aggregate: FieldBounds,
    pub age_days: FieldBounds,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            cement: FieldBounds::new(0.0, 1000.0),
            slag: FieldBounds::new(0.0, 1000.0),
            fly_ash: FieldBounds::new(0.0, 1000.0),
            water: FieldBounds::new(0.0, 500.0),
            superplasticizer: FieldBounds::new(0.0, 100.0),
            coarse_aggregate: FieldBounds::new(0.0, 2000.0),
            fine_aggregate: FieldBounds::new(0.0, 2000.0),
            age_days: FieldBounds::new(1.0, 365.0),
        }
    }
}

impl InputBounds {
    pub fn for_feature(&self, feature: Feature) -> FieldBounds {
        match feature {
            Feature::Cement => self.cement,
            Feature::Slag => self.slag,
            Feature::FlyAsh => self.fly_ash,
            Feature::Water => self.water,
            Feature::Superplasticizer => self.superplasticizer,
            Feature::CoarseAggregate => self.coarse_aggregate,
            Feature::FineAggregate => self.fine_aggregate,
            Feature::AgeDays => self.age_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_mix() -> MixDesign {
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

    #[test]
    fn test_binder_and_mass() {
        let mix = plain_mix().with_value(Feature::Slag, 50.0);
        assert_eq!(mix.total_binder(), 400.0);
        assert_eq!(mix.total_mass(), 350.0 + 50.0 + 180.0 + 1000.0 + 800.0);
    }

    #[test]
    fn test_with_value_leaves_original_untouched() {
        let mix = plain_mix();
        let wetter = mix.with_value(Feature::Water, 200.0);
        assert_eq!(mix.water, 180.0);
        assert_eq!(wetter.water, 200.0);
    }

    #[test]
    fn test_validate_accepts_bounds_inclusively() {
        let bounds = InputBounds::default();
        let edge = plain_mix()
            .with_value(Feature::Cement, 1000.0)
            .with_value(Feature::AgeDays, 1.0);
        assert!(edge.validate(&bounds).is_ok());
    }

    #[test]
    fn test_validate_rejects_first_violation_in_feature_order() {
        let bounds = InputBounds::default();
        let bad = plain_mix()
            .with_value(Feature::Water, 600.0)
            .with_value(Feature::AgeDays, 0.0);
        assert_eq!(
            bad.validate(&bounds),
            Err(ValidationError::OutOfRange {
                field: "water",
                value: 600.0,
                min: 0.0,
                max: 500.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let bad = plain_mix().with_value(Feature::Slag, f64::NAN);
        assert_eq!(
            bad.validate(&InputBounds::default()),
            Err(ValidationError::NotFinite { field: "slag" })
        );
    }

    #[test]
    fn test_deserialize_accepts_short_aliases() {
        let mix: MixDesign = serde_json::from_str(
            r#"{"cement":350,"fly_ash":20,"water":175,"sp":5,"coarse_agg":1000,"fine_agg":800,"age":28}"#,
        )
        .unwrap();
        assert_eq!(mix.fly_ash, 20.0);
        assert_eq!(mix.superplasticizer, 5.0);
        assert_eq!(mix.slag, 0.0);
        assert_eq!(mix.age_days, 28.0);
    }

    #[test]
    fn test_material_from_str() {
        assert_eq!("flyAsh".parse::<Material>(), Ok(Material::FlyAsh));
        assert!("ageDays".parse::<Material>().is_err());
        assert!(Material::Slag.is_binder());
        assert!(!Material::Water.is_binder());
    }
}
