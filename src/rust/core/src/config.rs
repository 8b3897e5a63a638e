// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::science::stress_strain::{DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT};
use crate::science::{PriceTable, SpecimenShape};
use crate::tensors::{Feature, InputBounds, Material};

/// Evaluation settings. Every field has a default, so a config file only
/// needs the values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MixConfig {
    pub prices: PriceTable,
    pub bounds: InputBounds,
    pub default_shape: SpecimenShape,
    pub sample_count: usize,
    /// Linear model artifact loaded at startup.
    pub model_path: Option<PathBuf>,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            bounds: InputBounds::default(),
            default_shape: SpecimenShape::Cylinder,
            sample_count: DEFAULT_SAMPLE_COUNT,
            model_path: None,
        }
    }
}

impl MixConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MixConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for material in Material::ALL {
            let price = self.prices.price(material);
            if !price.is_finite() || price < 0.0 {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "price for {} must be a non-negative number, got {}",
                        material.label(),
                        price
                    ),
                });
            }
        }
        for feature in Feature::ALL {
            let range = self.bounds.for_feature(feature);
            if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "bounds for {} are not an ordered range: [{}, {}]",
                        feature.name(),
                        range.min,
                        range.max
                    ),
                });
            }
        }
        if !(2..=MAX_SAMPLE_COUNT).contains(&self.sample_count) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "sampleCount must be between 2 and {}, got {}",
                    MAX_SAMPLE_COUNT, self.sample_count
                ),
            });
        }
        Ok(())
    }
}
