// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use nalgebra::SVector;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use super::StrengthModel;
use crate::error::ModelError;
use crate::tensors::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES, FEATURE_SCHEMA_VERSION};

/// On-disk form of a fitted linear model.
///
/// ```json
/// {"schemaVersion":1,"modelId":"ols-uci-2024",
///  "features":["cement","slag","flyAsh","water","superplasticizer","coarseAggregate","fineAggregate","ageDays"],
///  "coefficients":[0.12,0.10,0.09,-0.15,0.29,0.018,0.020,0.11],"intercept":-23.3}
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearArtifact {
    pub schema_version: u32,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

fn default_model_id() -> String {
    "linear".to_string()
}

/// `strength = intercept + coefficients · features`
#[derive(Clone, Debug)]
pub struct LinearStrengthModel {
    model_id: String,
    coefficients: SVector<f64, FEATURE_COUNT>,
    intercept: f64,
    fingerprint: String,
}

impl LinearStrengthModel {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::from_bytes(json.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: LinearArtifact = serde_json::from_slice(bytes).map_err(|e| ModelError::Parse {
            message: e.to_string(),
        })?;
        let mut model = Self::from_artifact(artifact)?;
        model.fingerprint = fingerprint(bytes);
        Ok(model)
    }

    /// Checks the artifact against the feature schema before accepting it.
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, ModelError> {
        if artifact.schema_version != FEATURE_SCHEMA_VERSION {
            return Err(ModelError::SchemaVersion {
                found: artifact.schema_version,
                expected: FEATURE_SCHEMA_VERSION,
            });
        }

        for (position, expected) in FEATURE_NAMES.iter().enumerate() {
            let found = artifact
                .features
                .get(position)
                .map(String::as_str)
                .unwrap_or("<missing>");
            if found != *expected {
                return Err(ModelError::FeatureOrderMismatch {
                    position,
                    expected: expected.to_string(),
                    found: found.to_string(),
                });
            }
        }
        if artifact.features.len() != FEATURE_COUNT {
            return Err(ModelError::Parse {
                message: format!(
                    "expected {} feature names, found {}",
                    FEATURE_COUNT,
                    artifact.features.len()
                ),
            });
        }
        if artifact.coefficients.len() != FEATURE_COUNT {
            return Err(ModelError::Parse {
                message: format!(
                    "expected {} coefficients, found {}",
                    FEATURE_COUNT,
                    artifact.coefficients.len()
                ),
            });
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Parse {
                message: "coefficients must be finite".to_string(),
            });
        }

        Ok(LinearStrengthModel {
            model_id: artifact.model_id,
            coefficients: SVector::from_column_slice(&artifact.coefficients),
            intercept: artifact.intercept,
            fingerprint: String::new(),
        })
    }

    /// Hex sha256 of the artifact bytes; empty when built from a struct.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn coefficients(&self) -> &SVector<f64, FEATURE_COUNT> {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl StrengthModel for LinearStrengthModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let mpa = self.intercept + self.coefficients.dot(&features.to_svector());
        if mpa.is_finite() {
            Ok(mpa)
        } else {
            Err(ModelError::NonFiniteOutput)
        }
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
