// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MixLab: Mix Strength Model Interface
//
// This file is part of MixLab.
// For licensing terms, see the LICENSE file in the project root.

//! Strength Model Collaborator
//!
//! The regression model is an opaque, pre-fitted function from a
//! [`FeatureVector`] to a strength in MPa. It is loaded once at startup and
//! only read afterwards, so a single instance can serve concurrent callers.
//!
//! ```text
//! MixKernel --uses--> ModelSlot --holds--> Arc<dyn StrengthModel>
//!                                                 ^
//!                                   +-------------+-------------+
//!                                   |                           |
//!                         LinearStrengthModel           Fn(&FeatureVector) -> f64
//! ```

pub mod linear;

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ModelError;
use crate::science::strength::PredictionResult;
use crate::tensors::FeatureVector;

pub use linear::LinearStrengthModel;

/// A pre-fitted regression model. Implementations must be read-only after load.
pub trait StrengthModel: Send + Sync {
    /// Predicted compressive strength, MPa (cylinder basis).
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    fn model_id(&self) -> &str {
        "anonymous"
    }
}

/// Plain functions act as models, mostly for manual overrides and tests.
impl<F> StrengthModel for F
where
    F: Fn(&FeatureVector) -> f64 + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let mpa = self(features);
        if mpa.is_finite() {
            Ok(mpa)
        } else {
            Err(ModelError::NonFiniteOutput)
        }
    }
}

/// The process-wide model handle.
#[derive(Clone)]
pub enum ModelSlot {
    Ready(Arc<dyn StrengthModel>),
    Unavailable { reason: String },
}

impl ModelSlot {
    pub fn ready<M: StrengthModel + 'static>(model: M) -> Self {
        ModelSlot::Ready(Arc::new(model))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        ModelSlot::Unavailable {
            reason: reason.into(),
        }
    }

    /// Load a linear model artifact. Failure is logged and leaves the slot
    /// unavailable; it never aborts the caller.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match LinearStrengthModel::from_file(path) {
            Ok(model) => {
                info!(
                    model = model.model_id(),
                    sha256 = model.fingerprint(),
                    "strength model loaded"
                );
                ModelSlot::ready(model)
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "strength model unavailable, prediction disabled"
                );
                ModelSlot::unavailable(e.to_string())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelSlot::Ready(_))
    }

    /// One-line status for display.
    pub fn status(&self) -> String {
        match self {
            ModelSlot::Ready(model) => format!("Model loaded: {}", model.model_id()),
            ModelSlot::Unavailable { reason } => format!("Model unavailable: {}", reason),
        }
    }

    pub fn model_id(&self) -> Option<&str> {
        match self {
            ModelSlot::Ready(model) => Some(model.model_id()),
            ModelSlot::Unavailable { .. } => None,
        }
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, ModelError> {
        match self {
            ModelSlot::Ready(model) => {
                let mpa = model.predict(features)?;
                if !mpa.is_finite() {
                    return Err(ModelError::NonFiniteOutput);
                }
                Ok(PredictionResult::from_mpa(mpa))
            }
            ModelSlot::Unavailable { reason } => Err(ModelError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }
}

impl std::fmt::Debug for ModelSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status())
    }
}
