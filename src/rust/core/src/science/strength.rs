// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

use crate::formulas::mpa_to_ksc;

/// Predicted compressive strength (cylinder basis).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub strength_mpa: f64,
    pub strength_ksc: f64,
    pub strength_class: String, // e.g., "C30/37"
}

impl PredictionResult {
    pub fn from_mpa(strength_mpa: f64) -> Self {
        PredictionResult {
            strength_mpa,
            strength_ksc: mpa_to_ksc(strength_mpa),
            strength_class: classify_strength(strength_mpa).to_string(),
        }
    }
}

/// EN 206 class whose characteristic cylinder strength the value reaches.
pub fn classify_strength(fc: f64) -> &'static str {
    if fc < 12.0 {
        return "C8/10";
    }
    if fc < 16.0 {
        return "C12/15";
    }
    if fc < 20.0 {
        return "C16/20";
    }
    if fc < 25.0 {
        return "C20/25";
    }
    if fc < 30.0 {
        return "C25/30";
    }
    if fc < 35.0 {
        return "C30/37";
    }
    if fc < 40.0 {
        return "C35/45";
    }
    if fc < 45.0 {
        return "C40/50";
    }
    if fc < 50.0 {
        return "C45/55";
    }
    if fc < 60.0 {
        return "C50/60";
    }
    "C60+"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_converts_to_ksc() {
        let p = PredictionResult::from_mpa(30.0);
        assert!((p.strength_ksc - 305.91).abs() < 1e-9);
        assert_eq!(p.strength_class, "C30/37");
    }

    #[test]
    fn test_conversion_is_repeatable() {
        // Same input, bit-identical output
        let a = PredictionResult::from_mpa(41.37);
        let b = PredictionResult::from_mpa(41.37);
        assert_eq!(a.strength_ksc.to_bits(), b.strength_ksc.to_bits());
    }

    #[test]
    fn test_class_boundaries() {
        assert_eq!(classify_strength(0.0), "C8/10");
        assert_eq!(classify_strength(25.0), "C25/30");
        assert_eq!(classify_strength(39.9), "C35/45");
        assert_eq!(classify_strength(42.0), "C40/50");
        assert_eq!(classify_strength(47.0), "C45/55");
        assert_eq!(classify_strength(50.0), "C50/60");
        assert_eq!(classify_strength(75.0), "C60+");
    }
}
