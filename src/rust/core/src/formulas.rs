// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Scalar Formulas for Mix Evaluation
//!
//! Pure functions over plain numbers. Every engine in `science` is built from
//! these, so the constants here are the single source of truth.
//!
//! References:
//! - Hognestad (1951): parabolic ascending branch, linear softening
//! - ACI 318 / ACI 201: w/b ceiling for exterior exposure, minimum cement content
//! - BS EN 12390-3: cube vs. cylinder specimen correction

use wasm_bindgen::prelude::*;

// ============================================================================
// UNIT CONVERSION
// ============================================================================

/// 1 MPa expressed in kgf/cm² (ksc).
pub const MPA_TO_KSC: f64 = 10.197;

/// Shape factor applied to the model's native (cylinder) strength.
pub const CYLINDER_SHAPE_FACTOR: f64 = 1.0;
pub const CUBE_SHAPE_FACTOR: f64 = 1.20;

/// Convert compressive strength from MPa to ksc.
#[wasm_bindgen]
pub fn mpa_to_ksc(mpa: f64) -> f64 {
    mpa * MPA_TO_KSC
}

// ============================================================================
// MIX RATIOS
// ============================================================================

/// Water-to-binder ratio threshold for general / exterior exposure (inclusive).
pub const WB_RATIO_LIMIT: f64 = 0.50;

/// Minimum cement content for adequate durability, kg/m³ (inclusive).
pub const MIN_CEMENT_CONTENT: f64 = 300.0;

/// Water / binder with a zero-binder guard.
///
/// A mix without binder has no meaningful ratio; it is reported as 0 so the
/// value can always be displayed.
#[wasm_bindgen]
pub fn water_binder_ratio(water: f64, binder: f64) -> f64 {
    if binder > 0.0 {
        water / binder
    } else {
        0.0
    }
}

// ============================================================================
// STRESS-STRAIN (HOGNESTAD)
// ============================================================================

/// Upper bound of the simulated strain domain.
pub const STRAIN_MAX: f64 = 0.0035;

/// Strain at peak stress; end of the parabolic branch.
pub const STRAIN_PEAK: f64 = 0.002;

/// Strain at which the softening line reaches `RESIDUAL_FRACTION * fc`.
/// Lies beyond `STRAIN_MAX`, so the simulated curve ends at 0.875 fc.
pub const STRAIN_SOFTENING_END: f64 = 0.0038;

/// Residual stress fraction at `STRAIN_SOFTENING_END`.
pub const RESIDUAL_FRACTION: f64 = 0.85;

/// Fraction of peak stress taken as the elastic limit.
pub const ELASTIC_LIMIT_FRACTION: f64 = 0.45;

/// Stress at `strain` for a concrete with peak strength `fc`.
///
/// Ascending: `fc * (2r - r²)` with `r = e / 0.002`, exactly `fc` at the peak.
/// Descending: straight line from `fc` at 0.002 to `0.85 fc` at 0.0038.
/// Never negative; `fc <= 0` gives 0 everywhere.
#[wasm_bindgen]
pub fn hognestad_stress(strain: f64, fc: f64) -> f64 {
    if fc <= 0.0 || strain <= 0.0 {
        return 0.0;
    }
    let stress = if strain <= STRAIN_PEAK {
        let r = strain / STRAIN_PEAK;
        fc * (2.0 * r - r * r)
    } else {
        let slope = fc * (1.0 - RESIDUAL_FRACTION) / (STRAIN_SOFTENING_END - STRAIN_PEAK);
        fc - slope * (strain - STRAIN_PEAK)
    };
    stress.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ksc_factor_is_exact() {
        assert_eq!(mpa_to_ksc(1.0), 10.197);
        assert_eq!(mpa_to_ksc(30.0), 30.0 * 10.197);
        assert!((mpa_to_ksc(30.0) - 305.91).abs() < 1e-9);
    }

    #[test]
    fn test_wb_ratio_zero_binder_is_zero() {
        assert_eq!(water_binder_ratio(180.0, 0.0), 0.0);
        assert!(!water_binder_ratio(180.0, 0.0).is_nan());
    }

    #[test]
    fn test_wb_ratio_plain() {
        let r = water_binder_ratio(180.0, 350.0);
        assert!((r - 0.5142857).abs() < 1e-6, "got {}", r);
    }

    #[test]
    fn test_hognestad_origin_and_peak() {
        assert_eq!(hognestad_stress(0.0, 300.0), 0.0);
        assert_eq!(hognestad_stress(STRAIN_PEAK, 300.0), 300.0);
    }

    #[test]
    fn test_hognestad_softening_endpoint() {
        // Line passes through 0.85 fc at 0.0038; at 0.0035 it is 0.875 fc
        let at_end = hognestad_stress(STRAIN_SOFTENING_END, 100.0);
        assert!((at_end - 85.0).abs() < 1e-9, "got {}", at_end);
        let at_max = hognestad_stress(STRAIN_MAX, 100.0);
        assert!((at_max - 87.5).abs() < 1e-9, "got {}", at_max);
    }

    #[test]
    fn test_hognestad_never_negative() {
        assert_eq!(hognestad_stress(0.001, -50.0), 0.0);
        assert_eq!(hognestad_stress(0.05, 100.0), 0.0);
    }
}
