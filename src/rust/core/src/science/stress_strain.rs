// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Stress-Strain Simulator
//!
//! Formula-generated (not measured) compression curve for a given peak
//! strength, sampled evenly over the strain domain `[0, 0.0035]`.
//!
//! The curve is stored as its two parameters only. Points are evaluated on
//! demand, so iterating twice yields the same sequence.

use serde::{Deserialize, Serialize};

use crate::formulas::{hognestad_stress, ELASTIC_LIMIT_FRACTION, STRAIN_MAX, STRAIN_PEAK};

pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Largest sample count accepted from a request or config.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub strain: f64,
    pub stress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmarks {
    pub elastic_limit: CurvePoint,
    pub ultimate: CurvePoint,
    pub failure: CurvePoint,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StressStrainCurve {
    peak: f64,
    sample_count: usize,
}

/// Curve for `peak_ksc` with `sample_count` evenly spaced samples.
///
/// `peak_ksc <= 0` gives an all-zero curve.
pub fn simulate(peak_ksc: f64, sample_count: usize) -> StressStrainCurve {
    StressStrainCurve {
        peak: peak_ksc.max(0.0),
        sample_count,
    }
}

impl StressStrainCurve {
    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn len(&self) -> usize {
        self.sample_count
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Strain of sample `index` (linspace over the domain, endpoint included).
    pub fn strain_at(&self, index: usize) -> f64 {
        if self.sample_count < 2 {
            return 0.0;
        }
        let last = self.sample_count - 1;
        if index >= last {
            return STRAIN_MAX;
        }
        index as f64 * (STRAIN_MAX / last as f64)
    }

    /// Stress at an arbitrary strain, not restricted to the sample grid.
    pub fn stress(&self, strain: f64) -> f64 {
        hognestad_stress(strain, self.peak)
    }

    pub fn point(&self, index: usize) -> Option<CurvePoint> {
        if index >= self.sample_count {
            return None;
        }
        let strain = self.strain_at(index);
        Some(CurvePoint {
            strain,
            stress: self.stress(strain),
        })
    }

    pub fn iter(&self) -> CurveIter<'_> {
        CurveIter {
            curve: self,
            next: 0,
        }
    }

    pub fn to_points(&self) -> Vec<CurvePoint> {
        self.iter().collect()
    }

    /// Highest sample; the first one if several tie.
    pub fn ultimate_point(&self) -> Option<CurvePoint> {
        self.iter()
            .fold(None, |best: Option<CurvePoint>, p| match best {
                Some(b) if b.stress >= p.stress => Some(b),
                _ => Some(p),
            })
    }

    /// Ascending-branch sample closest to `0.45 * peak`.
    pub fn elastic_limit_point(&self) -> Option<CurvePoint> {
        let target = ELASTIC_LIMIT_FRACTION * self.peak;
        self.iter()
            .take_while(|p| p.strain <= STRAIN_PEAK)
            .fold(None, |best: Option<CurvePoint>, p| match best {
                Some(b) if (b.stress - target).abs() <= (p.stress - target).abs() => Some(b),
                _ => Some(p),
            })
    }

    pub fn failure_point(&self) -> Option<CurvePoint> {
        self.sample_count
            .checked_sub(1)
            .and_then(|last| self.point(last))
    }

    /// `None` for an empty curve.
    pub fn landmarks(&self) -> Option<Landmarks> {
        Some(Landmarks {
            elastic_limit: self.elastic_limit_point()?,
            ultimate: self.ultimate_point()?,
            failure: self.failure_point()?,
        })
    }
}

impl<'a> IntoIterator for &'a StressStrainCurve {
    type Item = CurvePoint;
    type IntoIter = CurveIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct CurveIter<'a> {
    curve: &'a StressStrainCurve,
    next: usize,
}

impl Iterator for CurveIter<'_> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        let point = self.curve.point(self.next)?;
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.curve.sample_count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_endpoints() {
        let curve = simulate(300.0, DEFAULT_SAMPLE_COUNT);
        let pts = curve.to_points();
        assert_eq!(pts.len(), 100);
        assert_eq!(pts[0], CurvePoint { strain: 0.0, stress: 0.0 });
        assert_eq!(pts[99].strain, 0.0035);
    }

    #[test]
    fn test_exact_peak_at_proportional_limit() {
        let curve = simulate(367.092, DEFAULT_SAMPLE_COUNT);
        assert_eq!(curve.stress(0.002), 367.092);
    }

    #[test]
    fn test_ultimate_sits_next_to_peak_strain() {
        let curve = simulate(305.91, DEFAULT_SAMPLE_COUNT);
        let ult = curve.ultimate_point().unwrap();
        // Grid spacing is 0.0035 / 99
        let step = 0.0035 / 99.0;
        assert!((ult.strain - 0.002).abs() <= step, "ultimate at {}", ult.strain);
        assert!(curve.iter().all(|p| p.stress <= ult.stress));
    }

    #[test]
    fn test_landmarks() {
        let curve = simulate(200.0, DEFAULT_SAMPLE_COUNT);
        let lm = curve.landmarks().unwrap();

        assert!(lm.elastic_limit.strain <= 0.002);
        assert!((lm.elastic_limit.stress - 90.0).abs() < 5.0, "{:?}", lm.elastic_limit);
        assert_eq!(lm.failure.strain, 0.0035);
        assert!((lm.failure.stress - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_peak_is_flat_zero() {
        for peak in [0.0, -12.5] {
            let curve = simulate(peak, 50);
            assert!(curve.iter().all(|p| p.stress == 0.0));
            assert_eq!(curve.len(), 50);
        }
    }

    #[test]
    fn test_restartable() {
        let curve = simulate(250.0, 40);
        let first: Vec<CurvePoint> = curve.iter().collect();
        let second: Vec<CurvePoint> = (&curve).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(curve.iter().len(), 40);
    }

    #[test]
    fn test_degenerate_sample_counts() {
        let empty = simulate(250.0, 0);
        assert!(empty.is_empty());
        assert!(empty.landmarks().is_none());

        let single = simulate(250.0, 1);
        assert_eq!(single.to_points(), vec![CurvePoint { strain: 0.0, stress: 0.0 }]);
        assert!(single.landmarks().is_some());
    }

    #[test]
    fn test_stress_never_negative() {
        let curve = simulate(500.0, 1000);
        assert!(curve.iter().all(|p| p.stress >= 0.0));
    }
}
