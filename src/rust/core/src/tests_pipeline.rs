// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Mix Pipeline Tests
//!
//! Reference scenarios run through the full request -> report path, plus
//! randomized checks over the accepted input space.

use crate::config::MixConfig;
use crate::kernel::{MixKernel, MixRequest};
use crate::model::ModelSlot;
use crate::science::{
    compute_metrics, estimate_cost, simulate, PriceTable, SpecimenShape, DEFAULT_SAMPLE_COUNT,
};
use crate::tensors::{assemble, Feature, FeatureVector, InputBounds, Material, MixDesign};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scenario_one_mix() -> MixDesign {
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

fn random_mix(rng: &mut StdRng) -> MixDesign {
    let bounds = InputBounds::default();
    let mut mix = scenario_one_mix();
    for feature in Feature::ALL {
        let range = bounds.for_feature(feature);
        mix = mix.with_value(feature, rng.gen_range(range.min..=range.max));
    }
    mix
}

#[test]
fn test_scenario_one_ratios_and_checks() {
    let mix = scenario_one_mix();
    let m = compute_metrics(&mix, 30.0, SpecimenShape::Cylinder);

    assert_eq!(m.total_binder, 350.0);
    assert!((m.water_binder_ratio - 180.0 / 350.0).abs() < 1e-12);
    assert!((m.water_binder_ratio - 0.514).abs() < 1e-3);
    assert!(!m.standards.wb_ratio_ok, "0.514 exceeds 0.50");
    assert!(m.standards.cement_ok, "350 >= 300");
}

#[test]
fn test_scenario_two_unit_and_shape_conversion() {
    let m = compute_metrics(&scenario_one_mix(), 30.0, SpecimenShape::Cube);
    assert!((m.strength_ksc - 305.91).abs() < 1e-9);
    assert_eq!(m.shape_factor, 1.20);
    assert!((m.shape_corrected_ksc - 367.092).abs() < 1e-9);
}

#[test]
fn test_scenario_three_default_cost() {
    let cost = estimate_cost(&scenario_one_mix(), &PriceTable::default());
    assert!((cost.total_cost_per_cubic_meter - 1467.70).abs() < 1e-9);
    for m in [Material::Slag, Material::FlyAsh, Material::Superplasticizer] {
        assert_eq!(cost.item(m).map(|i| i.cost), Some(0.0));
    }
}

#[test]
fn test_scenario_four_no_binder() {
    let mix = MixDesign {
        cement: 0.0,
        slag: 0.0,
        fly_ash: 0.0,
        water: 100.0,
        ..scenario_one_mix()
    };
    let m = compute_metrics(&mix, 10.0, SpecimenShape::Cylinder);
    assert_eq!(m.water_binder_ratio, 0.0);
    assert!(!m.water_binder_ratio.is_nan());
    assert!(!m.standards.cement_ok);
}

#[test]
fn test_full_report_for_reference_mix() {
    println!(" Evaluating reference mix end to end");

    let kernel = MixKernel::with_model(
        MixConfig::default(),
        ModelSlot::ready(|_: &FeatureVector| 30.0),
    );
    let request = MixRequest {
        shape: Some(SpecimenShape::Cube),
        ..MixRequest::new(scenario_one_mix())
    };
    let report = kernel.evaluate(&request).unwrap();

    assert_eq!(
        report.features.as_slice(),
        &[350.0, 0.0, 0.0, 180.0, 0.0, 1000.0, 800.0, 28.0]
    );
    assert!((report.metrics.shape_corrected_ksc - 367.092).abs() < 1e-9);
    assert!((report.cost.total_cost_per_cubic_meter - 1467.70).abs() < 1e-9);

    let landmarks = report.stress_strain.landmarks.unwrap();
    assert!(landmarks.ultimate.stress <= report.stress_strain.peak_ksc);
    assert!(landmarks.elastic_limit.stress < landmarks.ultimate.stress);
    assert_eq!(landmarks.failure.strain, 0.0035);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["prediction"]["strengthClass"], "C30/37");
    assert_eq!(json["metrics"]["standards"]["wbRatioOk"], false);
    println!(" Report: {}", json["events"]);
}

#[test]
fn test_random_valid_mixes_assemble_in_order() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let mix = random_mix(&mut rng);
        let fv = assemble(&mix).unwrap();
        assert_eq!(fv.len(), 8);
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(fv.as_slice()[i], mix.value(*feature));
        }
    }
}

#[test]
fn test_random_metrics_are_pure_and_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let mix = random_mix(&mut rng);
        let mpa = rng.gen_range(0.0..100.0);

        let a = compute_metrics(&mix, mpa, SpecimenShape::Cube);
        let b = compute_metrics(&mix, mpa, SpecimenShape::Cube);
        assert_eq!(a.strength_ksc.to_bits(), b.strength_ksc.to_bits());
        assert_eq!(a, b);

        if a.total_binder > 0.0 {
            let back = a.water_binder_ratio * a.total_binder;
            assert!((back - mix.water).abs() <= 1e-9 * mix.water.max(1.0));
        } else {
            assert_eq!(a.water_binder_ratio, 0.0);
        }
    }
}

#[test]
fn test_random_curves_are_bounded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let peak = rng.gen_range(1.0..1200.0);
        let curve = simulate(peak, DEFAULT_SAMPLE_COUNT);

        assert_eq!(curve.stress(0.0), 0.0);
        assert_eq!(curve.stress(0.002), peak);
        assert!(curve.iter().all(|p| p.stress >= 0.0 && p.stress <= peak));

        let ultimate = curve.ultimate_point().unwrap();
        assert!((ultimate.strain - 0.002).abs() <= 0.0035 / 99.0);
    }
}
