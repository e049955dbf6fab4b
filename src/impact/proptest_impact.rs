//! Property-based tests for the impact estimator using proptest.
//!
//! These tests verify ordering and consistency invariants across the
//! realistic range of absolute magnitudes, and that extreme magnitudes
//! still produce metrics.

use proptest::prelude::*;

use super::*;
use crate::test_utils::assertions;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same input, same bits.
    #[test]
    fn prop_deterministic(h in -5.0f64..40.0) {
        let a = calculate_impact_metrics(h).unwrap();
        let b = calculate_impact_metrics(h).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Fainter objects are smaller in every size-derived metric.
    #[test]
    fn prop_metrics_strictly_decrease_with_magnitude(
        h in 0.0f64..35.0,
        delta in 0.01f64..5.0,
    ) {
        let bright = calculate_impact_metrics(h).unwrap();
        let faint = calculate_impact_metrics(h + delta).unwrap();

        prop_assert!(faint.diameter_km < bright.diameter_km);
        prop_assert!(faint.mass_kg < bright.mass_kg);
        prop_assert!(faint.kinetic_energy_megatons < bright.kinetic_energy_megatons);
        prop_assert!(faint.blast_radius_km < bright.blast_radius_km);
        prop_assert!(faint.crater_diameter_km < bright.crater_diameter_km);
        prop_assert!(faint.seismic_magnitude < bright.seismic_magnitude);
    }

    /// Mass from the diameter estimate is never negative for valid albedo.
    #[test]
    fn prop_mass_non_negative(
        h in -10.0f64..60.0,
        albedo in 0.001f64..=1.0,
    ) {
        let d_km = diameter_km(h, albedo).unwrap();
        let m = mass_kg(d_km * 1000.0, crate::types::DENSITY_SILICEOUS_KG_M3).unwrap();
        prop_assert!(m >= 0.0, "mass {m} for H={h}, pv={albedo}");
    }

    /// Crater scaling is an exact multiplication.
    #[test]
    fn prop_crater_is_fifteen_times_diameter(d in 0.0f64..1e6) {
        prop_assert_eq!(crater_diameter_km(d), 15.0 * d);
    }

    /// Non-positive albedo always fails.
    #[test]
    fn prop_non_positive_albedo_rejected(
        h in -10.0f64..40.0,
        albedo in -10.0f64..=0.0,
    ) {
        prop_assert_eq!(diameter_km(h, albedo), Err(DomainError::InvalidAlbedo(albedo)));
    }

    /// Realistic magnitudes never overflow or underflow any field.
    #[test]
    fn prop_realistic_range_is_finite_and_positive(h in 0.0f64..=35.0) {
        let metrics = calculate_impact_metrics(h).unwrap();
        assertions::assert_finite_positive(&metrics);
    }

    /// H is not range-checked: any finite magnitude yields metrics, with
    /// overflow to infinity or underflow to zero at the extremes.
    #[test]
    fn prop_any_finite_magnitude_is_accepted(h in -2000.0f64..2000.0) {
        let metrics = calculate_impact_metrics(h).unwrap();
        for value in [
            metrics.diameter_m,
            metrics.mass_kg,
            metrics.kinetic_energy_megatons,
            metrics.blast_radius_km,
            metrics.crater_diameter_km,
        ] {
            prop_assert!(value >= 0.0, "H={h} produced {value}");
        }
        prop_assert!(!metrics.seismic_magnitude.is_nan());
    }

    /// Doubling energy multiplies the blast radius by the cube root of two.
    #[test]
    fn prop_blast_radius_cube_root_scaling(energy in 1e-6f64..1e9) {
        let ratio = blast_radius_km(2.0 * energy) / blast_radius_km(energy);
        prop_assert!((ratio - 2f64.cbrt()).abs() < 1e-12);
    }
}
