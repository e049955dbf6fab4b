//! Test utilities for impact estimation tests.
//!
//! Provides fixtures for well-known asteroids and catalog documents, and
//! assertions for the physical invariants every metrics bundle must satisfy.

use crate::impact::ImpactMetrics;

/// Fixtures for creating test inputs.
pub mod fixtures {
    use crate::catalog::AsteroidCatalog;

    /// Absolute magnitude of 99942 Apophis.
    pub const APOPHIS_H: f64 = 19.7;

    /// Absolute magnitude of 433 Eros.
    pub const EROS_H: f64 = 10.4;

    /// Absolute magnitude of 101955 Bennu.
    pub const BENNU_H: f64 = 20.21;

    /// A small catalog document in the same shape as the bundled dataset.
    ///
    /// Names carry the leading padding the upstream database uses.
    pub const CATALOG_JSON: &str = r#"{
        "asteroids": [
            {
                "full_name": "   433 Eros (A898 PA)",
                "a": 1.458, "e": 0.2228, "i": 10.83, "om": 304.3, "w": 178.9,
                "q": 1.133, "ad": 1.783, "per_y": 1.76, "data_arc": 46582,
                "condition_code": 0, "n_obs_used": 9130,
                "n_del_obs_used": 4, "n_dop_obs_used": 2,
                "H": 10.4, "neo": "Y", "pha": "N"
            },
            {
                "full_name": " 99942 Apophis (2004 MN4)",
                "a": 0.9224, "e": 0.1911, "i": 3.339, "om": 203.9, "w": 126.6,
                "q": 0.7461, "ad": 1.099, "per_y": 0.886, "data_arc": 6529,
                "condition_code": 0, "n_obs_used": 7799,
                "n_del_obs_used": 27, "n_dop_obs_used": 9,
                "H": 19.7, "neo": "Y", "pha": "Y"
            },
            {
                "full_name": "101955 Bennu (1999 RQ36)",
                "a": 1.126, "e": 0.2037, "i": 6.035, "om": 2.061, "w": 66.22,
                "q": 0.8968, "ad": 1.356, "per_y": 1.2, "data_arc": 8762,
                "condition_code": 0, "n_obs_used": 1022,
                "n_del_obs_used": 29, "n_dop_obs_used": 22,
                "H": 20.21, "neo": "Y", "pha": "Y"
            },
            {
                "full_name": "  (2008 TC3)",
                "a": 1.308, "e": 0.3121, "i": 2.542, "om": 194.1, "w": 234.4,
                "q": 0.8999, "ad": 1.716, "per_y": 1.5, "data_arc": 1,
                "condition_code": 6, "n_obs_used": 883,
                "n_del_obs_used": null, "n_dop_obs_used": null,
                "H": 30.9, "neo": "Y", "pha": "N"
            }
        ]
    }"#;

    /// Parse [`CATALOG_JSON`].
    pub fn sample_catalog() -> AsteroidCatalog {
        AsteroidCatalog::from_json(CATALOG_JSON).expect("fixture catalog must parse")
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Assert every numeric field is finite and strictly positive.
    ///
    /// # Panics
    /// Panics naming the first offending field.
    pub fn assert_finite_positive(metrics: &ImpactMetrics) {
        let fields = [
            ("diameter_m", metrics.diameter_m),
            ("diameter_km", metrics.diameter_km),
            ("mass_kg", metrics.mass_kg),
            ("kinetic_energy_joules", metrics.kinetic_energy_joules),
            ("kinetic_energy_megatons", metrics.kinetic_energy_megatons),
            ("blast_radius_km", metrics.blast_radius_km),
            ("crater_diameter_km", metrics.crater_diameter_km),
            ("seismic_magnitude", metrics.seismic_magnitude),
        ];
        for (name, value) in fields {
            assert!(
                value.is_finite() && value > 0.0,
                "{name} should be finite and positive, got {value:e}"
            );
        }
    }

    /// Assert a sequence is strictly decreasing.
    ///
    /// # Panics
    /// Panics at the first pair that is not strictly ordered.
    pub fn assert_strictly_decreasing(label: &str, values: &[f64]) {
        for pair in values.windows(2) {
            assert!(
                pair[1] < pair[0],
                "{label} not strictly decreasing: {:e} followed by {:e}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::calculate_impact_metrics;

    #[test]
    fn test_fixture_catalog_parses() {
        let catalog = fixtures::sample_catalog();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_reference_asteroids_are_physical() {
        for h in [fixtures::EROS_H, fixtures::APOPHIS_H, fixtures::BENNU_H] {
            let metrics = calculate_impact_metrics(h).unwrap();
            assertions::assert_finite_positive(&metrics);
        }
    }

    #[test]
    fn test_strictly_decreasing_accepts_ordered() {
        assertions::assert_strictly_decreasing("ordered", &[3.0, 2.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "not strictly decreasing")]
    fn test_strictly_decreasing_rejects_plateau() {
        assertions::assert_strictly_decreasing("plateau", &[3.0, 3.0]);
    }
}
