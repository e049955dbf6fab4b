//! Impact simulation record.
//!
//! Bundles the estimator output with the labels a front end needs: which
//! asteroid, where it hit, and which bulk assumptions produced the numbers.

use serde::Serialize;
use tracing::info;

use crate::impact::{self, DomainError, ImpactInput, ImpactMetrics};
use crate::types::{Coordinates, PhysicalConstants};

/// One simulated impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactSimulation {
    pub asteroid_name: String,
    pub impact_coords: Coordinates,
    /// Absolute magnitude H the metrics were derived from.
    #[serde(rename = "H_magnitude")]
    pub h_magnitude: f64,
    #[serde(rename = "V_impact_assumed_km_s")]
    pub v_impact_assumed_km_s: f64,
    pub density_assumed_kg_m3: f64,
    pub albedo_assumed: f64,
    pub results: ImpactMetrics,
}

/// Simulate an impact with the default stony-asteroid assumptions.
pub fn simulate_impact(
    asteroid_name: &str,
    absolute_magnitude: f64,
    coords: Coordinates,
) -> Result<ImpactSimulation, DomainError> {
    simulate_impact_with(
        asteroid_name,
        absolute_magnitude,
        coords,
        &PhysicalConstants::default(),
    )
}

/// Simulate an impact with explicit assumptions.
///
/// Coordinates are labels only and are not validated here.
pub fn simulate_impact_with(
    asteroid_name: &str,
    absolute_magnitude: f64,
    coords: Coordinates,
    constants: &PhysicalConstants,
) -> Result<ImpactSimulation, DomainError> {
    let results =
        impact::calculate_impact_metrics_with(ImpactInput::new(absolute_magnitude), constants)?;

    info!(
        "Simulated {} at ({:.4}, {:.4}): {} Mt, blast radius {} km",
        asteroid_name,
        coords.lat,
        coords.lng,
        results.display.kinetic_energy_megatons,
        results.display.blast_radius_km
    );

    Ok(ImpactSimulation {
        asteroid_name: asteroid_name.to_string(),
        impact_coords: coords,
        h_magnitude: absolute_magnitude,
        v_impact_assumed_km_s: constants.impact_velocity_km_s(),
        density_assumed_kg_m3: constants.density_kg_m3,
        albedo_assumed: constants.albedo,
        results,
    })
}
