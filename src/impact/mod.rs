//! Impact physics estimator.
//!
//! Converts an asteroid's absolute magnitude into a bundle of impact metrics:
//!
//! H → diameter → mass → kinetic energy → blast radius → crater diameter
//!                                      ↘ seismic magnitude
//!
//! This is a simplified, order-of-magnitude model for education. Nothing
//! here accounts for atmospheric entry, fragmentation, impact angle or
//! target geology.

pub mod estimators;
pub mod format;

#[cfg(test)]
mod proptest_impact;

use serde::Serialize;
use tracing::debug;

use crate::types::{METERS_PER_KM, PhysicalConstants};

pub use estimators::{
    blast_radius_km, crater_diameter_km, diameter_km, joules_to_megatons, kinetic_energy_joules,
    kinetic_energy_megatons, mass_kg, seismic_magnitude,
};

/// Invalid mathematical input to one of the estimator stages.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("absolute magnitude must be finite, got {0}")]
    NonFiniteMagnitude(f64),

    #[error("albedo must be in (0, 1], got {0}")]
    InvalidAlbedo(f64),

    #[error("diameter must be non-negative, got {0} m")]
    NegativeDiameter(f64),

    #[error("density must be positive and finite, got {0} kg/m³")]
    InvalidDensity(f64),

    #[error("mass must be non-negative, got {0} kg")]
    NegativeMass(f64),

    #[error("impact velocity must be non-negative and finite, got {0} m/s")]
    InvalidVelocity(f64),

    #[error("impact energy must be non-negative, got {0} J")]
    NegativeEnergy(f64),
}

/// Input to the estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactInput {
    /// Absolute magnitude H (typically 5-30).
    pub absolute_magnitude: f64,
    /// Albedo override. `None` uses the value from [`PhysicalConstants`].
    pub albedo: Option<f64>,
}

impl ImpactInput {
    pub fn new(absolute_magnitude: f64) -> Self {
        Self {
            absolute_magnitude,
            albedo: None,
        }
    }

    pub fn with_albedo(mut self, albedo: f64) -> Self {
        self.albedo = Some(albedo);
        self
    }
}

/// Pre-rendered strings for every metric.
///
/// Serialized field names match the keys the web front end reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetricsDisplay {
    #[serde(rename = "D_diameter_m")]
    pub diameter_m: String,
    #[serde(rename = "M_mass_kg")]
    pub mass_kg: String,
    #[serde(rename = "Ek_megatons")]
    pub kinetic_energy_megatons: String,
    #[serde(rename = "R_blast_km")]
    pub blast_radius_km: String,
    #[serde(rename = "D_crater_km")]
    pub crater_diameter_km: String,
    pub seismic_magnitude: String,
}

/// Result of one estimator run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactMetrics {
    /// Impactor diameter (m).
    pub diameter_m: f64,
    /// Impactor diameter (km).
    pub diameter_km: f64,
    /// Impactor mass (kg).
    pub mass_kg: f64,
    /// Kinetic energy at impact (J).
    pub kinetic_energy_joules: f64,
    /// Kinetic energy at impact (Mt TNT).
    pub kinetic_energy_megatons: f64,
    /// Radius of severe blast damage (km).
    pub blast_radius_km: f64,
    /// Final crater diameter (km).
    pub crater_diameter_km: f64,
    /// Richter-equivalent magnitude of the ground shaking.
    pub seismic_magnitude: f64,
    /// Display strings for the values above.
    pub display: MetricsDisplay,
}

/// Run the full pipeline with the default stony-asteroid constants.
///
/// # Example
/// ```
/// let metrics = neosentinel::impact::calculate_impact_metrics(20.0).unwrap();
/// assert_eq!(metrics.display.diameter_m, "348.30");
/// assert_eq!(metrics.display.mass_kg, "5.97e+10");
/// ```
pub fn calculate_impact_metrics(absolute_magnitude: f64) -> Result<ImpactMetrics, DomainError> {
    calculate_impact_metrics_with(
        ImpactInput::new(absolute_magnitude),
        &PhysicalConstants::default(),
    )
}

/// Run the full pipeline with explicit constants.
///
/// An albedo on `input` takes precedence over `constants.albedo`.
pub fn calculate_impact_metrics_with(
    input: ImpactInput,
    constants: &PhysicalConstants,
) -> Result<ImpactMetrics, DomainError> {
    let albedo = input.albedo.unwrap_or(constants.albedo);

    let diameter_km = estimators::diameter_km(input.absolute_magnitude, albedo)?;
    let diameter_m = diameter_km * METERS_PER_KM;
    let mass_kg = estimators::mass_kg(diameter_m, constants.density_kg_m3)?;

    let kinetic_energy_joules =
        estimators::kinetic_energy_joules(mass_kg, constants.impact_velocity_m_s)?;
    let kinetic_energy_megatons = estimators::joules_to_megatons(kinetic_energy_joules);

    let blast_radius_km = estimators::blast_radius_km(kinetic_energy_megatons);
    let crater_diameter_km = estimators::crater_diameter_km(diameter_km);
    let seismic_magnitude = estimators::seismic_magnitude(kinetic_energy_joules)?;

    debug!(
        h = input.absolute_magnitude,
        albedo,
        diameter_m,
        mass_kg,
        energy_mt = kinetic_energy_megatons,
        "Computed impact metrics"
    );

    let display = MetricsDisplay {
        diameter_m: format::fixed(diameter_m, 2),
        mass_kg: format::scientific(mass_kg, 2),
        kinetic_energy_megatons: format::fixed(kinetic_energy_megatons, 2),
        blast_radius_km: format::fixed(blast_radius_km, 2),
        crater_diameter_km: format::fixed(crater_diameter_km, 3),
        seismic_magnitude: format::fixed(seismic_magnitude, 1),
    };

    Ok(ImpactMetrics {
        diameter_m,
        diameter_km,
        mass_kg,
        kinetic_energy_joules,
        kinetic_energy_megatons,
        blast_radius_km,
        crater_diameter_km,
        seismic_magnitude,
        display,
    })
}
