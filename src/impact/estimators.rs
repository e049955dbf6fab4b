//! Individual stages of the impact pipeline.
//!
//! Each estimator is a pure function of its inputs. Stages that take a
//! logarithm or assume a non-negative quantity validate their inputs and
//! return [`DomainError`]; the others are total.

use std::f64::consts::PI;

use crate::types::JOULES_PER_MEGATON;

use super::DomainError;

/// Fraction of impact energy converted into seismic waves.
///
/// Typical estimates range from 1e-5 to 1e-3; the middle of that range is used.
pub const SEISMIC_EFFICIENCY: f64 = 1e-4;

/// Empirical coefficient of the blast radius cube-root law (km / Mt^(1/3)).
pub const BLAST_RADIUS_COEFFICIENT: f64 = 1.5;

/// Ratio of crater diameter to impactor diameter.
pub const CRATER_TO_IMPACTOR_RATIO: f64 = 15.0;

/// Estimate the diameter of an asteroid from its absolute magnitude.
///
/// log10(D) = 3.13 - 0.2·H - 0.5·log10(pv)
///
/// # Arguments
/// * `absolute_magnitude` - Absolute magnitude H
/// * `albedo` - Geometric albedo pv, in (0, 1]
///
/// # Returns
/// Diameter in kilometers. Very bright objects (very negative H) are not
/// clamped.
pub fn diameter_km(absolute_magnitude: f64, albedo: f64) -> Result<f64, DomainError> {
    if !absolute_magnitude.is_finite() {
        return Err(DomainError::NonFiniteMagnitude(absolute_magnitude));
    }
    if albedo.is_nan() || albedo <= 0.0 || albedo > 1.0 {
        return Err(DomainError::InvalidAlbedo(albedo));
    }

    let log_d = 3.13 - 0.2 * absolute_magnitude - 0.5 * albedo.log10();
    Ok(10f64.powf(log_d))
}

/// Mass of a homogeneous sphere.
///
/// m = ρ · (4/3)·π·(d/2)³
///
/// # Arguments
/// * `diameter_m` - Diameter in meters (must be non-negative)
/// * `density_kg_m3` - Bulk density in kg/m³ (must be positive)
pub fn mass_kg(diameter_m: f64, density_kg_m3: f64) -> Result<f64, DomainError> {
    if diameter_m.is_nan() || diameter_m < 0.0 {
        return Err(DomainError::NegativeDiameter(diameter_m));
    }
    if !density_kg_m3.is_finite() || density_kg_m3 <= 0.0 {
        return Err(DomainError::InvalidDensity(density_kg_m3));
    }

    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    Ok(volume * density_kg_m3)
}

/// Kinetic energy of the impactor in joules.
///
/// E = ½·m·v²
pub fn kinetic_energy_joules(mass_kg: f64, velocity_m_s: f64) -> Result<f64, DomainError> {
    if mass_kg.is_nan() || mass_kg < 0.0 {
        return Err(DomainError::NegativeMass(mass_kg));
    }
    if !velocity_m_s.is_finite() || velocity_m_s < 0.0 {
        return Err(DomainError::InvalidVelocity(velocity_m_s));
    }

    Ok(0.5 * mass_kg * velocity_m_s.powi(2))
}

/// Kinetic energy of the impactor in megatons of TNT.
pub fn kinetic_energy_megatons(mass_kg: f64, velocity_m_s: f64) -> Result<f64, DomainError> {
    let energy_joules = kinetic_energy_joules(mass_kg, velocity_m_s)?;
    Ok(joules_to_megatons(energy_joules))
}

/// Convert joules to megatons of TNT.
pub fn joules_to_megatons(energy_joules: f64) -> f64 {
    energy_joules / JOULES_PER_MEGATON
}

/// Radius of severe blast damage.
///
/// R = 1.5 · ∛E, the cube-root scaling of blast waves with energy.
/// Defined for every real input.
pub fn blast_radius_km(energy_megatons: f64) -> f64 {
    BLAST_RADIUS_COEFFICIENT * energy_megatons.cbrt()
}

/// Diameter of the final crater.
///
/// A flat 15× rule of thumb rather than a real scaling law.
pub fn crater_diameter_km(asteroid_diameter_km: f64) -> f64 {
    CRATER_TO_IMPACTOR_RATIO * asteroid_diameter_km
}

/// Richter-equivalent magnitude of the ground shaking.
///
/// Applies the Gutenberg–Richter energy relation log10(Es) = 1.5·M + 4.8
/// to the seismically coupled energy Es = η·E, which gives
/// M ≈ (2/3)·log10(E) − 5.87. This is an order-of-magnitude proxy.
///
/// # Arguments
/// * `energy_joules` - Impact kinetic energy in joules (must be non-negative)
///
/// # Returns
/// Zero energy, e.g. a diameter that underflowed at very faint H, maps to
/// negative infinity.
pub fn seismic_magnitude(energy_joules: f64) -> Result<f64, DomainError> {
    if energy_joules.is_nan() || energy_joules < 0.0 {
        return Err(DomainError::NegativeEnergy(energy_joules));
    }

    let seismic_energy = SEISMIC_EFFICIENCY * energy_joules;
    Ok((seismic_energy.log10() - 4.8) / 1.5)
}
