//! Core physical constants and shared types for impact estimation.

use serde::Serialize;

// Physical constants (SI units)

/// Bulk density of a stony (siliceous) asteroid (kg/m³)
pub const DENSITY_SILICEOUS_KG_M3: f64 = 2700.0;

/// Assumed atmosphere-relative impact speed (m/s)
pub const IMPACT_VELOCITY_M_S: f64 = 20_000.0;

/// Assumed geometric albedo for the diameter–magnitude relation
pub const ALBEDO_ASSUMED: f64 = 0.15;

/// Joules per megaton of TNT equivalent
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Bulk assumptions fed into the estimator.
///
/// The defaults reproduce the stony-asteroid model. Other presets exist for
/// exploring alternative assumptions without touching the formulas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhysicalConstants {
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
    /// Impact speed relative to the atmosphere (m/s).
    pub impact_velocity_m_s: f64,
    /// Geometric albedo, in (0, 1].
    pub albedo: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::stony()
    }
}

impl PhysicalConstants {
    /// Stony (S-type) asteroid. This is the default model.
    pub const fn stony() -> Self {
        Self {
            density_kg_m3: DENSITY_SILICEOUS_KG_M3,
            impact_velocity_m_s: IMPACT_VELOCITY_M_S,
            albedo: ALBEDO_ASSUMED,
        }
    }

    /// Carbonaceous (C-type) asteroid: dark and porous.
    pub const fn carbonaceous() -> Self {
        Self {
            density_kg_m3: 1400.0,
            albedo: 0.05,
            ..Self::stony()
        }
    }

    /// Metallic (M-type) asteroid: iron-nickel body.
    pub const fn metallic() -> Self {
        Self {
            density_kg_m3: 7800.0,
            ..Self::stony()
        }
    }

    /// Override the bulk density (kg/m³).
    pub fn with_density(mut self, density_kg_m3: f64) -> Self {
        self.density_kg_m3 = density_kg_m3;
        self
    }

    /// Override the geometric albedo.
    pub fn with_albedo(mut self, albedo: f64) -> Self {
        self.albedo = albedo;
        self
    }

    /// Override the impact velocity (m/s).
    pub fn with_impact_velocity(mut self, impact_velocity_m_s: f64) -> Self {
        self.impact_velocity_m_s = impact_velocity_m_s;
        self
    }

    /// Impact velocity in km/s
    pub fn impact_velocity_km_s(&self) -> f64 {
        self.impact_velocity_m_s / METERS_PER_KM
    }
}

/// Geographic point of impact in WGS84 degrees.
///
/// Carried through the pipeline as a label only; the estimator never reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}
