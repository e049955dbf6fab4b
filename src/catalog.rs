//! Asteroid reference catalog.
//!
//! Records follow the JPL Small-Body Database export used by the web front
//! end. Only the absolute magnitude `H` feeds the impact estimator; the
//! orbital elements are carried for display.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::impact::{self, DomainError, ImpactMetrics};
use crate::simulation::{self, ImpactSimulation};
use crate::types::{Coordinates, METERS_PER_KM, PhysicalConstants};

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown asteroid '{0}'")]
    UnknownAsteroid(String),
}

/// Yes/no flag as encoded in the database export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "Y")]
    Yes,
    #[default]
    #[serde(rename = "N")]
    No,
}

impl Flag {
    pub fn is_set(self) -> bool {
        self == Flag::Yes
    }
}

/// One catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    /// Designation including number and provisional name, as exported.
    pub full_name: String,
    /// Semi-major axis (AU).
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination (deg).
    pub i: f64,
    /// Longitude of the ascending node (deg).
    pub om: f64,
    /// Argument of perihelion (deg).
    pub w: f64,
    /// Perihelion distance (AU).
    pub q: f64,
    /// Aphelion distance (AU).
    pub ad: f64,
    /// Orbital period (years).
    pub per_y: f64,
    /// Observation arc (days).
    pub data_arc: f64,
    /// Orbit uncertainty, 0 (best) to 9.
    pub condition_code: u8,
    pub n_obs_used: u32,
    pub n_del_obs_used: Option<u32>,
    pub n_dop_obs_used: Option<u32>,
    /// Absolute magnitude.
    #[serde(rename = "H")]
    pub h: f64,
    /// Near-Earth object.
    pub neo: Flag,
    /// Potentially hazardous asteroid.
    pub pha: Flag,
}

impl Asteroid {
    /// Name without the column padding of the export.
    pub fn name(&self) -> &str {
        self.full_name.trim()
    }

    pub fn is_neo(&self) -> bool {
        self.neo.is_set()
    }

    pub fn is_hazardous(&self) -> bool {
        self.pha.is_set()
    }

    /// Impact metrics for this asteroid under the default assumptions.
    pub fn impact_metrics(&self) -> Result<ImpactMetrics, DomainError> {
        impact::calculate_impact_metrics(self.h)
    }

    /// Simulate this asteroid striking `coords`.
    pub fn simulate_impact(
        &self,
        coords: Coordinates,
        constants: &PhysicalConstants,
    ) -> Result<ImpactSimulation, DomainError> {
        simulation::simulate_impact_with(self.name(), self.h, coords, constants)
    }
}

/// Size bins of the near-Earth asteroid discovery statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SizeClass {
    /// Under 30 m.
    Tiny,
    /// 30 m to 100 m.
    Small,
    /// 100 m to 300 m.
    Medium,
    /// 300 m to 1 km.
    Large,
    /// 1 km and above.
    Giant,
}

impl SizeClass {
    pub const ALL: [SizeClass; 5] = [
        SizeClass::Tiny,
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::Giant,
    ];

    /// Bin for a diameter in meters. Lower bounds are inclusive.
    pub fn from_diameter_m(diameter_m: f64) -> Self {
        if diameter_m < 30.0 {
            SizeClass::Tiny
        } else if diameter_m < 100.0 {
            SizeClass::Small
        } else if diameter_m < 300.0 {
            SizeClass::Medium
        } else if diameter_m < METERS_PER_KM {
            SizeClass::Large
        } else {
            SizeClass::Giant
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Tiny => "0-30m",
            SizeClass::Small => "30-100m",
            SizeClass::Medium => "100-300m",
            SizeClass::Large => "300m-1km",
            SizeClass::Giant => "1km+",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts per [`SizeClass`], in bin order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeDistribution {
    counts: [usize; 5],
}

impl SizeDistribution {
    pub fn count(&self, class: SizeClass) -> usize {
        self.counts[class as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SizeClass, usize)> + '_ {
        SizeClass::ALL.into_iter().zip(self.counts.iter().copied())
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    asteroids: Vec<Asteroid>,
}

/// In-memory asteroid catalog.
#[derive(Clone, Debug, Default)]
pub struct AsteroidCatalog {
    asteroids: Vec<Asteroid>,
}

impl AsteroidCatalog {
    pub fn new(asteroids: Vec<Asteroid>) -> Self {
        Self { asteroids }
    }

    /// Load a catalog document (`{ "asteroids": [...] }`) from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_json(&text)?;
        info!("Loaded {} asteroids from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        debug!("Parsed catalog with {} records", document.asteroids.len());
        Ok(Self::new(document.asteroids))
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter()
    }

    /// Look up by full name, ignoring surrounding whitespace on both sides.
    pub fn find(&self, full_name: &str) -> Option<&Asteroid> {
        let wanted = full_name.trim();
        self.asteroids.iter().find(|a| a.name() == wanted)
    }

    /// Like [`find`](Self::find), but an unknown name is an error.
    pub fn get(&self, full_name: &str) -> Result<&Asteroid, CatalogError> {
        self.find(full_name)
            .ok_or_else(|| CatalogError::UnknownAsteroid(full_name.trim().to_string()))
    }

    /// Potentially hazardous asteroids only.
    pub fn hazardous(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| a.is_hazardous())
    }

    /// Histogram of estimated diameters under the default albedo.
    ///
    /// Records whose magnitude cannot be converted are skipped.
    pub fn size_distribution(&self) -> SizeDistribution {
        let albedo = PhysicalConstants::default().albedo;
        let mut distribution = SizeDistribution::default();
        for asteroid in &self.asteroids {
            match impact::diameter_km(asteroid.h, albedo) {
                Ok(d_km) => {
                    let class = SizeClass::from_diameter_m(d_km * METERS_PER_KM);
                    distribution.counts[class as usize] += 1;
                }
                Err(e) => debug!("Skipping {}: {e}", asteroid.name()),
            }
        }
        distribution
    }
}

impl<'a> IntoIterator for &'a AsteroidCatalog {
    type Item = &'a Asteroid;
    type IntoIter = std::slice::Iter<'a, Asteroid>;

    fn into_iter(self) -> Self::IntoIter {
        self.asteroids.iter()
    }
}
