//! Damage assessment request/response contract.
//!
//! The narrative assessment comes from a generative text model that lives
//! outside this crate. This module owns everything deterministic around it:
//! - building and validating the request from a simulation
//! - rendering the prompt text
//! - parsing and validating the structured response
//!
//! The model itself is reached through the [`AssessmentModel`] trait.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::impact::{DomainError, format};
use crate::simulation::{ImpactSimulation, simulate_impact_with};
use crate::types::{Coordinates, PhysicalConstants};

/// Boxed error returned by model backends.
pub type ModelError = Box<dyn StdError + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum AssessmentError {
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("assessment model failed: {0}")]
    Model(#[source] ModelError),

    #[error("malformed assessment response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("invalid assessment response: {0}")]
    InvalidResponse(String),
}

impl AssessmentError {
    /// Message safe to show to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AssessmentError::InvalidInput { .. } | AssessmentError::Domain(_) => {
                "Invalid input data provided to the server."
            }
            _ => "The AI model failed to assess damage. Please try again.",
        }
    }
}

/// Input to the damage assessment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    /// WGS84 latitude of the impact (deg).
    pub latitude: f64,
    /// WGS84 longitude of the impact (deg).
    pub longitude: f64,
    /// Impactor mass (kg).
    #[serde(rename = "meteoriteSizeInKilograms")]
    pub meteorite_size_kg: f64,
    /// Radius around the impact point to assess (km).
    #[serde(rename = "radiusInKilometers")]
    pub radius_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asteroid_name: Option<String>,
}

impl AssessmentRequest {
    pub fn new(coords: Coordinates, meteorite_size_kg: f64, radius_km: f64) -> Self {
        Self {
            latitude: coords.lat,
            longitude: coords.lng,
            meteorite_size_kg,
            radius_km,
            asteroid_name: None,
        }
    }

    /// Assess the blast radius of a simulated impact.
    pub fn from_simulation(simulation: &ImpactSimulation) -> Self {
        Self {
            asteroid_name: Some(simulation.asteroid_name.clone()),
            ..Self::new(
                simulation.impact_coords,
                simulation.results.mass_kg,
                simulation.results.blast_radius_km,
            )
        }
    }

    /// Check every field is finite and in range.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        let checks = [
            (
                "latitude",
                self.latitude,
                (-90.0..=90.0).contains(&self.latitude),
            ),
            (
                "longitude",
                self.longitude,
                (-180.0..=180.0).contains(&self.longitude),
            ),
            (
                "meteorite size",
                self.meteorite_size_kg,
                self.meteorite_size_kg >= 0.0 && self.meteorite_size_kg.is_finite(),
            ),
            (
                "radius",
                self.radius_km,
                self.radius_km > 0.0 && self.radius_km.is_finite(),
            ),
        ];

        // Range checks above are false for NaN, so NaN is rejected too
        for (field, value, ok) in checks {
            if !ok {
                return Err(AssessmentError::InvalidInput { field, value });
            }
        }
        Ok(())
    }

    /// Render the request as prompt text for the model.
    ///
    /// Mass and radius use the same formatters as the metrics display so the
    /// narrative quotes exactly what the report table shows.
    pub fn prompt(&self) -> String {
        let subject = match &self.asteroid_name {
            Some(name) => format!("the asteroid {name}"),
            None => "a meteorite".to_string(),
        };

        let risk_levels = quoted_list(RiskLevel::ALL.iter().map(RiskLevel::as_str));
        let icons = ImpactIcon::ALL
            .iter()
            .map(|icon| format!("\"{}\" for {}", icon.as_str(), icon.meaning()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "You are an expert in assessing the damage caused by meteorite impacts.\n\
             \n\
             Impact of {subject} at latitude {lat:.4}, longitude {lng:.4}. \
             Impactor mass: {mass} kilograms. \
             Assess the damage within {radius} kilometers of the impact point.\n\
             \n\
             Respond with a JSON object containing:\n\
             1. \"summary\": the estimated damage, considering population density, \
             infrastructure and environment, including seismic activity, air blast \
             and thermal radiation.\n\
             2. \"craterDiameterKm\": the estimated crater diameter in kilometers.\n\
             3. \"funFact\": an educational comparison that puts the scale in context.\n\
             4. \"riskLevel\": one of {risk_levels}.\n\
             5. \"icon\": one of {icons}.\n",
            lat = self.latitude,
            lng = self.longitude,
            mass = format::scientific(self.meteorite_size_kg, 2),
            radius = format::fixed(self.radius_km, 2),
        )
    }
}

fn quoted_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Risk classification of an impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Catastrophic,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Catastrophic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Catastrophic => "Catastrophic",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon summarizing the scale of the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactIcon {
    Mountain,
    Building2,
    Landmark,
    Bomb,
}

impl ImpactIcon {
    pub const ALL: [ImpactIcon; 4] = [
        ImpactIcon::Mountain,
        ImpactIcon::Building2,
        ImpactIcon::Landmark,
        ImpactIcon::Bomb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactIcon::Mountain => "Mountain",
            ImpactIcon::Building2 => "Building2",
            ImpactIcon::Landmark => "Landmark",
            ImpactIcon::Bomb => "Bomb",
        }
    }

    /// What scale of event the icon stands for.
    pub fn meaning(&self) -> &'static str {
        match self {
            ImpactIcon::Mountain => "a huge geological impact",
            ImpactIcon::Building2 => "city-level damage",
            ImpactIcon::Landmark => "a significant but localized event",
            ImpactIcon::Bomb => "an immense energy release",
        }
    }
}

impl fmt::Display for ImpactIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured narrative assessment returned by the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageAssessment {
    pub summary: String,
    pub fun_fact: String,
    pub crater_diameter_km: f64,
    pub risk_level: RiskLevel,
    pub icon: ImpactIcon,
}

impl DamageAssessment {
    /// Parse a model response.
    ///
    /// Models often wrap JSON in prose or code fences, so only the outermost
    /// `{ ... }` span is decoded.
    pub fn from_response(text: &str) -> Result<Self, AssessmentError> {
        let json = match (text.find('{'), text.rfind('}')) {
            (Some(start), Some(end)) if start < end => &text[start..=end],
            _ => text,
        };

        let assessment: DamageAssessment =
            serde_json::from_str(json).map_err(AssessmentError::MalformedResponse)?;
        assessment.validate()?;
        Ok(assessment)
    }

    fn validate(&self) -> Result<(), AssessmentError> {
        if self.summary.trim().is_empty() {
            return Err(AssessmentError::InvalidResponse(
                "summary is empty".to_string(),
            ));
        }
        if !self.crater_diameter_km.is_finite() || self.crater_diameter_km < 0.0 {
            return Err(AssessmentError::InvalidResponse(format!(
                "crater diameter {} km is not a finite non-negative number",
                self.crater_diameter_km
            )));
        }
        Ok(())
    }
}

/// A generative text backend.
pub trait AssessmentModel {
    /// Produce a completion for `prompt`.
    fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

impl<F> AssessmentModel for F
where
    F: Fn(&str) -> Result<String, ModelError>,
{
    fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self(prompt)
    }
}

/// Validate the request, query the model and parse its answer.
pub fn assess_impact(
    model: &impl AssessmentModel,
    request: &AssessmentRequest,
) -> Result<DamageAssessment, AssessmentError> {
    if let Err(e) = request.validate() {
        warn!("Rejected assessment request: {e}");
        return Err(e);
    }

    let prompt = request.prompt();
    debug!("Requesting assessment ({} prompt bytes)", prompt.len());

    let response = model.generate(&prompt).map_err(AssessmentError::Model)?;
    DamageAssessment::from_response(&response)
}

/// Assess a simulated impact within its blast radius.
pub fn assess_simulation(
    model: &impl AssessmentModel,
    simulation: &ImpactSimulation,
) -> Result<DamageAssessment, AssessmentError> {
    assess_impact(model, &AssessmentRequest::from_simulation(simulation))
}

/// Simulate an impact from its absolute magnitude, then assess it.
///
/// Estimator failures surface as [`AssessmentError::Domain`] before the model
/// is queried.
pub fn assess_magnitude(
    model: &impl AssessmentModel,
    asteroid_name: &str,
    absolute_magnitude: f64,
    coords: Coordinates,
    constants: &PhysicalConstants,
) -> Result<(ImpactSimulation, DamageAssessment), AssessmentError> {
    let simulation = simulate_impact_with(asteroid_name, absolute_magnitude, coords, constants)?;
    let assessment = assess_simulation(model, &simulation)?;
    Ok((simulation, assessment))
}
