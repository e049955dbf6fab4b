//! Labeled impact report.
//!
//! Turns a simulation (and optionally its narrative assessment) into rows of
//! label, value and a plain-language explanation. Values are the metrics
//! display strings, unchanged.

use std::fmt;

use serde::Serialize;

use crate::assessment::DamageAssessment;
use crate::impact::format;
use crate::simulation::ImpactSimulation;

/// One line of the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
    pub explanation: &'static str,
}

impl ReportRow {
    fn new(label: &'static str, value: String, explanation: &'static str) -> Self {
        Self {
            label,
            value,
            explanation,
        }
    }
}

/// Report for one simulated impact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImpactReport {
    pub title: String,
    pub rows: Vec<ReportRow>,
    /// Narrative section, present once an assessment has been attached.
    pub narrative: Vec<ReportRow>,
}

impl ImpactReport {
    pub fn from_simulation(simulation: &ImpactSimulation) -> Self {
        let display = &simulation.results.display;
        let coords = simulation.impact_coords;

        let rows = vec![
            ReportRow::new(
                "Asteroid",
                simulation.asteroid_name.clone(),
                "Catalog designation of the impactor.",
            ),
            ReportRow::new(
                "Impact Location",
                format!("{:.4}, {:.4}", coords.lat, coords.lng),
                "Latitude and longitude of the point of impact.",
            ),
            ReportRow::new(
                "Absolute Magnitude (H)",
                format::fixed(simulation.h_magnitude, 2),
                "A measure of intrinsic brightness; lower values mean larger objects.",
            ),
            ReportRow::new(
                "Est. Diameter (m)",
                display.diameter_m.clone(),
                "Size inferred from brightness, assuming a typical surface reflectivity.",
            ),
            ReportRow::new(
                "Est. Mass (kg)",
                display.mass_kg.clone(),
                "Mass of a rocky sphere of that diameter.",
            ),
            ReportRow::new(
                "Impact Velocity (km/s)",
                format::fixed(simulation.v_impact_assumed_km_s, 1),
                "Assumed speed when striking the atmosphere.",
            ),
            ReportRow::new(
                "Kinetic Energy (Mt TNT)",
                display.kinetic_energy_megatons.clone(),
                "Energy released, in millions of tons of TNT.",
            ),
            ReportRow::new(
                "Blast Radius (km)",
                display.blast_radius_km.clone(),
                "Distance within which the air blast causes severe damage.",
            ),
            ReportRow::new(
                "Crater Diameter (km)",
                display.crater_diameter_km.clone(),
                "Rough width of the crater left behind.",
            ),
            ReportRow::new(
                "Est. Seismic Magnitude (Richter)",
                display.seismic_magnitude.clone(),
                "Earthquake of comparable shaking, from a simplified model.",
            ),
        ];

        Self {
            title: format!("Impact Report: {}", simulation.asteroid_name),
            rows,
            narrative: Vec::new(),
        }
    }

    /// Attach the narrative assessment.
    pub fn with_assessment(mut self, assessment: &DamageAssessment) -> Self {
        self.narrative = vec![
            ReportRow::new(
                "Risk Level",
                assessment.risk_level.to_string(),
                "Overall classification of the potential for destruction.",
            ),
            ReportRow::new(
                "Summary",
                assessment.summary.clone(),
                "Estimated damage within the blast radius.",
            ),
            ReportRow::new(
                "Did You Know?",
                assessment.fun_fact.clone(),
                "A comparison that puts the scale in context.",
            ),
        ];
        self
    }

    /// Look up a row by label in either section.
    pub fn row(&self, label: &str) -> Option<&ReportRow> {
        self.rows
            .iter()
            .chain(self.narrative.iter())
            .find(|row| row.label == label)
    }
}

impl fmt::Display for ImpactReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .chain(self.narrative.iter())
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for row in &self.rows {
            writeln!(f, "{:<label_width$}  {}", row.label, row.value)?;
        }

        if !self.narrative.is_empty() {
            writeln!(f)?;
            writeln!(f, "Damage Assessment")?;
            writeln!(f, "-----------------")?;
            for row in &self.narrative {
                writeln!(f, "{:<label_width$}  {}", row.label, row.value)?;
            }
        }
        Ok(())
    }
}
