//! NeoSentinel - Meteorite Impact Estimator
//!
//! Converts an asteroid's absolute magnitude into impact metrics (size,
//! mass, energy, blast radius, crater and seismic magnitude) and provides
//! the deterministic plumbing around them: catalog lookup, simulation
//! records, damage-assessment requests, the chat assistant's conversation
//! and report tables.

pub mod assessment;
pub mod catalog;
pub mod chat;
pub mod impact;
pub mod report;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;
