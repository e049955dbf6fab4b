//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use neosentinel::impact::{ImpactMetrics, calculate_impact_metrics};

/// Catalog document shaped like the bundled dataset export.
pub const CATALOG_JSON: &str = r#"{
    "asteroids": [
        {
            "full_name": "     1 Ceres (A801 AA)",
            "a": 2.766, "e": 0.0785, "i": 10.59, "om": 80.25, "w": 73.3,
            "q": 2.549, "ad": 2.983, "per_y": 4.6, "data_arc": 80493,
            "condition_code": 0, "n_obs_used": 7600,
            "n_del_obs_used": null, "n_dop_obs_used": null,
            "H": 3.33, "neo": "N", "pha": "N"
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
            "full_name": "  (2013 TV135)",
            "a": 1.358, "e": 0.3741, "i": 6.884, "om": 15.67, "w": 175.9,
            "q": 0.850, "ad": 1.866, "per_y": 1.58, "data_arc": 11,
            "condition_code": 7, "n_obs_used": 106,
            "n_del_obs_used": null, "n_dop_obs_used": null,
            "H": 19.4, "neo": "Y", "pha": "Y"
        },
        {
            "full_name": "  (2023 CX1)",
            "a": 1.112, "e": 0.1829, "i": 3.418, "om": 313.5, "w": 252.6,
            "q": 0.9085, "ad": 1.315, "per_y": 1.17, "data_arc": 1,
            "condition_code": 7, "n_obs_used": 55,
            "n_del_obs_used": null, "n_dop_obs_used": null,
            "H": 32.8, "neo": "Y", "pha": "N"
        }
    ]
}"#;

/// Write `contents` to a uniquely named file in the system temp directory.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "neosentinel-{}-{}-{name}",
        std::process::id(),
        name.len()
    ));
    std::fs::write(&path, contents).expect("failed to write temp file");
    path
}

/// Metrics over an evenly spaced range of magnitudes.
pub fn sweep(start: f64, end: f64, steps: usize) -> Vec<ImpactMetrics> {
    (0..=steps)
        .map(|i| start + (end - start) * i as f64 / steps as f64)
        .map(|h| calculate_impact_metrics(h).expect("valid magnitude"))
        .collect()
}

/// Assert a sequence is strictly decreasing.
pub fn assert_strictly_decreasing(label: &str, values: &[f64]) {
    for pair in values.windows(2) {
        assert!(
            pair[1] < pair[0],
            "{label} not strictly decreasing: {:e} then {:e}",
            pair[0],
            pair[1]
        );
    }
}
