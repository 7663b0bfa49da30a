//! Thin input adapter for sensor packages
//!
//! The core dispatch contract takes `(tag, data)` pairs; this adapter
//! supplies them, either as the fixed demo batch or deserialized from a JSON
//! file holding an array of `["TAG", [..numbers..]]` entries. Reading real
//! sensor feeds stays outside the calculator itself.

use std::fs;

use anyhow::{Context, Result};

/// One raw sensor package: workout tag plus positional numeric fields
pub type SensorPackage = (String, Vec<f64>);

/// Fixed demo batch mirroring the reference session
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        ("SWM".to_string(), vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN".to_string(), vec![15000.0, 1.0, 75.0]),
        ("WLK".to_string(), vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load a batch of packages from a JSON file
pub fn load_packages(path: &str) -> Result<Vec<SensorPackage>> {
    let raw = fs::read_to_string(path).context("Reading package file")?;
    parse_packages(&raw)
}

fn parse_packages(raw: &str) -> Result<Vec<SensorPackage>> {
    serde_json::from_str(raw).context("Parsing package JSON")
}
