//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::{clamp_convergence_margin, clamp_max_iterations, clamp_step_size};
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [solver] section
    if let Some(section) = ini.section(Some("solver")) {
        if let Some(v) = section.get("max_iterations") {
            let iterations: u32 = v.trim().parse().map_err(|_| invalid(
                "solver",
                "max_iterations",
                v,
                "must be a positive integer",
            ))?;
            config.solver.max_iterations = clamp_max_iterations(iterations);
        }
        if let Some(v) = section.get("step_size") {
            let step = parse_positive_float("solver", "step_size", v)?;
            config.solver.step_size = clamp_step_size(step);
        }
        if let Some(v) = section.get("convergence_margin") {
            let margin = parse_positive_float("solver", "convergence_margin", v)?;
            config.solver.convergence_margin = clamp_convergence_margin(margin);
        }
    }

    // [border] section
    if let Some(section) = ini.section(Some("border")) {
        if let Some(v) = section.get("path") {
            let v = v.trim();
            if !v.is_empty() {
                config.border.path = Some(expand_tilde(v));
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn parse_positive_float(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(invalid(section, key, value, "must be a positive number")),
    }
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
