//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let border_path = config
        .border
        .path
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[solver]
; Newton iterations before the segment solver falls back to endpoints (1-100)
max_iterations = {}
; Finite-difference step in segment-fraction units
step_size = {}
; Successive iterates closer than this are treated as converged
convergence_margin = {}

[border]
; Border file used by `borderdist query` and `borderdist batch` when --border is omitted.
; Either GeoJSON (Polygon / MultiPolygon / Feature / FeatureCollection) or a
; segment list written by `borderdist build`.
path = {}

[logging]
file = {}
"#,
        config.solver.max_iterations,
        config.solver.step_size,
        config.solver.convergence_margin,
        border_path,
        path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.solver.max_iterations = 30;
        config.solver.step_size = 0.002;
        config.border.path = Some(PathBuf::from("/srv/borders/segments.json"));

        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, ConfigFile::default());
    }

    #[test]
    fn test_written_file_is_commented() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("[solver]"));
        assert!(content.contains("max_iterations = 15"));
        assert!(content.contains("; Newton iterations"));
    }
}
