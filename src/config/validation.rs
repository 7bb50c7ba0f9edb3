use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Main player cannot be empty
/// - Great serve quantile must lie strictly between 0 and 1
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    main_player: &str,
    great_serve_quantile: f64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if main_player.trim().is_empty() {
        return Err(AppError::config_error("Main player cannot be empty"));
    }

    if !(great_serve_quantile > 0.0 && great_serve_quantile < 1.0) {
        return Err(AppError::config_error(format!(
            "Great serve quantile must be between 0 and 1, got {great_serve_quantile}"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_main_player() {
        assert!(validate_config("  ", 0.85, &None).is_err());
    }

    #[test]
    fn test_quantile_bounds() {
        assert!(validate_config("Nadal R.", 0.85, &None).is_ok());
        assert!(validate_config("Nadal R.", 0.0, &None).is_err());
        assert!(validate_config("Nadal R.", 1.0, &None).is_err());
        assert!(validate_config("Nadal R.", f64::NAN, &None).is_err());
    }

    #[test]
    fn test_log_path() {
        assert!(validate_config("Nadal R.", 0.85, &Some(String::new())).is_err());

        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("app.log");
        let log_path = Some(log_path.to_string_lossy().to_string());
        assert!(validate_config("Nadal R.", 0.85, &log_path).is_ok());
        assert!(temp_dir.path().join("logs").exists());
    }
}
