use crate::constants::MAX_HTTP_TIMEOUT_SECONDS;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Output directory cannot be empty
/// - HTTP timeout must be between 1 and `MAX_HTTP_TIMEOUT_SECONDS`
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    output_dir: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if http_timeout_seconds == 0 || http_timeout_seconds > MAX_HTTP_TIMEOUT_SECONDS {
        return Err(AppError::config_error(format!(
            "HTTP timeout must be between 1 and {MAX_HTTP_TIMEOUT_SECONDS} seconds, got {http_timeout_seconds}"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
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
