//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("malformed config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("map request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("map error: {0}")]
    Map(#[from] gaiamap::Error),

    #[error("rendering failed")]
    Render(#[from] std::fmt::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = AppError::Config("size must be positive".into());
        assert!(e.to_string().contains("size must be positive"));
    }

    #[test]
    fn map_error_converts() {
        let e: AppError = gaiamap::Error::UnknownPreset("5p".into()).into();
        assert!(e.to_string().starts_with("map error"));
        assert!(e.to_string().contains("5p"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
    }
}
