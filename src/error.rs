use thiserror::Error;

/// mkdesktop error types
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("failed to write desktop entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mkdesktop operations
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_usage() {
        let err = LauncherError::Usage("name and exec must be non-empty".to_string());
        assert_eq!(
            err.to_string(),
            "usage error: name and exec must be non-empty"
        );
    }

    #[test]
    fn test_error_display_io() {
        let err = LauncherError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such directory",
        ));
        assert_eq!(
            err.to_string(),
            "failed to write desktop entry: no such directory"
        );
    }
}
