use thiserror::Error;

/// Result type for application actions.
pub(crate) type Result<T> = std::result::Result<T, AppError>;

/// Error codes for startup and configuration failures. The frame loop itself never fails.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    /// SDL, the video subsystem, the window or the event pump is unavailable.
    #[error("Initialization Failure: {0}")]
    Initialization(String),

    /// An image is missing, corrupt, or could not be turned into a texture.
    #[error("Asset Load Failure [{path}]: {reason}")]
    AssetLoad { path: String, reason: String },

    /// Options that cannot produce a playable area.
    #[error("Invalid Options: {0}")]
    InvalidOptions(String),
}

impl AppError {
    /// Creates an initialization error from any displayable SDL error.
    pub(crate) fn init<E: std::fmt::Display>(why: E) -> Self {
        AppError::Initialization(why.to_string())
    }

    /// Creates an asset load error for `path`.
    pub(crate) fn asset<P, E>(path: P, why: E) -> Self
    where
        P: AsRef<std::path::Path>,
        E: std::fmt::Display,
    {
        AppError::AssetLoad {
            path: path.as_ref().display().to_string(),
            reason: why.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_error_names_the_file() {
        let err = AppError::asset("assets/red.png", "No such file");
        assert_eq!(
            err.to_string(),
            "Asset Load Failure [assets/red.png]: No such file"
        );
    }

    #[test]
    fn init_error_wraps_message() {
        let err = AppError::init("video subsystem unavailable");
        assert_eq!(
            err,
            AppError::Initialization("video subsystem unavailable".to_string())
        );
    }
}
