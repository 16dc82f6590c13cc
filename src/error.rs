//! Error types for the contrast_pair library

use thiserror::Error;

/// Result type alias for contrast_pair operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors raised while extracting a color pair
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Generic processing error
    #[error("Processing error: {message}")]
    ProcessingError { message: String },

    /// Malformed `0xAARRGGBB` color string
    #[error("Invalid color string: {value}")]
    InvalidColor { value: String },
}

impl ExtractionError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for display
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::ImageLoadError { .. } => {
                "Could not load the image. Please check the path and file format.".to_string()
            }
            ExtractionError::ConfigError { .. } => {
                "Could not use the configuration file. Please check that it is valid JSON.".to_string()
            }
            ExtractionError::InvalidParameter { parameter, value } => {
                format!("The value {} is not accepted for {}.", value, parameter)
            }
            ExtractionError::ProcessingError { .. } => {
                "Color extraction failed. Please try with a different image.".to_string()
            }
            ExtractionError::InvalidColor { value } => {
                format!("'{}' is not a 0xAARRGGBB color.", value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_load_message_includes_context() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ExtractionError::image_load("Failed to open image file: a.png (missing)", io);

        assert_eq!(
            err.to_string(),
            "Failed to load image: Failed to open image file: a.png (missing)"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = ExtractionError::invalid_parameter("quantization.step", 0);
        assert_eq!(err.to_string(), "Invalid parameter: quantization.step = 0");
        assert!(err.user_message().contains("quantization.step"));
    }
}
