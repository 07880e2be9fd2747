//! Error types for the colorwell library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for colorwell operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Errors raised at the boundaries of the color core.
///
/// Aggregate computations (ΔE matrices, accessibility reports) never return
/// these; they degrade to sentinel values instead.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Hex string or RGB channel values could not be interpreted as a color
    #[error("Invalid color format '{input}': {reason}")]
    InvalidColorFormat { input: String, reason: String },

    /// A mixing operation received fewer colors than it needs
    #[error("Insufficient colors: at least {required} required, got {actual}")]
    InsufficientColors { required: usize, actual: usize },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration I/O failed for {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration content is not valid JSON for the expected schema
    #[error("Configuration format error: {source}")]
    ConfigFormat {
        #[from]
        source: serde_json::Error,
    },
}

impl PaletteError {
    /// Create an invalid color error with context
    pub fn invalid_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error, rendering the offending value
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration I/O error with the path involved
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Check if the caller can recover by correcting its input and retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::InvalidColorFormat { .. }
                | PaletteError::InsufficientColors { .. }
                | PaletteError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidColorFormat { input, .. } => {
                format!("'{}' is not a valid color. Use a hex code such as #FF0000 or #F00.", input)
            }
            PaletteError::InsufficientColors { required, .. } => {
                format!("Select at least {} colors to mix.", required)
            }
            PaletteError::InvalidParameter { parameter, .. } => {
                format!("The value for '{}' is out of range.", parameter)
            }
            _ => "Could not load palette settings. Default settings will be used.".to_string(),
        }
    }
}
