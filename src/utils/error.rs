use crate::domain::model::SerialNumber;
use thiserror::Error;

/// Rejection of a single `Container::load` call. The container is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Container {serial} overfilled: requested {requested}, max: {limit}")]
    Overfill {
        serial: SerialNumber,
        limit: f64,
        requested: f64,
    },

    #[error("Container {serial} cannot take a load of {mass}")]
    InvalidMass { serial: SerialNumber, mass: f64 },
}

impl LoadError {
    pub fn serial(&self) -> &SerialNumber {
        match self {
            LoadError::Overfill { serial, .. } | LoadError::InvalidMass { serial, .. } => serial,
        }
    }
}

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FleetError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FleetError::IoError(e) => format!("Could not read input: {}", e),
            FleetError::SerializationError(e) => format!("Could not render output: {}", e),
            FleetError::ConfigError { message } => format!("Scenario is invalid: {}", message),
            FleetError::MissingConfigError { field } => {
                format!("Scenario is missing '{}'", field)
            }
            FleetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Scenario field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FleetError::IoError(_) => "Check that the scenario file exists and is readable",
            FleetError::SerializationError(_) => "Retry without --json",
            FleetError::ConfigError { .. }
            | FleetError::MissingConfigError { .. }
            | FleetError::InvalidConfigValueError { .. } => {
                "Fix the scenario file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
