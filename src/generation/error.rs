//! Error types and handling
//!
//! This module contains the error taxonomy for document generation.

use thiserror::Error;

use crate::types::PackagingLevel;

/// Errors that can occur while generating an EPCIS document
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A required identifier field is empty or a placeholder
    #[error("Configuration incomplete: {field} is required")]
    ConfigurationIncomplete {
        /// Name of the missing field
        field: String,
    },

    /// An identifier field holds characters its GS1 key segment cannot carry
    #[error("Invalid {field}: '{value}' is not a valid GS1 key segment")]
    InvalidIdentifier {
        /// Name of the offending field
        field: String,
        /// Value as supplied
        value: String,
    },

    /// A serial pool does not match the count implied by the hierarchy
    #[error("Serial pool size mismatch for {level}: expected {expected}, got {actual}")]
    PoolSizeMismatch {
        /// Packaging level whose pool is wrong
        level: PackagingLevel,
        /// Count implied by the packaging configuration
        expected: usize,
        /// Number of serials supplied
        actual: usize,
    },

    /// Internal tree construction invariant violated
    #[error("Document assembly failed: {0}")]
    AssemblyError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GenerationError {
    /// Create a configuration incomplete error
    pub fn configuration_incomplete(field: impl Into<String>) -> Self {
        Self::ConfigurationIncomplete { field: field.into() }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier { field: field.into(), value: value.into() }
    }

    /// Create a pool size mismatch error
    pub fn pool_size_mismatch(level: PackagingLevel, expected: usize, actual: usize) -> Self {
        Self::PoolSizeMismatch { level, expected, actual }
    }

    /// Create an assembly error
    pub fn assembly_error(msg: impl Into<String>) -> Self {
        Self::AssemblyError(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// The engine is pure, so repeating a call with the same inputs fails the
    /// same way. Only the I/O edges are worth retrying.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GenerationError::ConfigurationIncomplete { .. } => false,
            GenerationError::InvalidIdentifier { .. } => false,
            GenerationError::PoolSizeMismatch { .. } => false,
            GenerationError::AssemblyError(_) => false,
            GenerationError::IoError(_) => true,
            GenerationError::SerializationError(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            GenerationError::ConfigurationIncomplete { .. } => "Configuration",
            GenerationError::InvalidIdentifier { .. } => "Configuration",
            GenerationError::PoolSizeMismatch { .. } => "Serial Pool",
            GenerationError::AssemblyError(_) => "Assembly",
            GenerationError::IoError(_) => "IO",
            GenerationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
