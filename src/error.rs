//! Errors surfaced by the model catalog.

use std::fmt;

use crate::registry::ModelKind;

/// Errors produced when resolving predefined architectures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The requested name matches none of the registered architectures.
    UnknownModel {
        /// The name as the caller supplied it.
        requested: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownModel { requested } => {
                let valid: Vec<&str> = ModelKind::ALL.iter().map(|kind| kind.name()).collect();
                write!(
                    f,
                    "invalid predefined model `{requested}`, must be one of: {}",
                    valid.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}
