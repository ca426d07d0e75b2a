//! Errors that abort generation of a category file

use thiserror::Error;

use crate::model::Category;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("{category} '{def_name}': {field} is not a valid number ('{value}')")]
    InvalidNumber {
        category: Category,
        def_name: String,
        field: &'static str,
        value: String,
    },

    #[error("{category} '{def_name}': {field} is zero, cannot derive {derived}")]
    DivisionByZero {
        category: Category,
        def_name: String,
        field: &'static str,
        derived: &'static str,
    },
}

impl GenerationError {
    /// Category of the record that failed
    pub fn category(&self) -> Category {
        match self {
            GenerationError::InvalidNumber { category, .. }
            | GenerationError::DivisionByZero { category, .. } => *category,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
