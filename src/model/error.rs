//! Validation errors raised before a record enters the store

use thiserror::Error;

use super::category::Category;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid defName '{def_name}': {reason}")]
    InvalidDefName { def_name: String, reason: String },

    #[error("{category} with defName '{def_name}' already exists")]
    DuplicateDefName { category: Category, def_name: String },

    #[error("{field} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be written as W,H, got '{value}'")]
    InvalidSize { field: &'static str, value: String },

    #[error("unknown {field} '{value}'")]
    UnknownVariant { field: &'static str, value: String },

    #[error("research '{research}' unlocks unknown {category} '{entry}'")]
    UnknownUnlock {
        research: String,
        category: Category,
        entry: String,
    },

    #[error("no {category} at index {index}")]
    IndexOutOfRange { category: Category, index: usize },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
