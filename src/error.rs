//! Error types for strict struct construction and assignment.

use crate::value::ValueKind;
use thiserror::Error;

/// Result type alias for sugars_struct operations
pub type Result<T> = std::result::Result<T, StructError>;

/// Misuse of a [`StructBase`](crate::StructBase) type.
///
/// Both variants are programmer errors. They are returned to the immediate
/// caller and never retried; a failed `construct` produces no instance and a
/// failed `assign` leaves the instance as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructError {
    /// A field name outside the type's declared field set was supplied
    #[error("creation of dynamic property `{type_name}::{field}` is not allowed")]
    UndeclaredField {
        /// Name of the concrete type
        type_name: &'static str,
        /// The offending field name, as supplied
        field: String,
    },

    /// A supplied value does not fit the declared type of its field
    #[error(
        "cannot assign {actual} to property `{type_name}::{field}` of type `{expected}`: {reason}"
    )]
    TypeMismatch {
        /// Name of the concrete type
        type_name: &'static str,
        /// The declared field that received the value
        field: &'static str,
        /// Declared type of the field
        expected: &'static str,
        /// Shape of the supplied value
        actual: ValueKind,
        /// Decoder message
        reason: String,
    },
}

impl StructError {
    /// The field name the error refers to.
    pub fn field(&self) -> &str {
        match self {
            StructError::UndeclaredField { field, .. } => field.as_str(),
            StructError::TypeMismatch { field, .. } => *field,
        }
    }

    /// The concrete type the error refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            StructError::UndeclaredField { type_name, .. }
            | StructError::TypeMismatch { type_name, .. } => *type_name,
        }
    }

    /// Whether this is an [`StructError::UndeclaredField`].
    pub fn is_undeclared(&self) -> bool {
        matches!(self, StructError::UndeclaredField { .. })
    }

    /// Whether this is a [`StructError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, StructError::TypeMismatch { .. })
    }
}
