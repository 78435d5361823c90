//! # Error Types
//!
//! General error handling for introspection operations.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use thiserror::Error;

use crate::types::Visibility;

/// Main error type for introspection operations
///
/// Host [`Reflect`](crate::types::Reflect) implementations report failures
/// with this type, and the [`Introspector`](crate::Introspector) passes them
/// through unchanged, with one exception: [`SpyglassError::AccessDenied`] is
/// swallowed per member while dumping or assigning fields.
///
/// ## Error Categories
///
/// 1. **Access errors**: AccessDenied
/// 2. **Host errors**: TypeMismatch, UnknownField, InvalidArgument
/// 3. **I/O errors**: Io (writing to a sink)
#[derive(Error, Debug)]
pub enum SpyglassError
{
    /// A member could not be read or written because of its visibility
    ///
    /// This happens when:
    /// - A non-public member is accessed through a descriptor whose
    ///   visibility override was never requested
    /// - The host refuses access to the member even with the override
    #[error("Access denied to {visibility} member '{member}'")]
    AccessDenied
    {
        /// Name of the field or method
        member: String,
        /// Declared visibility of the member
        visibility: Visibility,
    },

    /// A value of the wrong type was stored into a field
    ///
    /// The host rejects writes whose runtime value type is not assignable to
    /// the field's declared type.
    #[error("Cannot store {found} into field '{field}' of type {expected}")]
    TypeMismatch
    {
        /// Field that was written
        field: String,
        /// Declared type name of the field
        expected: String,
        /// Runtime type name of the rejected value
        found: String,
    },

    /// The descriptor does not belong to the object it was used on
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Invalid argument passed to an introspection function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error while writing to a sink
    ///
    /// This is a standard Rust `std::io::Error` converted to our error type.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpyglassError
{
    /// Returns `true` for access-control failures, the only kind the
    /// introspector skips over.
    pub fn is_access_denied(&self) -> bool
    {
        matches!(self, SpyglassError::AccessDenied { .. })
    }
}

/// Convenience type alias for `Result<T, SpyglassError>`
///
/// ```rust
/// use spyglass_core::error::SpyglassResult;
/// fn foo() -> SpyglassResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type SpyglassResult<T> = std::result::Result<T, SpyglassError>;
