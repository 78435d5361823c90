//! The reflection capability.
//!
//! Rust has no runtime reflection, so a host opts its types in by
//! implementing two traits:
//!
//! - [`Value`]: anything that can be stored in a field. It knows its runtime
//!   type and renders itself through `Display`.
//! - [`Reflect`]: an object with declared fields and methods that can be read
//!   and written by descriptor.
//!
//! Values travel as `Arc<dyn Value>` so one value can be stored into several
//! fields. An absent (null) value is `None`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{FieldDescriptor, TypeDescriptor, TypeRef};
use crate::error::SpyglassResult;

/// A runtime value with a known type.
///
/// The `Display` output is the value's rendering in dumps and assignment
/// records.
pub trait Value: fmt::Display + Send + Sync
{
    /// Runtime type of this value.
    fn type_ref(&self) -> TypeRef;

    /// Upcast for hosts that need to downcast a value to a concrete type
    /// inside `set_field`.
    fn as_any(&self) -> &dyn Any;
}

/// Reflection access to an object's directly declared members.
///
/// Implementations must not walk supertypes: `descriptor()` lists only what
/// the object's own type declares, in declaration order. The descriptor is
/// rebuilt on every call.
///
/// ## Access control
///
/// `get_field` and `set_field` receive the caller's descriptor, including
/// its visibility override. Implementations should start with
/// [`FieldDescriptor::check_access`] and may refuse access for their own
/// reasons too; both cases are reported as
/// [`SpyglassError::AccessDenied`](crate::error::SpyglassError::AccessDenied).
pub trait Reflect: Value
{
    /// Declared members of this object's runtime type.
    fn descriptor(&self) -> TypeDescriptor;

    /// Read a field. `Ok(None)` is a null value.
    ///
    /// ## Errors
    ///
    /// - `AccessDenied`: the field may not be read
    /// - `UnknownField`: the descriptor is not one of this object's fields
    fn get_field(&self, field: &FieldDescriptor) -> SpyglassResult<Option<Arc<dyn Value>>>;

    /// Store `value` into a field.
    ///
    /// ## Errors
    ///
    /// - `AccessDenied`: the field may not be written
    /// - `UnknownField`: the descriptor is not one of this object's fields
    /// - `TypeMismatch`: the value cannot be held by the field
    fn set_field(&mut self, field: &FieldDescriptor, value: Arc<dyn Value>) -> SpyglassResult<()>;
}

static BUILTIN_TYPES: Lazy<HashMap<&'static str, TypeRef>> = Lazy::new(|| {
    [
        "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
        "f64", "String",
    ]
    .into_iter()
    .map(|name| (name, TypeRef::new(name)))
    .collect()
});

/// Type reference for a built-in value type such as `"i64"` or `"String"`.
///
/// Returns `None` for names that are not built in.
pub fn builtin_type(name: &str) -> Option<TypeRef>
{
    BUILTIN_TYPES.get(name).cloned()
}

macro_rules! impl_builtin_value {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Value for $ty
            {
                fn type_ref(&self) -> TypeRef
                {
                    BUILTIN_TYPES[stringify!($ty)].clone()
                }

                fn as_any(&self) -> &dyn Any
                {
                    self
                }
            }
        )*
    };
}

impl_builtin_value!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String);
