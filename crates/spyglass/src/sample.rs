//! Built-in object used by the `sample` command.

use spyglass_core::types::{builtin_type, FieldDescriptor, MethodDescriptor, TypeDescriptor, TypeRef, Visibility};
use spyglass_core::{DynamicObject, SpyglassError, SpyglassResult};

fn builtin(name: &str) -> SpyglassResult<TypeRef>
{
    builtin_type(name).ok_or_else(|| SpyglassError::InvalidArgument(format!("unknown builtin type {name}")))
}

/// Declared members of `demo.Session`.
pub fn session_type() -> SpyglassResult<TypeDescriptor>
{
    let string = builtin("String")?;
    let i64_type = builtin("i64")?;
    let bool_type = builtin("bool")?;

    Ok(TypeDescriptor::new(TypeRef::new("demo.Session"))
        .field(FieldDescriptor::new("user", string.clone()))
        .field(FieldDescriptor::new("attempts", i64_type.clone()).with_visibility(Visibility::Private))
        .field(FieldDescriptor::new("timeout_ms", i64_type.clone()).with_visibility(Visibility::Protected))
        .field(FieldDescriptor::new("last_error", TypeRef::object()))
        .method(MethodDescriptor::new("user", string.clone(), []))
        .method(MethodDescriptor::new("retry", TypeRef::root("void"), [i64_type.clone()]))
        .method(
            MethodDescriptor::new("validate", bool_type, [string, i64_type]).with_visibility(Visibility::Private),
        ))
}

/// A `demo.Session` with a few fields filled in.
///
/// `timeout_ms` is sealed, so dumps skip it and assignments leave it alone.
pub fn session() -> SpyglassResult<DynamicObject>
{
    let object = DynamicObject::new(session_type()?)
        .with_value("user", String::from("ada"))?
        .with_value("attempts", 3_i64)?
        .with_value("timeout_ms", 30_000_i64)?;
    Ok(object.seal("timeout_ms"))
}
