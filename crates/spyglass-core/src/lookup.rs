//! # Member Lookup
//!
//! Locate a single field or method on a type by a partial set of criteria.
//!
//! Every criterion is optional; an absent criterion matches anything. The
//! convenience functions fix one criterion and delegate to the general form
//! without adding logic of their own.
//!
//! ## Matching rules
//!
//! - [`find_field`]: first field in declaration order whose name equals
//!   `name` and whose type name is **different from** `type_name`. The
//!   inverted type comparison is long-standing behaviour that callers rely
//!   on; use [`find_field_exact_type`] for an exact type match.
//! - [`find_field_exact_type`]: **last** field whose type equals `ty`.
//! - [`find_method`]: first method matching name, return type name and the
//!   exact ordered list of parameter type names.

use tracing::trace;

use crate::types::{FieldDescriptor, MethodDescriptor, TypeDescriptor, TypeRef};

/// Find a declared field by name and (inverted) type name.
///
/// A field matches when `name` is `None` or equal to the field name, and
/// `type_name` is `None` or **not equal** to the field's type name. The
/// first match is returned with its visibility override set.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::lookup::find_field;
/// use spyglass_core::types::{FieldDescriptor, TypeDescriptor, TypeRef};
///
/// let ty = TypeDescriptor::new(TypeRef::new("Pair"))
///     .field(FieldDescriptor::new("left", TypeRef::new("int")))
///     .field(FieldDescriptor::new("right", TypeRef::new("String")));
///
/// assert_eq!(find_field(&ty, Some("left"), None).unwrap().name(), "left");
/// // Type names are compared with inverted polarity.
/// assert_eq!(find_field(&ty, None, Some("int")).unwrap().name(), "right");
/// ```
pub fn find_field(ty: &TypeDescriptor, name: Option<&str>, type_name: Option<&str>) -> Option<FieldDescriptor>
{
    for field in ty.fields() {
        if name.is_some_and(|n| n != field.name()) {
            continue;
        }
        if type_name.is_some_and(|t| t == field.declared_type().name()) {
            continue;
        }

        trace!(field = field.name(), owner = %ty.type_ref(), "field lookup matched");
        let mut found = field.clone();
        found.set_accessible(true);
        return Some(found);
    }

    None
}

/// Find a declared field by name only.
pub fn find_field_by_name(ty: &TypeDescriptor, name: &str) -> Option<FieldDescriptor>
{
    find_field(ty, Some(name), None)
}

/// Find a declared field by type, with [`find_field`]'s inverted type
/// comparison: this returns the first field whose type is *not* `field_type`.
pub fn find_field_by_type(ty: &TypeDescriptor, field_type: &TypeRef) -> Option<FieldDescriptor>
{
    find_field(ty, None, Some(field_type.name()))
}

/// Find the **last** field in `fields` whose type is exactly `ty` and whose
/// name equals `name` (when given).
///
/// Unlike [`find_field`] the scan always runs to the end, so a later match
/// replaces an earlier one.
pub fn find_field_exact_type(fields: &[FieldDescriptor], name: Option<&str>, ty: &TypeRef) -> Option<FieldDescriptor>
{
    let mut found = None;
    for field in fields {
        if field.declared_type() == ty && name.is_none_or(|n| n == field.name()) {
            found = Some(field);
        }
    }

    found.map(|field| {
        let mut field = field.clone();
        field.set_accessible(true);
        field
    })
}

/// Find a declared method by name, return type name and parameter type
/// names.
///
/// `parameter_type_names` must match the method's parameter list exactly:
/// same length and the same name at every position.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::lookup::find_method;
/// use spyglass_core::types::{MethodDescriptor, TypeDescriptor, TypeRef};
///
/// let int = TypeRef::new("int");
/// let ty = TypeDescriptor::new(TypeRef::new("Calc"))
///     .method(MethodDescriptor::new("add", int.clone(), [int.clone(), int.clone()]))
///     .method(MethodDescriptor::new("add", int.clone(), [int.clone(), int.clone(), int.clone()]));
///
/// let found = find_method(&ty, Some("add"), None, Some(&["int", "int", "int"][..])).unwrap();
/// assert_eq!(found.parameter_types().len(), 3);
/// assert!(find_method(&ty, Some("add"), None, Some(&["int"][..])).is_none());
/// ```
pub fn find_method(
    ty: &TypeDescriptor,
    name: Option<&str>,
    return_type_name: Option<&str>,
    parameter_type_names: Option<&[&str]>,
) -> Option<MethodDescriptor>
{
    let found = ty.methods().iter().find(|method| {
        name.is_none_or(|n| n == method.name())
            && return_type_name.is_none_or(|r| r == method.return_type().name())
            && parameter_type_names.is_none_or(|params| parameters_match(method, params))
    })?;

    trace!(method = found.name(), owner = %ty.type_ref(), "method lookup matched");
    Some(found.clone())
}

/// Find a declared method by name only.
pub fn find_method_by_name(ty: &TypeDescriptor, name: &str) -> Option<MethodDescriptor>
{
    find_method(ty, Some(name), None, None)
}

/// Find a declared method by return type.
pub fn find_method_by_return_type(ty: &TypeDescriptor, return_type: &TypeRef) -> Option<MethodDescriptor>
{
    find_method(ty, None, Some(return_type.name()), None)
}

/// Find a declared method by its exact parameter types.
pub fn find_method_by_parameters(ty: &TypeDescriptor, parameter_types: &[TypeRef]) -> Option<MethodDescriptor>
{
    let names: Vec<&str> = parameter_types.iter().map(TypeRef::name).collect();
    find_method(ty, None, None, Some(names.as_slice()))
}

fn parameters_match(method: &MethodDescriptor, names: &[&str]) -> bool
{
    let params = method.parameter_types();
    params.len() == names.len() && params.iter().zip(names).all(|(param, name)| param.name() == *name)
}
