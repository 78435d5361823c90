//! Field, method and type descriptors.
//!
//! Descriptors are plain metadata produced by the host for a single call.
//! They carry the declared visibility of a member plus an `accessible` flag,
//! which is the visibility override: the introspector sets it on its own
//! copy before reading or writing through the descriptor.

use std::fmt;

use smallvec::SmallVec;

use super::TypeRef;
use crate::error::{SpyglassError, SpyglassResult};

/// Declared visibility of a field or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility
{
    /// Accessible from anywhere.
    #[default]
    Public,
    /// Accessible from the type and its subtypes.
    Protected,
    /// Accessible from the declaring type only.
    Private,
}

impl fmt::Display for Visibility
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let label = match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        };
        write!(f, "{label}")
    }
}

/// A field declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor
{
    name: String,
    declared_type: TypeRef,
    visibility: Visibility,
    accessible: bool,
}

impl FieldDescriptor
{
    /// Construct a public field.
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self
    {
        Self {
            name: name.into(),
            declared_type,
            visibility: Visibility::Public,
            accessible: false,
        }
    }

    /// Set the declared visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self
    {
        self.visibility = visibility;
        self
    }

    /// Field name.
    pub fn name(&self) -> &str
    {
        &self.name
    }

    /// Declared type of the field.
    pub fn declared_type(&self) -> &TypeRef
    {
        &self.declared_type
    }

    /// Declared visibility.
    pub fn visibility(&self) -> Visibility
    {
        self.visibility
    }

    /// Whether the visibility override has been requested.
    pub fn is_accessible(&self) -> bool
    {
        self.accessible
    }

    /// Request (or drop) the visibility override on this descriptor.
    pub fn set_accessible(&mut self, accessible: bool)
    {
        self.accessible = accessible;
    }

    /// Returns `AccessDenied` for a non-public field without the override.
    ///
    /// Hosts call this at the top of their `get_field`/`set_field`.
    ///
    /// ## Errors
    ///
    /// - `AccessDenied`: the field is not public and not overridden
    pub fn check_access(&self) -> SpyglassResult<()>
    {
        check_access(&self.name, self.visibility, self.accessible)
    }
}

/// A method declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor
{
    name: String,
    return_type: TypeRef,
    parameter_types: SmallVec<[TypeRef; 4]>,
    visibility: Visibility,
    accessible: bool,
}

impl MethodDescriptor
{
    /// Construct a public method.
    pub fn new(name: impl Into<String>, return_type: TypeRef, parameter_types: impl IntoIterator<Item = TypeRef>) -> Self
    {
        Self {
            name: name.into(),
            return_type,
            parameter_types: parameter_types.into_iter().collect(),
            visibility: Visibility::Public,
            accessible: false,
        }
    }

    /// Set the declared visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self
    {
        self.visibility = visibility;
        self
    }

    /// Method name.
    pub fn name(&self) -> &str
    {
        &self.name
    }

    /// Declared return type.
    pub fn return_type(&self) -> &TypeRef
    {
        &self.return_type
    }

    /// Parameter types in declaration order.
    pub fn parameter_types(&self) -> &[TypeRef]
    {
        &self.parameter_types
    }

    /// Declared visibility.
    pub fn visibility(&self) -> Visibility
    {
        self.visibility
    }

    /// Whether the visibility override has been requested.
    pub fn is_accessible(&self) -> bool
    {
        self.accessible
    }

    /// Request (or drop) the visibility override on this descriptor.
    pub fn set_accessible(&mut self, accessible: bool)
    {
        self.accessible = accessible;
    }

    /// Returns `AccessDenied` for a non-public method without the override.
    ///
    /// ## Errors
    ///
    /// - `AccessDenied`: the method is not public and not overridden
    pub fn check_access(&self) -> SpyglassResult<()>
    {
        check_access(&self.name, self.visibility, self.accessible)
    }
}

fn check_access(member: &str, visibility: Visibility, accessible: bool) -> SpyglassResult<()>
{
    if accessible || visibility == Visibility::Public {
        Ok(())
    } else {
        Err(SpyglassError::AccessDenied {
            member: member.to_string(),
            visibility,
        })
    }
}

/// Members declared directly on one type, in declaration order.
///
/// This is the static descriptor table a host builds for each of its types.
/// It never includes inherited members.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::types::{FieldDescriptor, MethodDescriptor, TypeDescriptor, TypeRef, Visibility};
///
/// let account = TypeDescriptor::new(TypeRef::new("bank.Account"))
///     .field(FieldDescriptor::new("owner", TypeRef::new("String")))
///     .field(FieldDescriptor::new("balance", TypeRef::new("i64")).with_visibility(Visibility::Private))
///     .method(MethodDescriptor::new("deposit", TypeRef::new("void"), [TypeRef::new("i64")]));
///
/// assert_eq!(account.fields().len(), 2);
/// assert_eq!(account.methods()[0].name(), "deposit");
/// ```
#[derive(Debug, Clone)]
pub struct TypeDescriptor
{
    type_ref: TypeRef,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor
{
    /// Start an empty descriptor table for `type_ref`.
    pub fn new(type_ref: TypeRef) -> Self
    {
        Self {
            type_ref,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Append a declared field.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self
    {
        self.fields.push(field);
        self
    }

    /// Append a declared method.
    #[must_use]
    pub fn method(mut self, method: MethodDescriptor) -> Self
    {
        self.methods.push(method);
        self
    }

    /// The described type.
    pub fn type_ref(&self) -> &TypeRef
    {
        &self.type_ref
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor]
    {
        &self.fields
    }

    /// Declared methods in declaration order.
    pub fn methods(&self) -> &[MethodDescriptor]
    {
        &self.methods
    }
}
