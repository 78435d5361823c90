//! Type references and the assignability relation.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

static OBJECT: Lazy<TypeRef> = Lazy::new(|| TypeRef::root("Object"));

#[derive(Debug)]
struct TypeInfo
{
    name: String,
    supertypes: Vec<TypeRef>,
}

/// Handle to a runtime type known to the host.
///
/// Two references denote the same type when their names are equal; the
/// name is the type identity. Cloning is cheap (the metadata is shared).
///
/// ## Example
///
/// ```rust
/// use spyglass_core::types::TypeRef;
///
/// let number = TypeRef::new("Number");
/// let integer = TypeRef::new("Integer").extending(number.clone());
///
/// assert!(number.is_assignable_from(&integer));
/// assert!(TypeRef::object().is_assignable_from(&integer));
/// assert!(!integer.is_assignable_from(&number));
/// ```
#[derive(Clone)]
pub struct TypeRef(Arc<TypeInfo>);

impl TypeRef
{
    /// Create a type whose only supertype is [`TypeRef::object`].
    pub fn new(name: impl Into<String>) -> Self
    {
        Self(Arc::new(TypeInfo {
            name: name.into(),
            supertypes: vec![TypeRef::object()],
        }))
    }

    /// Create a type with no supertypes at all.
    pub fn root(name: impl Into<String>) -> Self
    {
        Self(Arc::new(TypeInfo {
            name: name.into(),
            supertypes: Vec::new(),
        }))
    }

    /// The root of the type hierarchy. Every type built with
    /// [`TypeRef::new`] is assignable to it.
    pub fn object() -> TypeRef
    {
        OBJECT.clone()
    }

    /// Returns a copy of this type that additionally extends `parent`.
    #[must_use]
    pub fn extending(self, parent: TypeRef) -> Self
    {
        let mut supertypes = self.0.supertypes.clone();
        if !supertypes.contains(&parent) {
            supertypes.push(parent);
        }
        Self(Arc::new(TypeInfo {
            name: self.0.name.clone(),
            supertypes,
        }))
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &str
    {
        &self.0.name
    }

    /// Direct supertypes (superclass and interfaces).
    pub fn supertypes(&self) -> &[TypeRef]
    {
        &self.0.supertypes
    }

    /// Whether a value of type `other` may legally be stored in a slot
    /// declared with this type (`self` equals `other` or is one of its
    /// transitive supertypes).
    pub fn is_assignable_from(&self, other: &TypeRef) -> bool
    {
        self == other || other.supertypes().iter().any(|parent| self.is_assignable_from(parent))
    }
}

impl PartialEq for TypeRef
{
    fn eq(&self, other: &Self) -> bool
    {
        Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
    }
}

impl Eq for TypeRef {}

impl fmt::Debug for TypeRef
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_tuple("TypeRef").field(&self.0.name).finish()
    }
}

impl fmt::Display for TypeRef
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.0.name)
    }
}
