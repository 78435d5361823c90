//! # Dynamic Objects
//!
//! A [`Reflect`] implementation driven entirely by a [`TypeDescriptor`].
//!
//! Hosts whose objects are not Rust structs (scripting values, decoded
//! records, test fixtures) can model them as a `DynamicObject`: one value
//! slot per declared field, with visibility and type checks applied on every
//! access.

use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{SpyglassError, SpyglassResult};
use crate::types::{FieldDescriptor, Reflect, TypeDescriptor, TypeRef, Value};

/// Object whose layout is a descriptor table.
///
/// - Non-public fields require the visibility override.
/// - Sealed fields refuse access even with the override.
/// - Writes must be assignable to the field's declared type.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use spyglass_core::types::{FieldDescriptor, Reflect, TypeDescriptor, TypeRef};
/// use spyglass_core::DynamicObject;
///
/// let descriptor = TypeDescriptor::new(TypeRef::new("Point"))
///     .field(FieldDescriptor::new("x", TypeRef::new("i32")))
///     .field(FieldDescriptor::new("y", TypeRef::new("i32")));
///
/// let mut point = DynamicObject::new(descriptor);
/// let x = point.descriptor().fields()[0].clone();
/// point.set_field(&x, Arc::new(3_i32))?;
///
/// assert_eq!(point.get_field(&x)?.map(|v| v.to_string()), Some("3".to_string()));
/// # Ok::<(), spyglass_core::SpyglassError>(())
/// ```
pub struct DynamicObject
{
    descriptor: TypeDescriptor,
    slots: Vec<Option<Arc<dyn Value>>>,
    sealed: HashSet<String>,
}

impl DynamicObject
{
    /// Create an object with every field set to null.
    pub fn new(descriptor: TypeDescriptor) -> Self
    {
        let slots = vec![None; descriptor.fields().len()];
        Self {
            descriptor,
            slots,
            sealed: HashSet::new(),
        }
    }

    /// Set a field's initial value by name, bypassing access checks.
    ///
    /// ## Errors
    ///
    /// - `UnknownField`: no field with that name is declared
    /// - `TypeMismatch`: the value cannot be held by the field
    pub fn with_value(mut self, name: &str, value: impl Value + 'static) -> SpyglassResult<Self>
    {
        let index = self.index_by_name(name)?;
        let value: Arc<dyn Value> = Arc::new(value);
        check_assignable(&self.descriptor.fields()[index], value.as_ref())?;
        self.slots[index] = Some(value);
        Ok(self)
    }

    /// Refuse all access to a field, even through the visibility override.
    #[must_use]
    pub fn seal(mut self, name: &str) -> Self
    {
        self.sealed.insert(name.to_string());
        self
    }

    fn index_by_name(&self, name: &str) -> SpyglassResult<usize>
    {
        self.descriptor
            .fields()
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| SpyglassError::UnknownField(name.to_string()))
    }

    fn slot_index(&self, field: &FieldDescriptor) -> SpyglassResult<usize>
    {
        let index = self
            .descriptor
            .fields()
            .iter()
            .position(|f| f.name() == field.name() && f.declared_type() == field.declared_type())
            .ok_or_else(|| SpyglassError::UnknownField(field.name().to_string()))?;

        field.check_access()?;
        if self.sealed.contains(field.name()) {
            return Err(SpyglassError::AccessDenied {
                member: field.name().to_string(),
                visibility: field.visibility(),
            });
        }
        Ok(index)
    }
}

fn check_assignable(field: &FieldDescriptor, value: &dyn Value) -> SpyglassResult<()>
{
    let found = value.type_ref();
    if field.declared_type().is_assignable_from(&found) {
        Ok(())
    } else {
        Err(SpyglassError::TypeMismatch {
            field: field.name().to_string(),
            expected: field.declared_type().name().to_string(),
            found: found.name().to_string(),
        })
    }
}

impl fmt::Display for DynamicObject
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}{{", self.descriptor.type_ref())?;
        for (i, (field, slot)) in self.descriptor.fields().iter().zip(&self.slots).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => write!(f, "{}={value}", field.name())?,
                None => write!(f, "{}=null", field.name())?,
            }
        }
        f.write_str("}")
    }
}

impl fmt::Debug for DynamicObject
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("DynamicObject")
            .field("type", self.descriptor.type_ref())
            .field("value", &self.to_string())
            .finish_non_exhaustive()
    }
}

impl Value for DynamicObject
{
    fn type_ref(&self) -> TypeRef
    {
        self.descriptor.type_ref().clone()
    }

    fn as_any(&self) -> &dyn Any
    {
        self
    }
}

impl Reflect for DynamicObject
{
    fn descriptor(&self) -> TypeDescriptor
    {
        self.descriptor.clone()
    }

    fn get_field(&self, field: &FieldDescriptor) -> SpyglassResult<Option<Arc<dyn Value>>>
    {
        let index = self.slot_index(field)?;
        Ok(self.slots[index].clone())
    }

    fn set_field(&mut self, field: &FieldDescriptor, value: Arc<dyn Value>) -> SpyglassResult<()>
    {
        let index = self.slot_index(field)?;
        check_assignable(&self.descriptor.fields()[index], value.as_ref())?;
        self.slots[index] = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::types::{builtin_type, Visibility};

    fn sample() -> DynamicObject
    {
        let i64_type = builtin_type("i64").unwrap();
        let descriptor = TypeDescriptor::new(TypeRef::new("Counter"))
            .field(FieldDescriptor::new("count", i64_type.clone()))
            .field(FieldDescriptor::new("limit", i64_type).with_visibility(Visibility::Private));
        DynamicObject::new(descriptor)
    }

    #[test]
    fn test_new_fields_are_null()
    {
        let counter = sample();
        let count = counter.descriptor().fields()[0].clone();
        assert!(counter.get_field(&count).unwrap().is_none());
    }

    #[test]
    fn test_private_field_needs_override()
    {
        let counter = sample().with_value("limit", 10_i64).unwrap();
        let mut limit = counter.descriptor().fields()[1].clone();

        assert!(counter.get_field(&limit).err().unwrap().is_access_denied());

        limit.set_accessible(true);
        let value = counter.get_field(&limit).unwrap().unwrap();
        assert_eq!(value.to_string(), "10");
    }

    #[test]
    fn test_sealed_field_denies_override()
    {
        let counter = sample().seal("count");
        let mut count = counter.descriptor().fields()[0].clone();
        count.set_accessible(true);
        assert!(counter.get_field(&count).err().unwrap().is_access_denied());
    }

    #[test]
    fn test_write_rejects_incompatible_value()
    {
        let mut counter = sample();
        let count = counter.descriptor().fields()[0].clone();
        let err = counter.set_field(&count, Arc::new(String::from("many"))).unwrap_err();
        assert!(matches!(err, SpyglassError::TypeMismatch { .. }));
    }

    #[test]
    fn test_foreign_descriptor_is_unknown()
    {
        let counter = sample();
        let foreign = FieldDescriptor::new("count", TypeRef::new("String"));
        assert!(matches!(counter.get_field(&foreign), Err(SpyglassError::UnknownField(_))));
    }

    #[test]
    fn test_display_lists_fields()
    {
        let counter = sample().with_value("count", 2_i64).unwrap();
        assert_eq!(counter.to_string(), "Counter{count=2, limit=null}");
    }
}
