//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use spyglass_core::error::{SpyglassError, SpyglassResult};
use spyglass_core::types::{
    builtin_type, FieldDescriptor, MethodDescriptor, Reflect, TypeDescriptor, TypeRef, Value, Visibility,
};
use spyglass_core::DynamicObject;

pub fn number_type() -> TypeRef
{
    TypeRef::new("Number")
}

pub fn integer_type() -> TypeRef
{
    TypeRef::new("Integer").extending(number_type())
}

pub fn string_type() -> TypeRef
{
    builtin_type("String").unwrap()
}

pub fn int_type() -> TypeRef
{
    TypeRef::root("int")
}

pub fn void_type() -> TypeRef
{
    TypeRef::root("void")
}

/// A boxed integer whose runtime type is `Integer` (a `Number`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer(pub i64);

impl fmt::Display for Integer
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl Value for Integer
{
    fn type_ref(&self) -> TypeRef
    {
        integer_type()
    }

    fn as_any(&self) -> &dyn Any
    {
        self
    }
}

/// Hand-written host object with `Number`, `Object` and `String` fields.
///
/// `number` is private, `anything` protected and `label` public.
#[derive(Default)]
pub struct Holder
{
    pub number: Option<Arc<dyn Value>>,
    pub anything: Option<Arc<dyn Value>>,
    pub label: Option<String>,
}

impl Holder
{
    pub fn type_ref() -> TypeRef
    {
        TypeRef::new("fixtures.Holder")
    }

    pub fn describe() -> TypeDescriptor
    {
        TypeDescriptor::new(Self::type_ref())
            .field(FieldDescriptor::new("number", number_type()).with_visibility(Visibility::Private))
            .field(FieldDescriptor::new("anything", TypeRef::object()).with_visibility(Visibility::Protected))
            .field(FieldDescriptor::new("label", string_type()))
            .method(MethodDescriptor::new("label", string_type(), []))
            .method(MethodDescriptor::new("relabel", void_type(), [string_type()]))
            .method(
                MethodDescriptor::new("combine", number_type(), [number_type(), int_type()])
                    .with_visibility(Visibility::Private),
            )
    }
}

impl fmt::Display for Holder
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "Holder")
    }
}

impl Value for Holder
{
    fn type_ref(&self) -> TypeRef
    {
        Self::type_ref()
    }

    fn as_any(&self) -> &dyn Any
    {
        self
    }
}

impl Reflect for Holder
{
    fn descriptor(&self) -> TypeDescriptor
    {
        Self::describe()
    }

    fn get_field(&self, field: &FieldDescriptor) -> SpyglassResult<Option<Arc<dyn Value>>>
    {
        field.check_access()?;
        match field.name() {
            "number" => Ok(self.number.clone()),
            "anything" => Ok(self.anything.clone()),
            "label" => Ok(self.label.clone().map(|s| Arc::new(s) as Arc<dyn Value>)),
            other => Err(SpyglassError::UnknownField(other.to_string())),
        }
    }

    fn set_field(&mut self, field: &FieldDescriptor, value: Arc<dyn Value>) -> SpyglassResult<()>
    {
        field.check_access()?;
        match field.name() {
            "number" => self.number = Some(value),
            "anything" => self.anything = Some(value),
            "label" => {
                let text = value.as_any().downcast_ref::<String>().ok_or_else(|| SpyglassError::TypeMismatch {
                    field: "label".to_string(),
                    expected: "String".to_string(),
                    found: value.type_ref().name().to_string(),
                })?;
                self.label = Some(text.clone());
            }
            other => return Err(SpyglassError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

/// [`Holder`] that counts how often its descriptor is requested.
#[derive(Default)]
pub struct CountingHolder
{
    pub inner: Holder,
    descriptor_calls: AtomicUsize,
}

impl CountingHolder
{
    pub fn descriptor_calls(&self) -> usize
    {
        self.descriptor_calls.load(Ordering::SeqCst)
    }
}

impl fmt::Display for CountingHolder
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Value for CountingHolder
{
    fn type_ref(&self) -> TypeRef
    {
        Holder::type_ref()
    }

    fn as_any(&self) -> &dyn Any
    {
        self
    }
}

impl Reflect for CountingHolder
{
    fn descriptor(&self) -> TypeDescriptor
    {
        self.descriptor_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.descriptor()
    }

    fn get_field(&self, field: &FieldDescriptor) -> SpyglassResult<Option<Arc<dyn Value>>>
    {
        self.inner.get_field(field)
    }

    fn set_field(&mut self, field: &FieldDescriptor, value: Arc<dyn Value>) -> SpyglassResult<()>
    {
        self.inner.set_field(field, value)
    }
}

/// Host object whose reads always fail with a non-access error.
pub struct Broken;

impl fmt::Display for Broken
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "Broken")
    }
}

impl Value for Broken
{
    fn type_ref(&self) -> TypeRef
    {
        TypeRef::new("fixtures.Broken")
    }

    fn as_any(&self) -> &dyn Any
    {
        self
    }
}

impl Reflect for Broken
{
    fn descriptor(&self) -> TypeDescriptor
    {
        TypeDescriptor::new(self.type_ref()).field(FieldDescriptor::new("value", TypeRef::object()))
    }

    fn get_field(&self, field: &FieldDescriptor) -> SpyglassResult<Option<Arc<dyn Value>>>
    {
        Err(SpyglassError::UnknownField(field.name().to_string()))
    }

    fn set_field(&mut self, field: &FieldDescriptor, _value: Arc<dyn Value>) -> SpyglassResult<()>
    {
        Err(SpyglassError::UnknownField(field.name().to_string()))
    }
}

/// `Point { int x; int y; String name; int z }` as a dynamic object.
pub fn point() -> DynamicObject
{
    let i32_type = builtin_type("i32").unwrap();
    let descriptor = TypeDescriptor::new(TypeRef::new("geo.Point"))
        .field(FieldDescriptor::new("x", i32_type.clone()))
        .field(FieldDescriptor::new("y", i32_type.clone()).with_visibility(Visibility::Private))
        .field(FieldDescriptor::new("name", string_type()))
        .field(FieldDescriptor::new("z", i32_type));

    DynamicObject::new(descriptor)
        .with_value("x", 1_i32)
        .and_then(|p| p.with_value("y", 2_i32))
        .and_then(|p| p.with_value("z", 3_i32))
        .unwrap()
}

/// Type with an `int` field declared before other fields.
pub fn counters() -> TypeDescriptor
{
    TypeDescriptor::new(TypeRef::new("stats.Counters"))
        .field(FieldDescriptor::new("hits", int_type()))
        .field(FieldDescriptor::new("label", string_type()))
        .field(FieldDescriptor::new("misses", int_type()).with_visibility(Visibility::Private))
        .field(FieldDescriptor::new("ratio", builtin_type("f64").unwrap()))
}

/// Type with overloaded methods.
pub fn calculator() -> TypeDescriptor
{
    let int = int_type();
    TypeDescriptor::new(TypeRef::new("math.Calculator"))
        .method(MethodDescriptor::new("add", int.clone(), [int.clone()]))
        .method(MethodDescriptor::new("add", int.clone(), [int.clone(), int.clone()]))
        .method(MethodDescriptor::new("add", int.clone(), [int.clone(), int.clone(), int.clone()]))
        .method(MethodDescriptor::new("describe", string_type(), []))
        .method(MethodDescriptor::new("scale", number_type(), [number_type(), int.clone()]))
        .method(MethodDescriptor::new("reset", void_type(), []).with_visibility(Visibility::Protected))
}
