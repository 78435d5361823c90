//! # Types
//!
//! Host-facing types of the reflection capability.
//!
//! A host describes each of its types once with a [`TypeDescriptor`] and
//! implements [`Reflect`] for its objects; the introspector only ever talks
//! to objects through these types.

pub mod descriptor;
pub mod stack;
pub mod type_ref;
pub mod value;

// Re-export all public types
pub use descriptor::{FieldDescriptor, MethodDescriptor, TypeDescriptor, Visibility};
pub use stack::{StackFrameRecord, StackTrace};
pub use type_ref::TypeRef;
pub use value::{builtin_type, Reflect, Value};
