//! Common module for library exports

pub use crate::config::RenderConfig;
pub use crate::dynamic::DynamicObject;
pub use crate::error::{SpyglassError, SpyglassResult};
pub use crate::introspector::Introspector;
pub use crate::lookup::{
    find_field, find_field_by_name, find_field_by_type, find_field_exact_type, find_method, find_method_by_name,
    find_method_by_parameters, find_method_by_return_type,
};
pub use crate::sink::{LineSink, Sink, WriterSink};
pub use crate::types::{
    builtin_type, FieldDescriptor, MethodDescriptor, Reflect, StackFrameRecord, StackTrace, TypeDescriptor, TypeRef,
    Value, Visibility,
};
