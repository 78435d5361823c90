//! # spyglass-core
//!
//! Object introspection primitives for Spyglass.
//!
//! This crate turns runtime objects and call stacks into readable text:
//! - Field dumps (`<type> <name>=<value>`) and method dumps
//!   (`<return type> <name>([<params>])`)
//! - Assignment of one value into every field that can hold it
//! - Lookup of a single field or method by name/type/signature
//! - Stack trace formatting with alternating indentation bands
//!
//! ## Reflection
//!
//! Rust has no runtime reflection. Hosts describe their types with
//! [`types::TypeDescriptor`] tables and implement [`types::Reflect`] for
//! their objects (or use [`DynamicObject`]). Nothing is cached: every call
//! asks the object for its descriptor again.
//!
//! ## Output
//!
//! Every dump has a list form and a sink form. Sink forms wrap the lines in
//! `--- start` / `--- end` labels and are no-ops without a sink.

pub mod config;
pub mod demangle;
pub mod dynamic;
pub mod error;
pub mod introspector;
pub mod lookup;
pub mod prelude;
pub mod sink;
pub mod types;

pub use config::RenderConfig;
pub use dynamic::DynamicObject;
// Re-export commonly used types
pub use error::{SpyglassError, SpyglassResult};
pub use introspector::Introspector;
pub use sink::{LineSink, Sink, WriterSink};
