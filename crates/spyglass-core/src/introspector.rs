//! # Introspector
//!
//! Field/method dumps, assignment by type compatibility and stack trace
//! formatting.
//!
//! The introspector is stateless apart from its immutable
//! [`RenderConfig`]. Every call re-enumerates the object's descriptor and
//! produces the same output for the same input.
//!
//! Each operation comes in two forms:
//!
//! - a list form returning the rendered lines
//! - a sink form writing them to an optional [`Sink`]; passing `None` makes
//!   the call a no-op
//!
//! ## Access failures
//!
//! Reading or writing a field that the host refuses
//! ([`SpyglassError::AccessDenied`]) skips that field and continues. Every
//! other host error is returned to the caller as is.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::error::{SpyglassError, SpyglassResult};
use crate::sink::Sink;
use crate::types::{FieldDescriptor, MethodDescriptor, Reflect, StackFrameRecord, TypeDescriptor, TypeRef, Value};

/// Renders objects, types and stack traces as text lines.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::types::StackFrameRecord;
/// use spyglass_core::Introspector;
///
/// let introspector = Introspector::new();
/// let frames: Vec<StackFrameRecord> = ["a.b.Foo.m1", "a.b.Foo.m2", "c.d.Bar.m3", "a.b.Foo.m4"]
///     .into_iter()
///     .map(StackFrameRecord::from)
///     .collect();
///
/// assert_eq!(
///     introspector.format_stack(&frames),
///     ["a.b.Foo.m1", "a.b.Foo.m2", "\tc.d.Bar.m3", "a.b.Foo.m4"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Introspector
{
    config: RenderConfig,
}

impl Introspector
{
    /// Create an introspector with the default text format.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Create an introspector with custom literal strings.
    pub fn with_config(config: RenderConfig) -> Self
    {
        Self { config }
    }

    /// The literal strings in use.
    pub fn config(&self) -> &RenderConfig
    {
        &self.config
    }

    /// Render the fields declared directly on `object`'s type.
    ///
    /// Produces `"<type> <name>=<value>"` per field, in declaration order,
    /// restricted to fields whose declared type equals `type_filter` when
    /// one is given. Absent values render as the null label; fields the host
    /// refuses to read are left out.
    ///
    /// ## Errors
    ///
    /// Any host error other than `AccessDenied`.
    pub fn dump_fields(&self, object: &dyn Reflect, type_filter: Option<&TypeRef>) -> SpyglassResult<Vec<String>>
    {
        let descriptor = object.descriptor();
        let mut lines = Vec::with_capacity(descriptor.fields().len());

        for field in descriptor.fields() {
            let mut field = field.clone();
            field.set_accessible(true);

            if type_filter.is_some_and(|t| t != field.declared_type()) {
                continue;
            }

            let value = match skip_denied(object.get_field(&field))? {
                Some(value) => value,
                None => {
                    trace!(field = field.name(), "field not readable, skipped");
                    continue;
                }
            };
            lines.push(self.field_line(&field, value.as_deref()));
        }

        debug!(owner = %descriptor.type_ref(), lines = lines.len(), "dumped fields");
        Ok(lines)
    }

    /// [`dump_fields`](Self::dump_fields) wrapped in start/end labels and
    /// written to `sink`.
    ///
    /// ## Errors
    ///
    /// Host errors other than `AccessDenied`, and sink I/O errors.
    pub fn write_fields(
        &self,
        object: &dyn Reflect,
        type_filter: Option<&TypeRef>,
        sink: Option<&mut dyn Sink>,
    ) -> SpyglassResult<()>
    {
        let Some(sink) = sink else {
            return Ok(());
        };
        let lines = self.dump_fields(object, type_filter)?;
        self.write_block(sink, &lines)
    }

    /// Render the methods declared directly on `ty`.
    ///
    /// Produces `"<return type> <name>([<param>, <param>])"` per method, in
    /// declaration order, restricted to methods whose return type equals
    /// `return_type_filter` when one is given.
    pub fn dump_methods(&self, ty: &TypeDescriptor, return_type_filter: Option<&TypeRef>) -> Vec<String>
    {
        let lines: Vec<String> = ty
            .methods()
            .iter()
            .filter(|method| return_type_filter.is_none_or(|t| t == method.return_type()))
            .map(|method| self.method_line(method))
            .collect();

        debug!(owner = %ty.type_ref(), lines = lines.len(), "dumped methods");
        lines
    }

    /// [`dump_methods`](Self::dump_methods) wrapped in start/end labels and
    /// written to `sink`.
    ///
    /// ## Errors
    ///
    /// Sink I/O errors.
    pub fn write_methods(
        &self,
        ty: &TypeDescriptor,
        return_type_filter: Option<&TypeRef>,
        sink: Option<&mut dyn Sink>,
    ) -> SpyglassResult<()>
    {
        let Some(sink) = sink else {
            return Ok(());
        };
        let lines = self.dump_methods(ty, return_type_filter);
        self.write_block(sink, &lines)
    }

    /// Store `value` into every field of `target` that can hold it.
    ///
    /// A field is eligible when its declared type is assignable from the
    /// value's runtime type, so broader fields (e.g. `Object`) receive the
    /// value too. Returns one `"<name>=<value>"` record per successful write.
    /// Fields the host refuses to write are skipped without a record.
    ///
    /// ## Errors
    ///
    /// Any host error other than `AccessDenied`. Fields written before the
    /// error keep their new value.
    pub fn assign_to_compatible_fields(
        &self,
        value: &Arc<dyn Value>,
        target: &mut dyn Reflect,
    ) -> SpyglassResult<Vec<String>>
    {
        let value_type = value.type_ref();
        let descriptor = target.descriptor();
        let mut records = Vec::new();

        for field in descriptor.fields() {
            if !field.declared_type().is_assignable_from(&value_type) {
                continue;
            }

            let mut field = field.clone();
            field.set_accessible(true);
            if skip_denied(target.set_field(&field, Arc::clone(value)))?.is_none() {
                trace!(field = field.name(), "field not writable, skipped");
                continue;
            }
            records.push(format!("{}{}{}", field.name(), self.config.equals, value));
        }

        debug!(owner = %descriptor.type_ref(), value_type = %value_type, assigned = records.len(), "assigned value");
        Ok(records)
    }

    /// [`assign_to_compatible_fields`](Self::assign_to_compatible_fields)
    /// with each record written to `sink`, without labels.
    ///
    /// Nothing is assigned when `sink` is `None`.
    ///
    /// ## Errors
    ///
    /// Host errors other than `AccessDenied`, and sink I/O errors.
    pub fn write_assignments(
        &self,
        value: &Arc<dyn Value>,
        target: &mut dyn Reflect,
        sink: Option<&mut dyn Sink>,
    ) -> SpyglassResult<()>
    {
        let Some(sink) = sink else {
            return Ok(());
        };
        for record in self.assign_to_compatible_fields(value, target)? {
            sink.write_str(&record)?;
        }
        Ok(())
    }

    /// Render a stack trace with alternating indentation bands.
    ///
    /// The first frame is never indented. For every following frame, the
    /// grouping key (see [`StackFrameRecord::grouping_key`]) is compared with
    /// the previous frame's key:
    ///
    /// - same key: the frame keeps the current indentation
    /// - different key: the indentation flips (indented becomes flush,
    ///   flush becomes indented)
    ///
    /// The result bands consecutive frames from the same qualifier pair.
    /// No state survives between calls.
    pub fn format_stack(&self, frames: &[StackFrameRecord]) -> Vec<String>
    {
        let separator = self.config.qualifier_separator.as_str();
        let mut lines = Vec::with_capacity(frames.len());
        let mut last: Option<&StackFrameRecord> = None;
        let mut last_was_tabbed = false;

        for frame in frames {
            let Some(previous) = last else {
                lines.push(frame.text().to_string());
                last = Some(frame);
                continue;
            };

            if frame.grouping_key(separator) != previous.grouping_key(separator) {
                last_was_tabbed = !last_was_tabbed;
            }

            if last_was_tabbed {
                lines.push(format!("{}{}", self.config.indent, frame.text()));
            } else {
                lines.push(frame.text().to_string());
            }
            last = Some(frame);
        }

        debug!(frames = frames.len(), "formatted stack trace");
        lines
    }

    /// [`format_stack`](Self::format_stack) wrapped in start/end labels and
    /// written to `sink`.
    ///
    /// ## Errors
    ///
    /// Sink I/O errors.
    pub fn write_stack(&self, frames: &[StackFrameRecord], sink: Option<&mut dyn Sink>) -> SpyglassResult<()>
    {
        let Some(sink) = sink else {
            return Ok(());
        };
        let lines = self.format_stack(frames);
        self.write_block(sink, &lines)
    }

    fn field_line(&self, field: &FieldDescriptor, value: Option<&dyn Value>) -> String
    {
        let cfg = &self.config;
        let rendered = value.map_or_else(|| cfg.null_label.clone(), ToString::to_string);
        format!("{}{}{}{}{rendered}", field.declared_type().name(), cfg.space, field.name(), cfg.equals)
    }

    fn method_line(&self, method: &MethodDescriptor) -> String
    {
        let cfg = &self.config;
        let params = method
            .parameter_types()
            .iter()
            .map(TypeRef::name)
            .collect::<Vec<_>>()
            .join(cfg.list_separator.as_str());
        format!(
            "{}{}{}{}{}{params}{}{}",
            method.return_type().name(),
            cfg.space,
            method.name(),
            cfg.open_params,
            cfg.open_list,
            cfg.close_list,
            cfg.close_params
        )
    }

    fn write_block(&self, sink: &mut dyn Sink, lines: &[String]) -> SpyglassResult<()>
    {
        sink.write_str(&self.config.start_label)?;
        for line in lines {
            sink.write_str(line)?;
        }
        sink.write_str(&self.config.end_label)?;
        sink.end_block(&self.config.newline)?;
        Ok(())
    }
}

/// Turn an access failure into `Ok(None)`, pass everything else through.
fn skip_denied<T>(result: SpyglassResult<T>) -> SpyglassResult<Option<T>>
{
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SpyglassError::AccessDenied { member, visibility }) => {
            trace!(%member, %visibility, "access denied");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
