//! # Render Configuration
//!
//! The literal strings used by the text output format.

/// Literal strings used when rendering dumps and stack traces.
///
/// The defaults produce the stable text format; override individual strings
/// with the builder methods.
///
/// # Examples
///
/// ```rust
/// use spyglass_core::RenderConfig;
///
/// let config = RenderConfig::default()
///     .with_qualifier_separator("::")   // Rust symbol paths
///     .with_indent("    ");             // Spaces instead of a tab
///
/// assert_eq!(config.start_label, "--- start");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig
{
    /// Line written before a block of dumped lines.
    /// Default: `"--- start"`
    pub start_label: String,

    /// Line written after a block of dumped lines.
    /// Default: `"--- end"`
    pub end_label: String,

    /// Rendering of an absent field value.
    /// Default: `"null"`
    pub null_label: String,

    /// Written once after the end label.
    /// Default: `"\n"`
    pub newline: String,

    /// Prefix of an indented stack frame.
    /// Default: `"\t"`
    pub indent: String,

    /// Between a type name and a member name.
    /// Default: `" "`
    pub space: String,

    /// Between a field name and its value.
    /// Default: `"="`
    pub equals: String,

    /// Opens a method's parameter section.
    /// Default: `"("`
    pub open_params: String,

    /// Closes a method's parameter section.
    /// Default: `")"`
    pub close_params: String,

    /// Opens the bracketed parameter type list.
    /// Default: `"["`
    pub open_list: String,

    /// Closes the bracketed parameter type list.
    /// Default: `"]"`
    pub close_list: String,

    /// Between parameter types in the list.
    /// Default: `", "`
    pub list_separator: String,

    /// Separates qualifiers in stack frame text, used for grouping.
    /// Default: `"."`
    pub qualifier_separator: String,
}

impl Default for RenderConfig
{
    fn default() -> Self
    {
        RenderConfig {
            start_label: "--- start".to_string(),
            end_label: "--- end".to_string(),
            null_label: "null".to_string(),
            newline: "\n".to_string(),
            indent: "\t".to_string(),
            space: " ".to_string(),
            equals: "=".to_string(),
            open_params: "(".to_string(),
            close_params: ")".to_string(),
            open_list: "[".to_string(),
            close_list: "]".to_string(),
            list_separator: ", ".to_string(),
            qualifier_separator: ".".to_string(),
        }
    }
}

impl RenderConfig
{
    /// Set the block start and end labels.
    #[must_use]
    pub fn with_labels(mut self, start: impl Into<String>, end: impl Into<String>) -> Self
    {
        self.start_label = start.into();
        self.end_label = end.into();
        self
    }

    /// Set the rendering of absent values.
    #[must_use]
    pub fn with_null_label(mut self, label: impl Into<String>) -> Self
    {
        self.null_label = label.into();
        self
    }

    /// Set the prefix of indented stack frames.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self
    {
        self.indent = indent.into();
        self
    }

    /// Set the qualifier separator used to group stack frames.
    ///
    /// Use `"::"` for Rust symbol paths, `"."` (the default) for
    /// JVM-style or dotted frames.
    #[must_use]
    pub fn with_qualifier_separator(mut self, separator: impl Into<String>) -> Self
    {
        self.qualifier_separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_defaults_match_text_format()
    {
        let config = RenderConfig::default();
        assert_eq!(config.start_label, "--- start");
        assert_eq!(config.end_label, "--- end");
        assert_eq!(config.null_label, "null");
        assert_eq!(config.newline, "\n");
        assert_eq!(config.indent, "\t");
        assert_eq!(config.qualifier_separator, ".");
    }

    #[test]
    fn test_builder_overrides_only_named_fields()
    {
        let config = RenderConfig::default().with_labels(">>>", "<<<").with_null_label("nil");
        assert_eq!(config.start_label, ">>>");
        assert_eq!(config.end_label, "<<<");
        assert_eq!(config.null_label, "nil");
        assert_eq!(config.indent, "\t");
    }
}
