//! Stack frame records.

use std::backtrace::Backtrace;
use std::fmt;

use crate::demangle::demangle_text;

/// One call-stack entry as rendered by the host runtime.
///
/// The text is an opaque, already formatted atom such as
/// `a.b.Foo.m1(Foo.java:12)` or `spyglass::main at ./src/main.rs:9:5`.
/// Only its leading qualifiers are inspected, to group related frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrameRecord
{
    text: String,
}

impl StackFrameRecord
{
    /// Wrap a rendered frame.
    pub fn new(text: impl Into<String>) -> Self
    {
        Self { text: text.into() }
    }

    /// Rendered frame text.
    pub fn text(&self) -> &str
    {
        &self.text
    }

    /// Copy of this frame with every mangled Rust symbol demangled.
    #[must_use]
    pub fn demangled(&self) -> Self
    {
        Self::new(demangle_text(&self.text))
    }

    /// Leading qualifier pair used to group consecutive frames.
    ///
    /// This is the text before the second `separator`, or before the first
    /// one when there is only one. A frame without any separator is its own
    /// key.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use spyglass_core::types::StackFrameRecord;
    ///
    /// assert_eq!(StackFrameRecord::new("a.b.Foo.m1").grouping_key("."), "a.b");
    /// assert_eq!(StackFrameRecord::new("Foo.m1").grouping_key("."), "Foo");
    /// assert_eq!(StackFrameRecord::new("main").grouping_key("."), "main");
    /// ```
    pub fn grouping_key(&self, separator: &str) -> &str
    {
        if separator.is_empty() {
            return &self.text;
        }

        let Some(first) = self.text.find(separator) else {
            return &self.text;
        };
        let after_first = first + separator.len();
        match self.text[after_first..].find(separator) {
            Some(second) => &self.text[..after_first + second],
            None => &self.text[..first],
        }
    }
}

impl fmt::Display for StackFrameRecord
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.text)
    }
}

impl From<&str> for StackFrameRecord
{
    fn from(text: &str) -> Self
    {
        Self::new(text)
    }
}

impl From<String> for StackFrameRecord
{
    fn from(text: String) -> Self
    {
        Self::new(text)
    }
}

/// Ordered sequence of frames, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackTrace
{
    frames: Vec<StackFrameRecord>,
}

impl StackTrace
{
    /// Build from frames in caller order.
    pub fn new(frames: Vec<StackFrameRecord>) -> Self
    {
        Self { frames }
    }

    /// Capture the current thread's stack, regardless of `RUST_BACKTRACE`.
    ///
    /// Frames are rendered as `symbol at file:line:column` when the
    /// location is known, `symbol` otherwise. Symbol paths use `::`, so format
    /// the result with a `::` qualifier separator.
    pub fn capture() -> Self
    {
        Self::parse_backtrace(&Backtrace::force_capture().to_string())
    }

    /// Parse the `Display` output of [`std::backtrace::Backtrace`].
    ///
    /// Each numbered line (`  3: crate::module::function`) starts a frame;
    /// an indented `at <location>` line that follows is appended to it.
    /// Anything else is ignored.
    pub fn parse_backtrace(text: &str) -> Self
    {
        let mut frames: Vec<StackFrameRecord> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if let Some(location) = line.strip_prefix("at ") {
                if let Some(last) = frames.last_mut() {
                    last.text.push_str(" at ");
                    last.text.push_str(location);
                }
                continue;
            }

            let Some((index, symbol)) = line.split_once(": ") else {
                continue;
            };
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(StackFrameRecord::new(symbol));
            }
        }

        Self { frames }
    }

    /// Frames in order.
    pub fn frames(&self) -> &[StackFrameRecord]
    {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize
    {
        self.frames.len()
    }

    /// Returns `true` if there are no frames.
    pub fn is_empty(&self) -> bool
    {
        self.frames.is_empty()
    }
}

impl FromIterator<StackFrameRecord> for StackTrace
{
    fn from_iter<I: IntoIterator<Item = StackFrameRecord>>(iter: I) -> Self
    {
        Self::new(iter.into_iter().collect())
    }
}
