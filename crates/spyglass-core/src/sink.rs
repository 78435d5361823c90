//! # Output Sinks
//!
//! Caller-owned destinations for formatted text.
//!
//! The introspector makes one discrete write per label or line and never
//! inserts separators itself. Whether lines end up on separate lines is the
//! sink's decision:
//!
//! - [`WriterSink`] passes writes through unchanged (the exact text format)
//! - [`LineSink`] terminates every write with `\n`
//! - `Vec<String>` keeps each write as its own element
//! - `String` concatenates writes
//!
//! The newline that closes a block goes through [`Sink::end_block`] rather
//! than `write_str`, so a sink can tell it apart from content.

use std::io;

/// An append-only text destination.
pub trait Sink
{
    /// Append one discrete piece of text.
    ///
    /// ## Errors
    ///
    /// Returns the underlying I/O error if the destination rejects the write.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Close a block with the configured newline.
    ///
    /// Defaults to writing `newline` like any other text.
    ///
    /// ## Errors
    ///
    /// Returns the underlying I/O error if the destination rejects the write.
    fn end_block(&mut self, newline: &str) -> io::Result<()>
    {
        self.write_str(newline)
    }
}

/// Writes text to an [`io::Write`] unchanged.
#[derive(Debug)]
pub struct WriterSink<W: io::Write>
{
    inner: W,
}

impl<W: io::Write> WriterSink<W>
{
    /// Wrap a writer.
    pub fn new(inner: W) -> Self
    {
        Self { inner }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W
    {
        self.inner
    }
}

impl<W: io::Write> Sink for WriterSink<W>
{
    fn write_str(&mut self, text: &str) -> io::Result<()>
    {
        self.inner.write_all(text.as_bytes())
    }
}

/// Writes each piece of text to an [`io::Write`] followed by `\n`.
///
/// Every write is already its own line, so the block trailer adds nothing.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::sink::{LineSink, Sink};
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_str("--- start")?;
/// sink.write_str("--- end")?;
/// sink.end_block("\r\n")?;
/// assert_eq!(sink.into_inner(), b"--- start\n--- end\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct LineSink<W: io::Write>
{
    inner: W,
}

impl<W: io::Write> LineSink<W>
{
    /// Wrap a writer.
    pub fn new(inner: W) -> Self
    {
        Self { inner }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W
    {
        self.inner
    }
}

impl<W: io::Write> Sink for LineSink<W>
{
    fn write_str(&mut self, text: &str) -> io::Result<()>
    {
        self.inner.write_all(text.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    fn end_block(&mut self, _newline: &str) -> io::Result<()>
    {
        Ok(())
    }
}

impl Sink for Vec<String>
{
    fn write_str(&mut self, text: &str) -> io::Result<()>
    {
        self.push(text.to_string());
        Ok(())
    }
}

impl Sink for String
{
    fn write_str(&mut self, text: &str) -> io::Result<()>
    {
        self.push_str(text);
        Ok(())
    }
}
