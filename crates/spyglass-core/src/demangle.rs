//! Symbol demangling for stack frame text.
//!
//! Frame text copied from profilers, `nm` or crash logs often contains raw
//! Rust linkage names (`_ZN...E` legacy or `_R...` v0). Grouping on those is
//! useless because every symbol shares the `_ZN` prefix, so frames can be
//! demangled before they are formatted.

use rustc_demangle::try_demangle;

/// Demangle every Rust symbol token in `text`.
///
/// Tokens are separated by whitespace; anything that is not a mangled Rust
/// symbol is copied unchanged. The trailing hash (`::h0123...`) is dropped.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::demangle::demangle_text;
///
/// let text = demangle_text("0x1000 _ZN4core3fmt5write17h0123456789abcdefE");
/// assert_eq!(text, "0x1000 core::fmt::write");
/// ```
pub fn demangle_text(text: &str) -> String
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(token_end);
        match try_demangle(token) {
            Ok(symbol) => out.push_str(&format!("{symbol:#}")),
            Err(_) => out.push_str(token),
        }

        let space_end = tail.find(|c: char| !c.is_whitespace()).unwrap_or(tail.len());
        let (spaces, next) = tail.split_at(space_end);
        out.push_str(spaces);
        rest = next;
    }

    out
}
