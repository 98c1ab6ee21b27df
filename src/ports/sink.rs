// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented output sink used by the introspector.

/// Receives formatted lines, one at a time.
///
/// `Vec<String>` is a sink that collects lines, which is what tests use. The
/// [`StdoutSink`](crate::adapters::StdoutSink) adapter prints them.
pub trait LineSink {
    /// Accepts one line of output, without a trailing newline.
    fn accept(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn accept(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn accept(&mut self, line: &str) {
        (**self).accept(line);
    }
}

/// Prefixes every line with two spaces before passing it on.
///
/// Nesting one `Indented` inside another indents by four, and so on.
pub struct Indented<'a> {
    inner: &'a mut dyn LineSink,
}

impl<'a> Indented<'a> {
    /// Wraps `inner`.
    pub fn new(inner: &'a mut dyn LineSink) -> Self {
        Self { inner }
    }
}

impl LineSink for Indented<'_> {
    fn accept(&mut self, line: &str) {
        self.inner.accept(&format!("  {}", line));
    }
}
