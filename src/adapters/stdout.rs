// SPDX-License-Identifier: MIT OR Apache-2.0

//! Standard output line sink.

use crate::ports::LineSink;

/// Prints every line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn accept(&mut self, line: &str) {
        println!("{}", line);
    }
}
