// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Write};

/// Current state of the output cursor.
#[derive(Debug)]
pub struct Context<W: Write> {
    /// The level of indentation
    /// (**not** measured in spaces).
    pub indent_level: usize,
    /// Whether the next chunk written starts a fresh line,
    /// and thus has to be preceded by indentation.
    pub at_line_start: bool,
    pub output: W,
}

impl<W: Write> Context<W> {
    pub const fn new(output: W) -> Self {
        Self {
            indent_level: 0,
            at_line_start: true,
            output,
        }
    }

    /// Ends the current line, unless we are at the start of one already.
    /// `level_delta` is applied to the indentation level in either case.
    ///
    /// The indentation level only ever affects lines started afterwards.
    pub fn force_newline(&mut self, terminator: &str, level_delta: isize) -> fmt::Result {
        self.indent_level = self.indent_level.saturating_add_signed(level_delta);
        if self.at_line_start {
            return Ok(());
        }
        self.at_line_start = true;
        self.output.write_str(terminator)?;
        Ok(())
    }

    /// Writes `text` verbatim,
    /// preceded by the indentation if it is the first thing on a line.
    ///
    /// Empty text writes nothing, not even indentation.
    pub fn write_raw(&mut self, indentation: &str, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start {
            self.at_line_start = false;
            for _ in 0..self.indent_level {
                self.output.write_str(indentation)?;
            }
        }
        self.output.write_str(text)?;
        Ok(())
    }

    /// Writes a line terminator without any indentation,
    /// even if we are at the start of a line already.
    pub fn blank_line(&mut self, terminator: &str) -> fmt::Result {
        self.at_line_start = true;
        self.output.write_str(terminator)?;
        Ok(())
    }
}
