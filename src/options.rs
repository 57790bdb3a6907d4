// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{DEFAULT_INDENTATION, PLATFORM_LINE_TERMINATOR, UNIX_LINE_TERMINATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Space(s) or tab(s) representing one level of indentation.
    pub indentation: String,
    /// What gets written to end a line.
    ///
    /// This is also the *only* sequence text gets split on
    /// when written with [`crate::emitter::Emitter::text`].
    /// Text using a different line-break convention
    /// is written as a single chunk,
    /// which means lines after an embedded foreign line-break
    /// do not get indented.
    ///
    /// NOTE An empty terminator disables line-breaking output altogether;
    /// the emitter still tracks where lines would start,
    /// and indents accordingly.
    pub line_terminator: String,
}

impl FormatOptions {
    /// Default indentation, but always `"\n"` as line terminator,
    /// regardless of the platform.
    #[must_use]
    pub fn unix() -> Self {
        Self::default().with_line_terminator(UNIX_LINE_TERMINATOR)
    }

    #[must_use]
    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: impl Into<String>) -> Self {
        self.line_terminator = line_terminator.into();
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION.to_string(),
            line_terminator: PLATFORM_LINE_TERMINATOR.to_string(),
        }
    }
}
