// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// One level of indentation, used if nothing else is configured.
pub const DEFAULT_INDENTATION: &str = "    ";

/// The line terminator native to the platform we are compiled for.
///
/// This is resolved at compile time
/// and handed to the emitter through [`crate::options::FormatOptions::default`],
/// so the emitter itself never consults the environment it runs in.
#[cfg(windows)]
pub const PLATFORM_LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const PLATFORM_LINE_TERMINATOR: &str = "\n";

/// The line terminator used by [`crate::options::FormatOptions::unix`].
pub const UNIX_LINE_TERMINATOR: &str = "\n";
