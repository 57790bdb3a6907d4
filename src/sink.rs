// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Adapters turning other kinds of outputs into a [`fmt::Write`] sink.
//!
//! Anything implementing [`fmt::Write`] (e.g. `String`)
//! can be used as a sink directly.

use std::fmt;
use std::io;

/// Creates a sink that hands each chunk of text to `write`.
pub const fn from_fn<F: FnMut(&str)>(write: F) -> FnSink<F> {
    FnSink(write)
}

/// A sink calling a closure for each chunk of text.
/// It never fails.
pub struct FnSink<F>(F);

impl<F: FnMut(&str)> fmt::Write for FnSink<F> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        (self.0)(s);
        Ok(())
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSink")
    }
}

/// A sink writing UTF-8 into a byte stream
/// (e.g. a file, a socket or stdout).
///
/// [`fmt::Error`] carries no details,
/// so the last [`io::Error`] is kept,
/// and can be fetched with [`Self::take_error`].
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// The cause of the last failed write, if any.
    pub const fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// # Errors
    ///
    /// If the underlying stream fails to flush.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            tracing::debug!("Failed to write to the output stream: {err}");
            self.error = Some(err);
            fmt::Error
        })
    }
}
