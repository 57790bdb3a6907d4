// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;
use std::ops::{Deref, DerefMut};

use crate::element::ScopeToken;
use crate::emitter::Emitter;
use crate::error::{EmitResult, Error};

/// An open element that gets closed when this goes out of scope.
///
/// The scope borrows the emitter mutably,
/// and gives access to it through [`Deref`]/[`DerefMut`],
/// so content (including nested elements)
/// is written through the innermost scope:
///
/// ```
/// use prtml::{emitter::Emitter, error::EmitResult, options::FormatOptions};
///
/// # fn main() -> EmitResult<()> {
/// let mut emitter = Emitter::with_options(String::new(), FormatOptions::unix());
/// {
///     let mut body = emitter.block("body", None)?;
///     let mut p = body.block("p", Some("class='intro'"))?;
///     p.text("Hello ")?;
///     p.inline("b", None)?.text("world")?;
/// }
/// assert_eq!(
///     emitter.into_inner()?,
///     "<body>\n    <p class='intro'>\n        Hello <b>world</b>\n    </p>\n</body>\n"
/// );
/// # Ok(())
/// # }
/// ```
///
/// Dropping the scope cannot report errors,
/// so failures while closing on drop are handled as follows:
///
/// - If the element is not the innermost open one any more
///   (because an element opened with [`Emitter::open_block`] and friends
///   was left open inside of it), this panics,
///   unless the thread is panicking already.
/// - If the sink fails, the error is reported
///   by the next operation on the emitter.
///
/// Use [`Self::end`] to close explicitly and get the error right away.
#[derive(Debug)]
#[must_use = "the element is closed right away if the scope is not kept"]
pub struct Scope<'e, W: Write> {
    emitter: &'e mut Emitter<W>,
    token: ScopeToken,
    open: bool,
}

impl<'e, W: Write> Scope<'e, W> {
    pub(crate) const fn new(emitter: &'e mut Emitter<W>, token: ScopeToken) -> Self {
        Self {
            emitter,
            token,
            open: true,
        }
    }

    /// The token of the element this scope closes.
    #[must_use]
    pub const fn token(&self) -> ScopeToken {
        self.token
    }

    /// Closes the element now.
    ///
    /// # Errors
    ///
    /// - [`Error::ScopeViolation`] if the element is not the innermost open one.
    /// - [`Error::Sink`] if the sink fails,
    ///   either now or when a nested scope was dropped before.
    pub fn end(mut self) -> EmitResult<()> {
        self.open = false;
        match self.emitter.close_element(self.token) {
            Err(err @ Error::ScopeViolation { .. }) => Err(err),
            closed => {
                self.emitter.take_deferred()?;
                closed
            }
        }
    }
}

impl<W: Write> Deref for Scope<'_, W> {
    type Target = Emitter<W>;

    fn deref(&self) -> &Self::Target {
        self.emitter
    }
}

impl<W: Write> DerefMut for Scope<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.emitter
    }
}

impl<W: Write> Drop for Scope<'_, W> {
    fn drop(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        match self.emitter.close_element(self.token) {
            Ok(()) => {}
            Err(Error::Sink(err)) => {
                tracing::warn!(
                    "Failed to write closing tag for scope {}; \
reporting with the next operation: {err}",
                    self.token
                );
                self.emitter.defer(err);
            }
            Err(err @ Error::ScopeViolation { .. }) => {
                if std::thread::panicking() {
                    tracing::error!("While unwinding: {err}");
                } else {
                    panic!("{err}");
                }
            }
        }
    }
}
