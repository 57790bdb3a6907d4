// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Write};

use crate::context::Context;
use crate::element::{Element, ScopeToken, Shape, TokenMinter};
use crate::error::{EmitResult, Error};
use crate::options::FormatOptions;
use crate::scope::Scope;

/// Renders into a fresh `String`.
///
/// This is a convenience wrapper around [`Emitter::with_options`]
/// and [`Emitter::into_inner`].
///
/// # Errors
///
/// Returns whatever `render` fails with,
/// which includes closing elements out of order.
pub fn render_to_string<F>(options: FormatOptions, render: F) -> EmitResult<String>
where
    F: FnOnce(&mut Emitter<String>) -> EmitResult<()>,
{
    let mut emitter = Emitter::with_options(String::new(), options);
    render(&mut emitter)?;
    emitter.into_inner()
}

/// Streams pretty-printed markup into a sink.
///
/// Nothing is buffered:
/// each call writes its part of the document right away,
/// and the only state kept is the stack of open elements
/// and where the cursor currently is.
///
/// Elements are opened either through the scoped API
/// ([`Self::inline`], [`Self::meta`], [`Self::block`]),
/// which closes them when the returned [`Scope`] goes out of scope,
/// or through the token API
/// ([`Self::open_inline`], [`Self::open_meta`], [`Self::open_block`]),
/// which requires calling [`Self::close`] explicitly.
/// Either way, elements have to be closed in reverse order of opening.
///
/// If the sink fails, the error is returned right away,
/// and the document is truncated at that point.
/// The emitters bookkeeping (stack, depth, cursor)
/// reflects the output as it was meant to be written,
/// except for an element whose opening failed:
/// that one is not left open.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    options: FormatOptions,
    context: Context<W>,
    stack: Vec<Element>,
    tokens: TokenMinter,
    /// A sink failure that happened while closing a [`Scope`] on drop,
    /// to be reported by the next operation.
    deferred: Option<fmt::Error>,
}

impl<W: Write> Emitter<W> {
    /// Creates an emitter with default options,
    /// which means the platforms line terminator.
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, FormatOptions::default())
    }

    pub fn with_options(sink: W, options: FormatOptions) -> Self {
        Self {
            options,
            context: Context::new(sink),
            stack: Vec::new(),
            tokens: TokenMinter::default(),
            deferred: None,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// The current level of indentation,
    /// which equals the number of open block elements.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.context.indent_level
    }

    /// Whether the next chunk of output starts a fresh line.
    #[must_use]
    pub const fn is_at_line_start(&self) -> bool {
        self.context.at_line_start
    }

    /// Names of the currently open elements, outermost first.
    pub fn open_elements(&self) -> impl Iterator<Item = &str> {
        self.stack.iter().map(|element| element.name.as_str())
    }

    #[must_use]
    pub const fn sink(&self) -> &W {
        &self.context.output
    }

    /// Releases the sink.
    ///
    /// Elements still open are left as they are;
    /// the document is then incomplete.
    ///
    /// # Errors
    ///
    /// If writing the closing tag of a dropped [`Scope`] failed,
    /// and no operation was called since.
    pub fn into_inner(mut self) -> EmitResult<W> {
        self.take_deferred()?;
        Ok(self.context.output)
    }

    /// Opens an element that flows with the surrounding text.
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn open_inline(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<ScopeToken> {
        self.open(name, attrs, Shape::Inline)
    }

    /// Opens an element that sits on lines of its own,
    /// without indenting its content.
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn open_meta(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<ScopeToken> {
        self.open(name, attrs, Shape::Meta)
    }

    /// Opens an element that sits on lines of its own,
    /// with its content indented one level deeper.
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn open_block(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<ScopeToken> {
        self.open(name, attrs, Shape::Block)
    }

    /// Like [`Self::open_inline`],
    /// but closes the element when the returned scope is dropped.
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn inline(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<Scope<'_, W>> {
        let token = self.open_inline(name, attrs)?;
        Ok(Scope::new(self, token))
    }

    /// Like [`Self::open_meta`],
    /// but closes the element when the returned scope is dropped.
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn meta(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<Scope<'_, W>> {
        let token = self.open_meta(name, attrs)?;
        Ok(Scope::new(self, token))
    }

    /// Like [`Self::open_block`],
    /// but closes the element when the returned scope is dropped.
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn block(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<Scope<'_, W>> {
        let token = self.open_block(name, attrs)?;
        Ok(Scope::new(self, token))
    }

    /// Writes an opening tag without content or closing tag,
    /// flowing with the surrounding text (e.g. `<img src='a.png'>`).
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn void_inline(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<()> {
        self.take_deferred()?;
        self.write_open_tag(name, attrs)
    }

    /// Writes an opening tag without content or closing tag
    /// on a line of its own (e.g. `<br>`).
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn void_meta(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<()> {
        self.take_deferred()?;
        self.newline(0)?;
        self.write_open_tag(name, attrs)?;
        self.newline(0)
    }

    /// Writes content verbatim.
    ///
    /// Text containing the configured line terminator
    /// is written line by line,
    /// each line indented to the current depth.
    /// Empty lines in between are kept, without indentation.
    /// Any other text goes out as a single chunk.
    ///
    /// # Errors
    ///
    /// If the sink fails.
    pub fn text(&mut self, text: &str) -> EmitResult<()> {
        self.take_deferred()?;
        let terminator = self.options.line_terminator.as_str();
        if terminator.is_empty() || !text.contains(terminator) {
            return self.raw(text);
        }

        let mut previous_empty = false;
        for (idx, line) in text.split(terminator).enumerate() {
            if idx > 0 {
                if previous_empty && self.context.at_line_start {
                    self.context.blank_line(terminator)?;
                } else {
                    self.context.force_newline(terminator, 0)?;
                }
            }
            self.context.write_raw(&self.options.indentation, line)?;
            previous_empty = line.is_empty();
        }
        Ok(())
    }

    /// Closes the innermost open element.
    ///
    /// # Errors
    ///
    /// - [`Error::ScopeViolation`] if `token` does not belong to the innermost open element.
    ///   The emitter should not be used after this.
    /// - [`Error::Sink`] if the sink fails.
    pub fn close(&mut self, token: ScopeToken) -> EmitResult<()> {
        self.take_deferred()?;
        self.close_element(token)
    }

    /// Like [`Self::close`], but ignoring any deferred sink failure.
    pub(crate) fn close_element(&mut self, token: ScopeToken) -> EmitResult<()> {
        let element = self.pop(token)?;
        let shape = element.shape;
        tracing::trace!(
            "Closing {shape} element <{}> {token} at depth {}",
            element.name,
            self.depth()
        );
        if shape.breaks_before_close() {
            self.newline(-shape.indent_delta())?;
        }
        self.write_close_tag(&element.name)?;
        if shape.breaks_after_close() {
            self.newline(0)?;
        }
        Ok(())
    }

    /// Remembers a sink failure to be reported by the next operation.
    /// Only the first one is kept.
    pub(crate) fn defer(&mut self, err: fmt::Error) {
        self.deferred.get_or_insert(err);
    }

    pub(crate) fn take_deferred(&mut self) -> EmitResult<()> {
        match self.deferred.take() {
            Some(err) => Err(Error::Sink(err)),
            None => Ok(()),
        }
    }

    fn open(&mut self, name: &str, attrs: Option<&str>, shape: Shape) -> EmitResult<ScopeToken> {
        self.take_deferred()?;
        let token = self.tokens.mint();
        tracing::trace!(
            "Opening {shape} element <{name}> {token} at depth {}",
            self.depth()
        );
        let depth = self.context.indent_level;
        let at_line_start = self.context.at_line_start;
        self.stack.push(Element {
            name: name.to_owned(),
            shape,
            token,
        });
        if let Err(err) = self.write_opening(name, attrs, shape) {
            // No token was handed out, so nothing could close it.
            self.stack.pop();
            self.context.indent_level = depth;
            self.context.at_line_start = at_line_start;
            tracing::debug!("Failed to open element <{name}> {token}: {err}");
            return Err(err);
        }
        Ok(token)
    }

    fn write_opening(&mut self, name: &str, attrs: Option<&str>, shape: Shape) -> EmitResult<()> {
        if shape.breaks_before_open() {
            self.newline(0)?;
        }
        self.write_open_tag(name, attrs)?;
        if shape.breaks_after_open() {
            self.newline(shape.indent_delta())?;
        }
        Ok(())
    }

    fn pop(&mut self, token: ScopeToken) -> EmitResult<Element> {
        match self.stack.pop() {
            Some(element) if element.token == token => Ok(element),
            popped => {
                let top = popped.map(|element| {
                    let top = (element.name.clone(), element.token);
                    self.stack.push(element);
                    top
                });
                let err = Error::ScopeViolation { token, top };
                tracing::error!("{err}");
                Err(err)
            }
        }
    }

    fn write_open_tag(&mut self, name: &str, attrs: Option<&str>) -> EmitResult<()> {
        self.raw("<")?;
        self.raw(name)?;
        if let Some(attrs) = attrs {
            self.raw(" ")?;
            self.raw(attrs)?;
        }
        self.raw(">")
    }

    fn write_close_tag(&mut self, name: &str) -> EmitResult<()> {
        self.raw("</")?;
        self.raw(name)?;
        self.raw(">")
    }

    fn newline(&mut self, depth_delta: isize) -> EmitResult<()> {
        self.context
            .force_newline(&self.options.line_terminator, depth_delta)?;
        Ok(())
    }

    fn raw(&mut self, text: &str) -> EmitResult<()> {
        self.context.write_raw(&self.options.indentation, text)?;
        Ok(())
    }
}
