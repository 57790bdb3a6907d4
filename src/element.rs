// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Proof that an element was opened,
/// required to close it again.
///
/// Tokens are unique within the emitter that handed them out,
/// and carry no meaning beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeToken(u64);

impl ScopeToken {
    #[must_use]
    pub(crate) const fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ScopeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh tokens, one per opened element.
#[derive(Debug, Default)]
pub(crate) struct TokenMinter {
    last: u64,
}

impl TokenMinter {
    pub(crate) const fn mint(&mut self) -> ScopeToken {
        self.last += 1;
        ScopeToken::from_raw(self.last)
    }
}

/// How an element is laid out relative to its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// ```html
    /// Outer content<name attrs>Inner content</name>Outer content
    /// ```
    Inline,
    /// ```html
    /// Outer content
    /// <name attrs>
    /// Inner content
    /// </name>
    /// Outer content
    /// ```
    Meta,
    /// ```html
    /// Outer content
    /// <name attrs>
    ///     Inner content
    /// </name>
    /// Outer content
    /// ```
    Block,
}

impl Shape {
    /// Whether the opening tag has to start on a fresh line.
    #[must_use]
    pub const fn breaks_before_open(self) -> bool {
        !matches!(self, Self::Inline)
    }

    /// Whether the content following the opening tag starts on a fresh line.
    #[must_use]
    pub const fn breaks_after_open(self) -> bool {
        !matches!(self, Self::Inline)
    }

    /// Whether the closing tag has to start on a fresh line.
    #[must_use]
    pub const fn breaks_before_close(self) -> bool {
        matches!(self, Self::Block)
    }

    /// Whether whatever follows the closing tag starts on a fresh line.
    #[must_use]
    pub const fn breaks_after_close(self) -> bool {
        !matches!(self, Self::Inline)
    }

    /// By how much the content of such an element is indented,
    /// relative to its tags.
    #[must_use]
    pub const fn indent_delta(self) -> isize {
        match self {
            Self::Block => 1,
            Self::Inline | Self::Meta => 0,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inline => "inline",
            Self::Meta => "meta",
            Self::Block => "block",
        })
    }
}

/// An element that was opened and not yet closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub shape: Shape,
    pub token: ScopeToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let mut minter = TokenMinter::default();
        let first = minter.mint();
        let second = minter.mint();
        assert_ne!(first, second);
        assert_eq!(second.to_string(), "#2");
    }

    #[test]
    fn only_blocks_indent() {
        assert_eq!(Shape::Block.indent_delta(), 1);
        assert_eq!(Shape::Meta.indent_delta(), 0);
        assert_eq!(Shape::Inline.indent_delta(), 0);
    }

    #[test]
    fn inline_never_breaks() {
        let shape = Shape::Inline;
        assert!(!shape.breaks_before_open());
        assert!(!shape.breaks_after_open());
        assert!(!shape.breaks_before_close());
        assert!(!shape.breaks_after_close());
    }

    #[test]
    fn meta_closes_inline() {
        let shape = Shape::Meta;
        assert!(shape.breaks_before_open());
        assert!(shape.breaks_after_open());
        assert!(!shape.breaks_before_close());
        assert!(shape.breaks_after_close());
    }
}
