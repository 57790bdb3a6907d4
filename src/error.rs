// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::element::ScopeToken;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An element was closed while it was not the innermost open one.
    ///
    /// This is always a bug in the calling code
    /// (mismatched open/close ordering),
    /// never caused by the content being written.
    /// The emitter should not be used any further after this.
    #[error("Tried to close element {token}, but {}", describe_top(.top.as_ref()))]
    ScopeViolation {
        /// The token that was presented for closing.
        token: ScopeToken,
        /// Name and token of the innermost open element, if any.
        top: Option<(String, ScopeToken)>,
    },

    /// The sink refused a chunk of output.
    #[error(transparent)]
    Sink(#[from] std::fmt::Error),
}

fn describe_top(top: Option<&(String, ScopeToken)>) -> String {
    match top {
        Some((name, token)) => format!("the innermost open element is <{name}> ({token})"),
        None => "no element is open".to_string(),
    }
}

pub type EmitResult<T> = std::result::Result<T, Error>;
