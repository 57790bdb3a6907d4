// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Writes a small web page to stdout.
//!
//! Run with `RUST_LOG=trace` to see every element being opened and closed.

use std::io;

use prtml::emitter::Emitter;
use prtml::error::{EmitResult, Error};
use prtml::sink::IoSink;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Failed to write the page: {0}")]
    Emit(#[from] Error),

    #[error("Failed to write to stdout: {0}")]
    Io(#[from] io::Error),
}

fn write_site<W: std::fmt::Write>(emitter: &mut Emitter<W>) -> EmitResult<()> {
    let mut html = emitter.block("html", None)?;
    {
        let mut head = html.block("head", None)?;
        head.meta("title", None)?.text("Home")?;
    }
    let mut body = html.block("body", None)?;
    body.block("h1", None)?.text("Welcome")?;
    {
        let mut p = body.block("p", None)?;
        p.text("Welcome to my ")?;
        p.inline("b", None)?.text("website")?;
        p.text("!")?;
    }
    let mut div = body.block("div", Some("style='font-family: Bahnschrift'"))?;
    let line_terminator = div.options().line_terminator.clone();
    div.text(&format!("Line 1{line_terminator}Still line 1"))?;
    div.void_meta("br", None)?;
    div.text("Line 2")?;
    Ok(())
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut emitter = Emitter::new(IoSink::new(io::stdout().lock()));
    let written = write_site(&mut emitter);
    let mut sink = emitter.into_inner()?;
    if let Err(err) = written {
        return Err(sink.take_error().map_or(DemoError::Emit(err), DemoError::Io));
    }
    sink.flush()?;
    Ok(())
}
