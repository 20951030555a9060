//! Styled terminal output for `zome-scaffold-ctl`.
//!
//! Status messages go through `anstream`, which strips ANSI codes when the
//! stream is not a terminal. Generated source printed with [`source`] is
//! never styled so it can be piped straight into a file.

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{EMPHASIS, ERROR, MUTED, SUCCESS, WARNING};

pub(crate) fn success(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{SUCCESS}✓ {msg}{SUCCESS:#}").ok();
}

pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

pub(crate) fn warning(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

pub(crate) fn header(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{EMPHASIS}{msg}{EMPHASIS:#}").ok();
}

/// "  Label: value" with the label bolded.
pub(crate) fn label(name: impl std::fmt::Display, value: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "  {EMPHASIS}{name}:{EMPHASIS:#} {value}").ok();
}

pub(crate) fn hint(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{MUTED}{msg}{MUTED:#}").ok();
}

pub(crate) fn item(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "  • {msg}").ok();
}

/// Write generated source to stdout, untouched.
pub(crate) fn source(content: &str) {
    let mut out = std::io::stdout().lock();
    write!(out, "{content}").ok();
}
