//! Error types with rich diagnostics using miette
//!
//! The geometry core never fails. These errors come from the edges of the
//! crate: reading path descriptions back, validating host input and options,
//! and writing rendered output.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Path Parse Errors
// ============================================================================

/// Errors that occur while parsing a path description
#[derive(Error, Diagnostic, Debug)]
pub enum PathParseError {
    #[error("invalid path syntax: {message}")]
    #[diagnostic(
        code(spinner::path::syntax),
        help("commands are one of M m L l H h V v S s Z z followed by their numeric arguments")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(spinner::path::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },
}

// ============================================================================
// Schematic Errors
// ============================================================================

/// Errors raised at the host boundary
#[derive(Error, Diagnostic, Debug)]
pub enum SchematicError {
    #[error("invalid parameter `{name}`: {source}")]
    #[diagnostic(
        code(spinner::params::invalid),
        help("radii and bearing sizes are millimeters and must be finite and positive")
    )]
    InvalidParameter {
        name: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("branch count must be at least 1")]
    #[diagnostic(
        code(spinner::params::no_branches),
        help("a spinner needs at least one arm; three or more gives the usual shape")
    )]
    NoBranches,

    #[error("invalid render option `{name}`: {reason}")]
    #[diagnostic(code(spinner::render::invalid_option))]
    InvalidOption { name: &'static str, reason: String },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(spinner::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
