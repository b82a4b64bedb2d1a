//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the text it refers to.
//!
//! Errors in `symnet` rarely originate from text typed by a user; they originate from expression
//! trees and training data. To still give useful reports, each [`Error`] owns a rendering of the
//! thing that failed (usually the expression being evaluated), and its spans point into that
//! rendering.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The source id used when building reports for an [`Error`].
pub const SRC_ID: &str = "expr";

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug {
    /// Returns this error kind as [`Any`], so that it can be downcast to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of some rendered text that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The text that the spans of this error index into.
    pub source: String,

    /// The regions of the source text that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given source, spans and kind.
    ///
    /// If no spans are given, the error points at the entire source.
    pub fn new(
        source: impl Into<String>,
        spans: Vec<Range<usize>>,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        let source = source.into();
        let spans = if spans.is_empty() {
            vec![0..source.len()]
        } else {
            spans
        };
        Self { source, spans, kind: Box::new(kind) }
    }

    /// Returns the error kind as the concrete type `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the error kind is of the concrete type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to stderr.
    pub fn report_to_stderr(&self) {
        // nothing sensible to do if stderr itself is gone
        let _ = self.build_report(SRC_ID)
            .eprint((SRC_ID, Source::from(self.source.as_str())));
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.build_report(SRC_ID)
            .write((SRC_ID, Source::from(self.source.as_str())), &mut buf)
            .map_err(|_| fmt::Error)?;
        write!(f, "{}", String::from_utf8_lossy(&buf))
    }
}

impl std::error::Error for Error {}
