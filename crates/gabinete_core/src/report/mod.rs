//! Paginated PDF reporting for request history.
//!
//! # Responsibility
//! - Serialize an ordered set of request records onto US-Letter pages.
//! - Keep page-break arithmetic separate from PDF emission so it stays
//!   testable without writing files.
//!
//! # Invariants
//! - Records are rendered in input order; pagination never reorders.
//! - A malformed record is skipped with a warning, never aborts a render.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod layout;
mod pdf;

pub use pdf::render_report;

/// Default output file name for an unfiltered history report.
pub const DEFAULT_REPORT_FILE: &str = "relatorio_atendimentos.pdf";

pub type ReportResult<T> = Result<T, ReportError>;

/// What a finished render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Where the document was written.
    pub path: PathBuf,
    /// Total pages in the document (at least 1, even with no records).
    pub pages: usize,
    /// Records actually drawn.
    pub rendered: usize,
    /// Malformed records skipped with a warning.
    pub skipped: usize,
}

#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Pdf(String),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Pdf(message) => write!(f, "pdf generation failed: {message}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Pdf(_) => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
