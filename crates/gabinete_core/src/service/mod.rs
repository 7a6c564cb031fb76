//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and report calls into the desk-facing API.
//! - Keep the UI layer decoupled from storage and PDF details.

use crate::repo::RepoError;
use crate::report::ReportError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod office_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Facade-level error: transport failures plus the one user-visible
/// domain condition (a selector report that matched nothing).
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    Report(ReportError),
    /// A canned report selector matched zero requests; no file is written.
    NoRecords,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Report(err) => write!(f, "{err}"),
            Self::NoRecords => write!(f, "no matching service requests found"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Report(err) => Some(err),
            Self::NoRecords => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ReportError> for ServiceError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}
