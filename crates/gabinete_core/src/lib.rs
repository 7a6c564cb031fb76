//! Persistence and reporting core for the office service-desk system.
//! This crate is the single source of truth for registry and history
//! invariants; UI layers call in through [`OfficeService`].

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::constituent::{Constituent, NEIGHBORHOOD_UNKNOWN};
pub use model::request::{
    NewServiceRequest, Priority, RequestRecord, RequestStatus, RequestType,
};
pub use repo::constituent_repo::{ConstituentRepository, SqliteConstituentRepository};
pub use repo::filter::RequestFilter;
pub use repo::request_repo::{RequestRepository, RequestUpdate, SqliteRequestRepository};
pub use repo::{RepoError, RepoResult};
pub use report::{DEFAULT_REPORT_FILE, ReportError, ReportOutcome, render_report};
pub use service::office_service::OfficeService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
