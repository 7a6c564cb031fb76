//! Desk-facing service facade.
//!
//! # Responsibility
//! - Provide the operations the UI calls: constituent registry CRUD,
//!   request intake/history, report generation.
//! - Stamp registration timestamps and intake defaults.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Selector reports refuse to write a file for an empty selection.

use crate::model::constituent::Constituent;
use crate::model::request::{NewServiceRequest, RequestRecord, RequestType};
use crate::repo::constituent_repo::ConstituentRepository;
use crate::repo::filter::RequestFilter;
use crate::repo::request_repo::{RequestRepository, RequestUpdate};
use crate::report::{DEFAULT_REPORT_FILE, ReportOutcome, render_report};
use crate::service::{ServiceError, ServiceResult};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Timestamp layout stored in `data_horario`.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Facade aggregating registry, history and reporting use-cases.
///
/// Generic over the repository traits so tests can substitute storage.
pub struct OfficeService<C: ConstituentRepository, R: RequestRepository> {
    constituents: C,
    requests: R,
}

impl<C: ConstituentRepository, R: RequestRepository> OfficeService<C, R> {
    /// Creates a facade over the provided repository implementations.
    pub fn new(constituents: C, requests: R) -> Self {
        Self {
            constituents,
            requests,
        }
    }

    /// Registers a constituent; an already-registered CPF is a silent
    /// no-op (the stored record is never overwritten by this path).
    pub fn register_constituent(&self, constituent: &Constituent) -> ServiceResult<()> {
        self.constituents.register(constituent)?;
        Ok(())
    }

    /// Looks one constituent up by exact CPF.
    pub fn find_constituent(&self, cpf: &str) -> ServiceResult<Option<Constituent>> {
        Ok(self.constituents.find_by_cpf(cpf)?)
    }

    /// Substring search across constituent name and CPF.
    pub fn search_constituents(&self, term: &str) -> ServiceResult<Vec<Constituent>> {
        Ok(self.constituents.search(term)?)
    }

    /// Overwrites every mutable field of an existing constituent.
    pub fn update_constituent(&self, constituent: &Constituent) -> ServiceResult<()> {
        self.constituents.update(constituent)?;
        Ok(())
    }

    /// Returns the whole constituent registry.
    pub fn list_constituents(&self) -> ServiceResult<Vec<Constituent>> {
        Ok(self.constituents.list_all()?)
    }

    /// Registers a service request, stamping the current local time.
    ///
    /// # Contract
    /// - `created_at` is captured here, second precision, local time.
    /// - Intake defaults (`Pendente`, `Normal`) come from the draft.
    /// - Returns the storage-assigned id.
    pub fn register_request(&self, request: &NewServiceRequest) -> ServiceResult<i64> {
        let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();
        Ok(self.requests.insert(request, &created_at)?)
    }

    /// Lists request history, most recent first, honoring the filter.
    pub fn list_requests(&self, filter: &RequestFilter) -> ServiceResult<Vec<RequestRecord>> {
        Ok(self.requests.list(filter)?)
    }

    /// Overwrites the mutable fields of an existing request.
    pub fn update_request(&self, id: i64, update: &RequestUpdate) -> ServiceResult<()> {
        self.requests.update(id, update)?;
        Ok(())
    }

    /// Renders the given records to a PDF at `path`.
    ///
    /// An empty record set still produces a valid one-page document; the
    /// caller decides whether that is worth showing.
    pub fn generate_report(
        &self,
        records: &[RequestRecord],
        path: &Path,
    ) -> ServiceResult<ReportOutcome> {
        Ok(render_report(records, path)?)
    }

    /// Full-history report at `path`, or `relatorio_atendimentos.pdf` in
    /// the current directory when no path is given.
    pub fn report_all(&self, path: Option<&Path>) -> ServiceResult<ReportOutcome> {
        let records = self.requests.list(&RequestFilter::all())?;
        let path = named_or(path, DEFAULT_REPORT_FILE);
        self.generate_report(&records, &path)
    }

    /// Report of one constituent's requests. Fails with
    /// [`ServiceError::NoRecords`] when the CPF has no requests on file.
    pub fn report_by_constituent(
        &self,
        cpf: &str,
        path: Option<&Path>,
    ) -> ServiceResult<ReportOutcome> {
        let records = self.requests.list(&RequestFilter::by_constituent(cpf))?;
        let path = named_or(path, &format!("relatorio_cpf_{}.pdf", slug(cpf)));
        self.selector_report(&records, &path)
    }

    /// Report of all requests in one category. Fails with
    /// [`ServiceError::NoRecords`] for an empty category.
    pub fn report_by_type(
        &self,
        request_type: RequestType,
        path: Option<&Path>,
    ) -> ServiceResult<ReportOutcome> {
        let records = self.requests.list(&RequestFilter::by_type(request_type))?;
        let path = named_or(
            path,
            &format!("relatorio_tipo_{}.pdf", slug(request_type.as_db_str())),
        );
        self.selector_report(&records, &path)
    }

    /// Report of all requests from one neighborhood. Fails with
    /// [`ServiceError::NoRecords`] when nothing matches.
    pub fn report_by_neighborhood(
        &self,
        neighborhood: &str,
        path: Option<&Path>,
    ) -> ServiceResult<ReportOutcome> {
        let records = self
            .requests
            .list(&RequestFilter::by_neighborhood(neighborhood))?;
        let path = named_or(path, &format!("relatorio_bairro_{}.pdf", slug(neighborhood)));
        self.selector_report(&records, &path)
    }

    fn selector_report(
        &self,
        records: &[RequestRecord],
        path: &Path,
    ) -> ServiceResult<ReportOutcome> {
        if records.is_empty() {
            return Err(ServiceError::NoRecords);
        }
        self.generate_report(records, path)
    }
}

fn named_or(path: Option<&Path>, default_name: &str) -> PathBuf {
    path.map_or_else(|| PathBuf::from(default_name), Path::to_path_buf)
}

/// Lowercases and squashes a label into a file-name-safe token.
fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_was_sep = true;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn slug_squashes_labels_into_file_tokens() {
        assert_eq!(slug("Pedido de Melhorias no Bairro"), "pedido_de_melhorias_no_bairro");
        assert_eq!(slug("Centro"), "centro");
        assert_eq!(slug("  Vila Nova  "), "vila_nova");
        assert_eq!(slug("Solicitação de Evento Comunitário"), "solicitação_de_evento_comunitário");
    }
}
