//! Filter composition for request history queries.
//!
//! # Responsibility
//! - Translate optional filter fields into one parameterized WHERE clause
//!   over the atendimentos/municipes join.
//!
//! # Invariants
//! - An absent or blank filter contributes no predicate at all (never a
//!   `LIKE '%%'` that matches everything).
//! - Multiple predicates compose with AND, never OR.

use crate::model::request::RequestType;
use rusqlite::types::Value;

/// Optional filters for listing service requests.
///
/// String filters treat empty/whitespace values as unset, so UI code can
/// pass form fields through without pre-checking them.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    /// Substring match on the constituent name.
    pub name: Option<String>,
    /// Exact match on the constituent CPF.
    pub constituent_cpf: Option<String>,
    /// Exact match on the request category.
    pub request_type: Option<RequestType>,
    /// Exact match on the constituent neighborhood.
    pub neighborhood: Option<String>,
}

impl RequestFilter {
    /// Filter matching every request.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter scoped to one constituent by CPF.
    pub fn by_constituent(cpf: impl Into<String>) -> Self {
        Self {
            constituent_cpf: Some(cpf.into()),
            ..Self::default()
        }
    }

    /// Filter scoped to one request category.
    pub fn by_type(request_type: RequestType) -> Self {
        Self {
            request_type: Some(request_type),
            ..Self::default()
        }
    }

    /// Filter scoped to one neighborhood.
    pub fn by_neighborhood(neighborhood: impl Into<String>) -> Self {
        Self {
            neighborhood: Some(neighborhood.into()),
            ..Self::default()
        }
    }

    /// Builds the WHERE clause (including the leading ` WHERE`) and its
    /// bind values. Returns an empty string when no filter is active.
    ///
    /// Table aliases must match the history query: `a` = atendimentos,
    /// `m` = municipes.
    pub fn where_clause(&self) -> (String, Vec<Value>) {
        let mut predicates: Vec<&'static str> = Vec::new();
        let mut binds: Vec<Value> = Vec::new();

        if let Some(name) = active(self.name.as_deref()) {
            predicates.push("m.nome LIKE ?");
            binds.push(Value::Text(format!("%{name}%")));
        }
        if let Some(cpf) = active(self.constituent_cpf.as_deref()) {
            predicates.push("a.cpf = ?");
            binds.push(Value::Text(cpf.to_string()));
        }
        if let Some(kind) = self.request_type {
            predicates.push("a.tipo_pedido = ?");
            binds.push(Value::Text(kind.as_db_str().to_string()));
        }
        if let Some(neighborhood) = active(self.neighborhood.as_deref()) {
            predicates.push("m.bairro = ?");
            binds.push(Value::Text(neighborhood.to_string()));
        }

        if predicates.is_empty() {
            return (String::new(), binds);
        }

        (format!(" WHERE {}", predicates.join(" AND ")), binds)
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.trim()),
        _ => None,
    }
}
