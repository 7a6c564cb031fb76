//! Constituent ("munícipe") domain model.
//!
//! # Responsibility
//! - Define the registry record for a citizen on file with the office.
//!
//! # Invariants
//! - `cpf` is the natural primary key and is immutable once registered.
//! - `neighborhood` always carries a value; absent input falls back to a
//!   placeholder so older rows and new rows read the same.

use serde::{Deserialize, Serialize};

/// Placeholder stored when a constituent was registered without a
/// neighborhood (pre-dates the column or the field was left blank).
pub const NEIGHBORHOOD_UNKNOWN: &str = "Não informado";

/// Registry record for a citizen on file with the office.
///
/// All fields except `cpf` may be rewritten by an update; `cpf` is the
/// immutable natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    /// National identifier, primary key.
    pub cpf: String,
    /// Full name. Required by the schema (NOT NULL).
    pub name: String,
    /// Street address (nullable).
    pub address: Option<String>,
    /// Neighborhood; defaults to [`NEIGHBORHOOD_UNKNOWN`] when not given.
    pub neighborhood: String,
    /// Contact phone. Required by the schema (NOT NULL).
    pub phone: String,
    /// National document number, RG (nullable).
    pub document_number: Option<String>,
    /// Voter registration title (nullable).
    pub voter_title: Option<String>,
    /// Voter registration zone (nullable).
    pub voter_zone: Option<String>,
    /// Voter registration section (nullable).
    pub voter_section: Option<String>,
}

impl Constituent {
    /// Creates a record with the required fields set and every optional
    /// field empty.
    pub fn new(
        cpf: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            address: None,
            neighborhood: NEIGHBORHOOD_UNKNOWN.to_string(),
            phone: phone.into(),
            document_number: None,
            voter_title: None,
            voter_zone: None,
            voter_section: None,
        }
    }
}
