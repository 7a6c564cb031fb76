//! Service request ("atendimento") domain model.
//!
//! # Responsibility
//! - Define the write model for new requests and the joined read model
//!   returned by history queries.
//! - Map the closed category/priority/status sets to their stored strings.
//!
//! # Invariants
//! - `created_at` is stamped once at registration time and never modified.
//! - Stored enum strings are the exact Portuguese labels the office uses;
//!   they double as display text in reports.

use serde::{Deserialize, Serialize};

/// Closed set of request categories offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Public service complaint.
    PublicServiceComplaint,
    /// Request for health support.
    HealthSupport,
    /// Request for neighborhood improvements.
    NeighborhoodImprovement,
    /// Request for a community event.
    CommunityEvent,
    /// Thank-you message to the council member.
    Appreciation,
    /// Community project proposal.
    CommunityProject,
    /// Animal care request.
    AnimalCare,
    /// Animal abuse report.
    AnimalAbuseReport,
}

impl RequestType {
    /// Stored/display label for this category.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::PublicServiceComplaint => "Reclamação de Serviço Público",
            Self::HealthSupport => "Solicitação de Apoio para Saúde",
            Self::NeighborhoodImprovement => "Pedido de Melhorias no Bairro",
            Self::CommunityEvent => "Solicitação de Evento Comunitário",
            Self::Appreciation => "Agradecimento ao Vereador",
            Self::CommunityProject => "Proposta de Projeto para a Comunidade",
            Self::AnimalCare => "Solicitação de Atendimento Animal",
            Self::AnimalAbuseReport => "Denúncia de Maus-Tratos a Animais",
        }
    }

    /// Parses a stored label back into its category.
    pub fn parse_db_str(value: &str) -> Option<Self> {
        match value {
            "Reclamação de Serviço Público" => Some(Self::PublicServiceComplaint),
            "Solicitação de Apoio para Saúde" => Some(Self::HealthSupport),
            "Pedido de Melhorias no Bairro" => Some(Self::NeighborhoodImprovement),
            "Solicitação de Evento Comunitário" => Some(Self::CommunityEvent),
            "Agradecimento ao Vereador" => Some(Self::Appreciation),
            "Proposta de Projeto para a Comunidade" => Some(Self::CommunityProject),
            "Solicitação de Atendimento Animal" => Some(Self::AnimalCare),
            "Denúncia de Maus-Tratos a Animais" => Some(Self::AnimalAbuseReport),
            _ => None,
        }
    }
}

/// Handling priority for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default intake priority.
    #[default]
    Normal,
    /// Needs attention first.
    High,
}

impl Priority {
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Normal => "Normal",
            Self::High => "Alta",
        }
    }

    pub fn parse_db_str(value: &str) -> Option<Self> {
        match value {
            "Baixa" => Some(Self::Low),
            "Normal" => Some(Self::Normal),
            "Alta" => Some(Self::High),
            _ => None,
        }
    }
}

/// Lifecycle state of a request, from intake to resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Registered, nobody picked it up yet.
    #[default]
    Pending,
    /// Being worked by a handler.
    InProgress,
    /// Resolved and closed.
    Completed,
}

impl RequestStatus {
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::InProgress => "Em Andamento",
            Self::Completed => "Concluído",
        }
    }

    pub fn parse_db_str(value: &str) -> Option<Self> {
        match value {
            "Pendente" => Some(Self::Pending),
            "Em Andamento" => Some(Self::InProgress),
            "Concluído" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Write model for registering a request against a constituent.
///
/// The storage layer assigns the integer id; the caller stamps
/// `created_at` at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServiceRequest {
    /// CPF of the owning constituent. Must reference a registered row.
    pub constituent_cpf: String,
    /// Request category.
    pub request_type: RequestType,
    /// Free-text description (nullable).
    pub description: Option<String>,
    /// Attachment placeholder; always empty today, kept for the stored
    /// shape so existing databases stay readable.
    pub attachments: String,
    /// Resolution deadline, free text (nullable).
    pub deadline: Option<String>,
    /// Name of the assigned handler (nullable).
    pub handler: Option<String>,
    /// Handling priority; defaults to `Normal`.
    pub priority: Priority,
    /// Lifecycle state; defaults to `Pending`.
    pub status: RequestStatus,
}

impl NewServiceRequest {
    /// Creates a draft with intake defaults (`Pending`, `Normal`, no
    /// description, no deadline, no handler).
    pub fn new(constituent_cpf: impl Into<String>, request_type: RequestType) -> Self {
        Self {
            constituent_cpf: constituent_cpf.into(),
            request_type,
            description: None,
            attachments: String::new(),
            deadline: None,
            handler: None,
            priority: Priority::default(),
            status: RequestStatus::default(),
        }
    }
}

/// Read model for request history: one request joined with the name and
/// phone of its owning constituent.
///
/// Fields are accessed by name everywhere; no caller may depend on column
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// Storage-assigned id, strictly increasing.
    pub id: i64,
    /// CPF of the owning constituent.
    pub constituent_cpf: String,
    /// Name of the owning constituent (joined).
    pub constituent_name: String,
    /// Phone of the owning constituent (joined).
    pub constituent_phone: String,
    /// Request category.
    pub request_type: RequestType,
    /// Free-text description (nullable).
    pub description: Option<String>,
    /// Attachment placeholder, see [`NewServiceRequest::attachments`].
    pub attachments: String,
    /// Registration timestamp, `YYYY-MM-DD HH:MM:SS` local time.
    pub created_at: String,
    /// Resolution deadline (nullable).
    pub deadline: Option<String>,
    /// Assigned handler name (nullable).
    pub handler: Option<String>,
    /// Handling priority.
    pub priority: Priority,
    /// Lifecycle state.
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::{Priority, RequestStatus, RequestType};

    #[test]
    fn request_type_db_strings_round_trip() {
        let all = [
            RequestType::PublicServiceComplaint,
            RequestType::HealthSupport,
            RequestType::NeighborhoodImprovement,
            RequestType::CommunityEvent,
            RequestType::Appreciation,
            RequestType::CommunityProject,
            RequestType::AnimalCare,
            RequestType::AnimalAbuseReport,
        ];
        for kind in all {
            assert_eq!(RequestType::parse_db_str(kind.as_db_str()), Some(kind));
        }
        assert_eq!(RequestType::parse_db_str("Outra Coisa"), None);
    }

    #[test]
    fn priority_and_status_defaults_match_intake() {
        assert_eq!(Priority::default(), Priority::Normal);
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
        assert_eq!(RequestStatus::default().as_db_str(), "Pendente");
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
