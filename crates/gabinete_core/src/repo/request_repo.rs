//! Service request repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Append and update atendimentos rows.
//! - Run the history query joined with the owning constituent.
//!
//! # Invariants
//! - Ids are storage-assigned (AUTOINCREMENT) and strictly increasing.
//! - `created_at` is written once at insert time and never updated.
//! - History listings are ordered most recent first.

use crate::model::request::{
    NewServiceRequest, Priority, RequestRecord, RequestStatus, RequestType,
};
use crate::repo::filter::RequestFilter;
use crate::repo::{RepoError, RepoResult};
use log::{debug, warn};
use rusqlite::{Connection, Row, params, params_from_iter};

const REQUEST_SELECT_SQL: &str = "SELECT
    a.id,
    a.cpf,
    a.tipo_pedido,
    a.descricao,
    a.anexos,
    a.data_horario,
    a.prazo,
    a.responsavel,
    a.prioridade,
    a.status,
    m.nome,
    m.telefone
FROM atendimentos a
JOIN municipes m ON a.cpf = m.cpf";

/// Mutable fields accepted by [`RequestRepository::update`].
///
/// `created_at` is deliberately absent; the registration timestamp is
/// immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUpdate {
    pub constituent_cpf: String,
    pub request_type: RequestType,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub handler: Option<String>,
    pub priority: Priority,
    pub status: RequestStatus,
}

/// Repository interface for service request persistence.
pub trait RequestRepository {
    /// Appends a new request row and returns its assigned id. The caller
    /// supplies `created_at` (`YYYY-MM-DD HH:MM:SS`, local time).
    fn insert(&self, request: &NewServiceRequest, created_at: &str) -> RepoResult<i64>;
    /// Overwrites the mutable fields of the row with the given id.
    /// A missing id affects zero rows and is not reported as an error.
    fn update(&self, id: i64, update: &RequestUpdate) -> RepoResult<()>;
    /// Lists requests joined with constituent name/phone, most recent
    /// first, honoring the given filter.
    fn list(&self, filter: &RequestFilter) -> RepoResult<Vec<RequestRecord>>;
}

/// SQLite-backed service request repository.
pub struct SqliteRequestRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRequestRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RequestRepository for SqliteRequestRepository<'_> {
    fn insert(&self, request: &NewServiceRequest, created_at: &str) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO atendimentos (
                cpf,
                tipo_pedido,
                descricao,
                anexos,
                data_horario,
                prazo,
                responsavel,
                prioridade,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                request.constituent_cpf.as_str(),
                request.request_type.as_db_str(),
                request.description.as_deref(),
                request.attachments.as_str(),
                created_at,
                request.deadline.as_deref(),
                request.handler.as_deref(),
                request.priority.as_db_str(),
                request.status.as_db_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(
            "event=request_insert module=repo status=ok id={id} cpf={}",
            request.constituent_cpf
        );
        Ok(id)
    }

    fn update(&self, id: i64, update: &RequestUpdate) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE atendimentos
             SET
                cpf = ?1,
                tipo_pedido = ?2,
                descricao = ?3,
                prazo = ?4,
                responsavel = ?5,
                prioridade = ?6,
                status = ?7
             WHERE id = ?8;",
            params![
                update.constituent_cpf.as_str(),
                update.request_type.as_db_str(),
                update.description.as_deref(),
                update.deadline.as_deref(),
                update.handler.as_deref(),
                update.priority.as_db_str(),
                update.status.as_db_str(),
                id,
            ],
        )?;

        if changed == 0 {
            // Callers cannot distinguish no-op from not-found by design.
            warn!("event=request_update module=repo status=no_rows id={id}");
        }
        Ok(())
    }

    fn list(&self, filter: &RequestFilter) -> RepoResult<Vec<RequestRecord>> {
        let (where_clause, binds) = filter.where_clause();
        let sql = format!(
            "{REQUEST_SELECT_SQL}{where_clause} ORDER BY a.data_horario DESC, a.id DESC;"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(binds))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_request_row(row)?);
        }
        Ok(records)
    }
}

fn parse_request_row(row: &Row<'_>) -> RepoResult<RequestRecord> {
    let type_text: String = row.get("tipo_pedido")?;
    let request_type = RequestType::parse_db_str(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid request type `{type_text}` in atendimentos.tipo_pedido"
        ))
    })?;

    let priority_text: String = row.get("prioridade")?;
    let priority = Priority::parse_db_str(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in atendimentos.prioridade"
        ))
    })?;

    let status_text: String = row.get("status")?;
    let status = RequestStatus::parse_db_str(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in atendimentos.status"
        ))
    })?;

    Ok(RequestRecord {
        id: row.get("id")?,
        constituent_cpf: row.get("cpf")?,
        constituent_name: row.get("nome")?,
        constituent_phone: row.get("telefone")?,
        request_type,
        description: row.get("descricao")?,
        attachments: row.get::<_, Option<String>>("anexos")?.unwrap_or_default(),
        created_at: row.get("data_horario")?,
        deadline: row.get("prazo")?,
        handler: row.get("responsavel")?,
        priority,
        status,
    })
}
