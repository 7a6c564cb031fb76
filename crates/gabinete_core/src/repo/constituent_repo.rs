//! Constituent repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own persistence of the municipes registry.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `register` never overwrites an existing row (INSERT OR IGNORE).
//! - `update` never touches `cpf`; zero affected rows is not an error.

use crate::model::constituent::Constituent;
use crate::repo::RepoResult;
use log::{debug, warn};
use rusqlite::{Connection, Row, params};

const CONSTITUENT_SELECT_SQL: &str = "SELECT
    cpf,
    nome,
    endereco,
    bairro,
    telefone,
    rg,
    titulo_eleitor,
    zona,
    secao
FROM municipes";

/// Repository interface for the constituent registry.
pub trait ConstituentRepository {
    /// Registers a constituent. If the CPF is already on file the call is
    /// a silent no-op and the stored record keeps its current values.
    ///
    /// Note: a clerk re-entering updated data through the registration
    /// form will therefore not change anything; only `update` rewrites an
    /// existing record. Preserved office behavior, possibly surprising.
    fn register(&self, constituent: &Constituent) -> RepoResult<()>;
    /// Overwrites every mutable field of the row with the given CPF.
    /// A missing CPF affects zero rows and is not reported as an error.
    fn update(&self, constituent: &Constituent) -> RepoResult<()>;
    /// Looks one constituent up by exact CPF.
    fn find_by_cpf(&self, cpf: &str) -> RepoResult<Option<Constituent>>;
    /// Substring search across name and CPF.
    fn search(&self, term: &str) -> RepoResult<Vec<Constituent>>;
    /// Returns the whole registry ordered by name.
    fn list_all(&self) -> RepoResult<Vec<Constituent>>;
}

/// SQLite-backed constituent repository.
pub struct SqliteConstituentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteConstituentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ConstituentRepository for SqliteConstituentRepository<'_> {
    fn register(&self, constituent: &Constituent) -> RepoResult<()> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO municipes (
                cpf,
                nome,
                endereco,
                bairro,
                telefone,
                rg,
                titulo_eleitor,
                zona,
                secao
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                constituent.cpf.as_str(),
                constituent.name.as_str(),
                constituent.address.as_deref(),
                constituent.neighborhood.as_str(),
                constituent.phone.as_str(),
                constituent.document_number.as_deref(),
                constituent.voter_title.as_deref(),
                constituent.voter_zone.as_deref(),
                constituent.voter_section.as_deref(),
            ],
        )?;

        if inserted == 0 {
            debug!(
                "event=constituent_register module=repo status=ignored cpf={}",
                constituent.cpf
            );
        } else {
            debug!(
                "event=constituent_register module=repo status=ok cpf={}",
                constituent.cpf
            );
        }
        Ok(())
    }

    fn update(&self, constituent: &Constituent) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE municipes
             SET
                nome = ?1,
                endereco = ?2,
                bairro = ?3,
                telefone = ?4,
                rg = ?5,
                titulo_eleitor = ?6,
                zona = ?7,
                secao = ?8
             WHERE cpf = ?9;",
            params![
                constituent.name.as_str(),
                constituent.address.as_deref(),
                constituent.neighborhood.as_str(),
                constituent.phone.as_str(),
                constituent.document_number.as_deref(),
                constituent.voter_title.as_deref(),
                constituent.voter_zone.as_deref(),
                constituent.voter_section.as_deref(),
                constituent.cpf.as_str(),
            ],
        )?;

        if changed == 0 {
            // Callers cannot distinguish no-op from not-found by design.
            warn!(
                "event=constituent_update module=repo status=no_rows cpf={}",
                constituent.cpf
            );
        }
        Ok(())
    }

    fn find_by_cpf(&self, cpf: &str) -> RepoResult<Option<Constituent>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONSTITUENT_SELECT_SQL} WHERE cpf = ?1;"))?;

        let mut rows = stmt.query(params![cpf])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_constituent_row(row)?));
        }
        Ok(None)
    }

    fn search(&self, term: &str) -> RepoResult<Vec<Constituent>> {
        let pattern = format!("%{}%", term.trim());
        let mut stmt = self.conn.prepare(&format!(
            "{CONSTITUENT_SELECT_SQL}
             WHERE nome LIKE ?1 OR cpf LIKE ?1
             ORDER BY nome ASC;"
        ))?;

        let mut rows = stmt.query(params![pattern])?;
        let mut constituents = Vec::new();
        while let Some(row) = rows.next()? {
            constituents.push(parse_constituent_row(row)?);
        }
        Ok(constituents)
    }

    fn list_all(&self) -> RepoResult<Vec<Constituent>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONSTITUENT_SELECT_SQL} ORDER BY nome ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut constituents = Vec::new();
        while let Some(row) = rows.next()? {
            constituents.push(parse_constituent_row(row)?);
        }
        Ok(constituents)
    }
}

fn parse_constituent_row(row: &Row<'_>) -> RepoResult<Constituent> {
    Ok(Constituent {
        cpf: row.get("cpf")?,
        name: row.get("nome")?,
        address: row.get("endereco")?,
        neighborhood: row.get("bairro")?,
        phone: row.get("telefone")?,
        document_number: row.get("rg")?,
        voter_title: row.get("titulo_eleitor")?,
        voter_zone: row.get("zona")?,
        voter_section: row.get("secao")?,
    })
}
