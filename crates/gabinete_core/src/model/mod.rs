//! Domain model for the constituent service desk.
//!
//! # Responsibility
//! - Define the canonical data structures shared by repositories, the
//!   service facade and the report renderer.
//!
//! # Invariants
//! - A constituent is identified by its CPF string and nothing else.
//! - Service request ids are storage-assigned and never reused.

pub mod constituent;
pub mod request;
