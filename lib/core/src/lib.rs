//! Core domain types shared across the TeamTegrate crates.
//!
//! This crate provides the strongly-typed identifiers and the rootcause-based
//! `Result` alias used by every other crate in the workspace.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{OrganizationId, ParseIdError, TeamId, UserId};
