//! Error types for the access crate.
//!
//! - `AccessDenied`: the single outcome of a failed access check, with the
//!   reason attached. Callers handle it locally by redirecting or hiding.
//! - `ConfigError`: access configuration could not be loaded. Returned
//!   wrapped in a rootcause `Report`.

use crate::role::Role;
use std::fmt;

/// Why an access check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    /// No principal is signed in.
    NotAuthenticated,
    /// The principal's role is absent or not a known role.
    UnrecognizedRole,
    /// The principal's role ranks below the required minimum.
    InsufficientRole { required: Role, actual: Role },
    /// The principal's role is not in an explicit allow-list.
    NotInAllowList { allowed: Vec<Role>, actual: Role },
    /// The action may not target the acting principal's own account.
    SelfTarget,
    /// Actor and target belong to different organizations.
    OrganizationMismatch,
    /// The actor may not manage accounts holding the target role.
    TargetRoleNotManageable { actor: Role, target: Role },
}

impl AccessDenied {
    /// Returns true if the denial means the caller should sign in.
    #[must_use]
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "not authenticated"),
            Self::UnrecognizedRole => write!(f, "account has no recognized role"),
            Self::InsufficientRole { required, actual } => {
                write!(f, "role '{actual}' does not meet required role '{required}'")
            }
            Self::NotInAllowList { allowed, actual } => {
                let names: Vec<&str> = allowed.iter().map(|r| r.as_str()).collect();
                write!(f, "role '{actual}' is not one of [{}]", names.join(", "))
            }
            Self::SelfTarget => write!(f, "cannot perform this action on your own account"),
            Self::OrganizationMismatch => {
                write!(f, "target account belongs to another organization")
            }
            Self::TargetRoleNotManageable { actor, target } => {
                write!(f, "role '{actor}' cannot manage accounts with role '{target}'")
            }
        }
    }
}

impl std::error::Error for AccessDenied {}

/// Errors from loading access configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration sources could not be read or deserialized.
    Load { details: String },
    /// A redirect path is not an absolute application path.
    InvalidPath { field: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { details } => {
                write!(f, "failed to load access configuration: {details}")
            }
            Self::InvalidPath { field, value } => {
                write!(f, "{field} must start with '/', got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
