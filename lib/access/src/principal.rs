//! The signed-in actor whose role is checked.
//!
//! Principals are produced by the authentication backend and only read here.
//! The role is optional because the backend may report a role this crate does
//! not know; such a principal is denied everything that needs a role.

use serde::{Deserialize, Serialize};
use teamtegrate_core::{OrganizationId, UserId};

use crate::role::{self, Role};

/// An authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account ID.
    id: UserId,
    /// Organization the account belongs to.
    organization_id: OrganizationId,
    /// Role from the account profile; `None` if absent or unrecognized.
    #[serde(default, deserialize_with = "role::deserialize_lenient")]
    role: Option<Role>,
    email: Option<String>,
    name: Option<String>,
}

impl Principal {
    /// Creates a principal with a known role.
    #[must_use]
    pub fn new(id: UserId, organization_id: OrganizationId, role: Role) -> Self {
        Self {
            id,
            organization_id,
            role: Some(role),
            email: None,
            name: None,
        }
    }

    /// Creates a principal from the raw role name stored in the profile.
    ///
    /// Unknown or missing names leave the principal without a role.
    #[must_use]
    pub fn from_profile(
        id: UserId,
        organization_id: OrganizationId,
        role_name: Option<&str>,
    ) -> Self {
        Self {
            id,
            organization_id,
            role: role_name.and_then(Role::parse),
            email: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// The principal's role, if it is one of the known roles.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name to show in menus: the display name, else the email, else "User".
    #[must_use]
    pub fn label(&self) -> &str {
        self.name().or(self.email()).unwrap_or("User")
    }

    /// Minimum-role check against this principal's role.
    #[must_use]
    pub fn has_role_access(&self, required: Role) -> bool {
        role::has_role_access(self.role, required)
    }

    /// Exact allow-list check against this principal's role.
    #[must_use]
    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        self.role.is_some_and(|role| allowed.contains(&role))
    }

    /// Returns true if both principals belong to the same organization.
    #[must_use]
    pub fn same_organization(&self, other: &Principal) -> bool {
        self.organization_id == other.organization_id
    }
}
