//! Named capabilities used by screens and actions.
//!
//! Each capability maps to the requirement its call sites enforce. Some use
//! the minimum-role policy and some an explicit allow-list; the mapping keeps
//! whichever policy applies instead of normalizing them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AccessDenied;
use crate::gate::AccessRequirement;
use crate::principal::Principal;
use crate::role::Role;

const ADMINS: [Role; 2] = [Role::Superadmin, Role::Admin];
const MANAGERS_AND_ADMINS: [Role; 3] = [Role::Superadmin, Role::Admin, Role::Manager];
const SUPERADMIN_ONLY: [Role; 1] = [Role::Superadmin];

/// A gated feature or action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ManageTeams,
    ManageUsers,
    ViewSystemMonitor,
    ResetPasswords,
    CreateTrainingContent,
    ManageOnboarding,
    ViewManagerDashboard,
    GenerateInviteCodes,
    DeleteUsers,
    ManageInventoryAssignments,
    ViewEmployeeRecords,
    /// Offer the "all teams" option in team selectors.
    ViewAllTeams,
    AssignTraining,
    ManageInventoryRecords,
}

impl Capability {
    pub const ALL: [Capability; 14] = [
        Self::ManageTeams,
        Self::ManageUsers,
        Self::ViewSystemMonitor,
        Self::ResetPasswords,
        Self::CreateTrainingContent,
        Self::ManageOnboarding,
        Self::ViewManagerDashboard,
        Self::GenerateInviteCodes,
        Self::DeleteUsers,
        Self::ManageInventoryAssignments,
        Self::ViewEmployeeRecords,
        Self::ViewAllTeams,
        Self::AssignTraining,
        Self::ManageInventoryRecords,
    ];

    /// The requirement a principal must meet to use this capability.
    #[must_use]
    pub fn requirement(self) -> AccessRequirement {
        match self {
            Self::ManageTeams | Self::ManageUsers | Self::ViewSystemMonitor | Self::ResetPasswords => {
                AccessRequirement::AllowList(ADMINS.to_vec())
            }
            Self::CreateTrainingContent | Self::ManageOnboarding | Self::ViewManagerDashboard => {
                AccessRequirement::AllowList(MANAGERS_AND_ADMINS.to_vec())
            }
            Self::GenerateInviteCodes | Self::DeleteUsers => {
                AccessRequirement::AllowList(SUPERADMIN_ONLY.to_vec())
            }
            Self::ManageInventoryAssignments | Self::ViewEmployeeRecords => {
                AccessRequirement::MinimumRole(Role::Manager)
            }
            Self::ViewAllTeams | Self::AssignTraining | Self::ManageInventoryRecords => {
                AccessRequirement::MinimumRole(Role::Admin)
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ManageTeams => "manage_teams",
            Self::ManageUsers => "manage_users",
            Self::ViewSystemMonitor => "view_system_monitor",
            Self::ResetPasswords => "reset_passwords",
            Self::CreateTrainingContent => "create_training_content",
            Self::ManageOnboarding => "manage_onboarding",
            Self::ViewManagerDashboard => "view_manager_dashboard",
            Self::GenerateInviteCodes => "generate_invite_codes",
            Self::DeleteUsers => "delete_users",
            Self::ManageInventoryAssignments => "manage_inventory_assignments",
            Self::ViewEmployeeRecords => "view_employee_records",
            Self::ViewAllTeams => "view_all_teams",
            Self::AssignTraining => "assign_training",
            Self::ManageInventoryRecords => "manage_inventory_records",
        }
    }

    /// Checks whether a possibly absent principal holds this capability.
    ///
    /// # Errors
    ///
    /// Returns the denial reason.
    pub fn check(self, principal: Option<&Principal>) -> Result<(), AccessDenied> {
        let principal = principal.ok_or(AccessDenied::NotAuthenticated)?;
        self.requirement().check(principal).inspect_err(|reason| {
            tracing::debug!(
                capability = %self,
                user_id = %principal.id(),
                reason = %reason,
                "Capability denied"
            );
        })
    }

    /// Returns true if the principal holds this capability.
    #[must_use]
    pub fn is_granted_to(self, principal: Option<&Principal>) -> bool {
        self.check(principal).is_ok()
    }

    /// Every capability the principal holds.
    #[must_use]
    pub fn granted_to(principal: &Principal) -> Vec<Capability> {
        Self::ALL
            .into_iter()
            .filter(|capability| capability.requirement().is_met_by(principal))
            .collect()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
