//! The role hierarchy.
//!
//! Every account holds exactly one role from a closed, totally ordered set:
//! `user < manager < admin < superadmin`. A role satisfies a requirement when
//! its rank is greater than or equal to the required rank.
//!
//! Role values arrive from the authentication backend as plain strings, so
//! the hierarchy also answers questions about raw names. Anything that is not
//! one of the four known names is treated as "no access".

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role, ordered by increasing privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular team member.
    User,
    /// Manages projects and team members.
    Manager,
    /// Manages users and organization settings.
    Admin,
    /// Full control, including invites and account deletion.
    Superadmin,
}

impl Role {
    /// All roles in rank order, lowest first.
    pub const ALL: [Role; 4] = [Role::User, Role::Manager, Role::Admin, Role::Superadmin];

    /// Position of this role in the hierarchy (`user` is 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::User => 0,
            Self::Manager => 1,
            Self::Admin => 2,
            Self::Superadmin => 3,
        }
    }

    /// Returns true if this role meets a minimum-role requirement.
    ///
    /// Equality satisfies the requirement.
    #[must_use]
    pub const fn satisfies(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    /// Returns true for `admin` and `superadmin`.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        self.satisfies(Self::Admin)
    }

    /// The lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Manager => "manager",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// Human-readable name for badges and menus.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
            Self::Superadmin => "Super Admin",
        }
    }

    /// One-line summary of what the role may do.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::User => "Basic user with limited permissions",
            Self::Manager => "Can manage projects and team members",
            Self::Admin => "Can manage users and organization settings",
            Self::Superadmin => "Full control over the organization",
        }
    }

    /// Parses a wire name, returning `None` for anything unrecognized.
    ///
    /// Matching is exact: `"Admin"` or `" admin"` are not roles.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }

    /// Every role strictly below this one, highest first.
    #[must_use]
    pub fn subordinates(self) -> Vec<Role> {
        Self::ALL
            .into_iter()
            .rev()
            .filter(|role| role.rank() < self.rank())
            .collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`Role::from_str`] for unknown role names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.input)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseRoleError {
            input: s.to_string(),
        })
    }
}

/// Checks whether `current` satisfies a minimum-role requirement.
///
/// An absent current role never has access.
#[must_use]
pub fn has_role_access(current: Option<Role>, required: Role) -> bool {
    current.is_some_and(|role| role.satisfies(required))
}

/// Same as [`has_role_access`] for raw role names from the backend.
///
/// Returns false if either name is not a known role.
#[must_use]
pub fn has_role_access_by_name(current: Option<&str>, required: &str) -> bool {
    match Role::parse(required) {
        Some(required) => has_role_access(current.and_then(Role::parse), required),
        None => false,
    }
}

/// Deserializes an optional role, mapping unknown names to `None`.
///
/// Used for records written by the backend, where an unexpected role string
/// must not abort loading the whole record.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_declaration_order() {
        let ranks: Vec<u8> = Role::ALL.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert!(Role::User < Role::Manager);
        assert!(Role::Admin < Role::Superadmin);
    }

    #[test]
    fn access_table_matches_rank_comparison() {
        for current in Role::ALL {
            for required in Role::ALL {
                assert_eq!(
                    has_role_access(Some(current), required),
                    current.rank() >= required.rank(),
                    "{current} vs {required}"
                );
            }
        }
    }

    #[test]
    fn user_cannot_reach_admin() {
        assert!(!has_role_access(Some(Role::User), Role::Admin));
    }

    #[test]
    fn admin_reaches_manager() {
        assert!(has_role_access(Some(Role::Admin), Role::Manager));
    }

    #[test]
    fn equal_role_is_enough() {
        assert!(has_role_access(Some(Role::Manager), Role::Manager));
    }

    #[test]
    fn absent_role_has_no_access() {
        assert!(!has_role_access(None, Role::User));
    }

    #[test]
    fn by_name_mirrors_typed_check() {
        assert!(has_role_access_by_name(Some("superadmin"), "admin"));
        assert!(!has_role_access_by_name(Some("user"), "manager"));
    }

    #[test]
    fn by_name_fails_closed_on_unknown_names() {
        assert!(!has_role_access_by_name(Some("owner"), "user"));
        assert!(!has_role_access_by_name(Some("Admin"), "user"));
        assert!(!has_role_access_by_name(None, "user"));
        assert!(!has_role_access_by_name(Some("superadmin"), "team_leader"));
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(Role::parse("manager"), Some(Role::Manager));
        assert_eq!(Role::parse("MANAGER"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn from_str_reports_input() {
        let err = "team_leader".parse::<Role>().expect_err("unknown role");
        assert_eq!(err.input, "team_leader");
        assert!(err.to_string().contains("team_leader"));
    }

    #[test]
    fn is_admin_covers_superadmin() {
        assert!(!Role::Manager.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(Role::Superadmin.is_admin());
    }

    #[test]
    fn subordinates_are_strictly_lower() {
        assert_eq!(
            Role::Superadmin.subordinates(),
            vec![Role::Admin, Role::Manager, Role::User]
        );
        assert_eq!(Role::Manager.subordinates(), vec![Role::User]);
        assert!(Role::User.subordinates().is_empty());
    }

    #[test]
    fn display_names() {
        assert_eq!(Role::Superadmin.display_name(), "Super Admin");
        assert_eq!(Role::Manager.to_string(), "manager");
    }

    #[test]
    fn serialization_format() {
        let json = serde_json::to_string(&Role::Superadmin).expect("serialize");
        assert_eq!(json, "\"superadmin\"");
        let parsed: Role = serde_json::from_str("\"manager\"").expect("deserialize");
        assert_eq!(parsed, Role::Manager);
    }
}
