//! Access gate: decides whether guarded content may be shown.
//!
//! A gate pairs an [`AccessRequirement`] with the redirect destinations from
//! [`AccessConfig`]. Evaluating it against an [`AuthState`] yields one of:
//!
//! - `Pending` while authentication is still resolving,
//! - `Granted` when the principal meets the requirement,
//! - `Denied` with the reason and the path to redirect to.
//!
//! Evaluation is a pure function of the gate and the state. Nothing is
//! cached, so a guard re-evaluates whenever the state it is given changes.

use serde::{Deserialize, Serialize};

use crate::config::AccessConfig;
use crate::error::AccessDenied;
use crate::principal::Principal;
use crate::role::Role;
use crate::session::AuthState;

/// What a principal must hold to pass a gate.
///
/// `MinimumRole` and `AllowList` are distinct policies: an allow-list admits
/// exactly the listed roles, so `[manager, admin]` turns a superadmin away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "roles", rename_all = "snake_case")]
pub enum AccessRequirement {
    /// Any signed-in principal with a recognized role.
    #[default]
    Authenticated,
    /// The principal's role must rank at or above this role.
    MinimumRole(Role),
    /// The principal's role must be one of these roles.
    AllowList(Vec<Role>),
}

impl AccessRequirement {
    /// Builds a requirement from the optional guard parameters.
    ///
    /// A required role takes precedence over an allow-list. With neither,
    /// any authenticated principal passes.
    #[must_use]
    pub fn from_parts(required_role: Option<Role>, allowed_roles: Option<Vec<Role>>) -> Self {
        match (required_role, allowed_roles) {
            (Some(role), _) => Self::MinimumRole(role),
            (None, Some(roles)) => Self::AllowList(roles),
            (None, None) => Self::Authenticated,
        }
    }

    /// Checks a principal against this requirement.
    ///
    /// # Errors
    ///
    /// Returns the reason the principal does not qualify.
    pub fn check(&self, principal: &Principal) -> Result<(), AccessDenied> {
        let actual = principal.role().ok_or(AccessDenied::UnrecognizedRole)?;
        match self {
            Self::Authenticated => Ok(()),
            Self::MinimumRole(required) if actual.satisfies(*required) => Ok(()),
            Self::MinimumRole(required) => Err(AccessDenied::InsufficientRole {
                required: *required,
                actual,
            }),
            Self::AllowList(allowed) if allowed.contains(&actual) => Ok(()),
            Self::AllowList(allowed) => Err(AccessDenied::NotInAllowList {
                allowed: allowed.clone(),
                actual,
            }),
        }
    }

    /// Returns true if the principal qualifies.
    #[must_use]
    pub fn is_met_by(&self, principal: &Principal) -> bool {
        self.check(principal).is_ok()
    }
}

/// A denied evaluation: why, and where to send the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    reason: AccessDenied,
    redirect_to: String,
}

impl Denial {
    #[must_use]
    pub fn reason(&self) -> &AccessDenied {
        &self.reason
    }

    #[must_use]
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    #[must_use]
    pub fn into_redirect(self) -> String {
        self.redirect_to
    }
}

/// Outcome of evaluating a gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Authentication has not resolved; show neither content nor redirect.
    Pending,
    /// Show the guarded content.
    Granted,
    /// Redirect away from the guarded content.
    Denied(Denial),
}

impl GateDecision {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// The redirect destination, if the decision is a denial.
    #[must_use]
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Self::Denied(denial) => Some(denial.redirect_to()),
            _ => None,
        }
    }
}

/// Guard over protected content or an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    requirement: AccessRequirement,
    config: AccessConfig,
}

impl AccessGate {
    /// Creates a gate with the default redirect destinations.
    #[must_use]
    pub fn new(requirement: AccessRequirement) -> Self {
        Self::with_config(requirement, AccessConfig::default())
    }

    #[must_use]
    pub fn with_config(requirement: AccessRequirement, config: AccessConfig) -> Self {
        Self {
            requirement,
            config,
        }
    }

    /// Gate that requires at least `role`.
    #[must_use]
    pub fn minimum_role(role: Role) -> Self {
        Self::new(AccessRequirement::MinimumRole(role))
    }

    /// Gate that admits exactly the listed roles.
    #[must_use]
    pub fn allow_list(roles: impl Into<Vec<Role>>) -> Self {
        Self::new(AccessRequirement::AllowList(roles.into()))
    }

    /// Overrides where denied, signed-in callers are sent.
    #[must_use]
    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_fallback_path(path);
        self
    }

    /// Overrides where signed-out callers are sent.
    #[must_use]
    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_sign_in_path(path);
        self
    }

    #[must_use]
    pub fn requirement(&self) -> &AccessRequirement {
        &self.requirement
    }

    #[must_use]
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Checks a possibly absent principal, without redirect information.
    ///
    /// # Errors
    ///
    /// Returns the reason access is denied.
    pub fn check(&self, principal: Option<&Principal>) -> Result<(), AccessDenied> {
        let principal = principal.ok_or(AccessDenied::NotAuthenticated)?;
        self.requirement.check(principal)
    }

    /// Evaluates the gate against the current authentication state.
    #[must_use]
    pub fn evaluate(&self, state: &AuthState) -> GateDecision {
        if state.is_loading() {
            tracing::trace!("Access gate pending on authentication");
            return GateDecision::Pending;
        }

        match self.check(state.principal()) {
            Ok(()) => GateDecision::Granted,
            Err(reason) => {
                let redirect_to = if reason.requires_sign_in() {
                    self.config.sign_in_path()
                } else {
                    self.config.fallback_path()
                };
                tracing::debug!(
                    reason = %reason,
                    requirement = ?self.requirement,
                    redirect_to = %redirect_to,
                    "Access gate denied"
                );
                GateDecision::Denied(Denial {
                    reason,
                    redirect_to: redirect_to.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamtegrate_core::{OrganizationId, UserId};

    fn signed_in(role: Role) -> AuthState {
        AuthState::SignedIn(Principal::new(UserId::new(), OrganizationId::new(), role))
    }

    #[test]
    fn loading_is_pending_for_every_requirement() {
        let gates = [
            AccessGate::new(AccessRequirement::Authenticated),
            AccessGate::minimum_role(Role::Superadmin),
            AccessGate::allow_list([Role::Manager]),
        ];
        for gate in gates {
            let decision = gate.evaluate(&AuthState::Loading);
            assert!(decision.is_pending());
            assert!(decision.redirect_to().is_none());
        }
    }

    #[test]
    fn signed_out_redirects_to_sign_in() {
        let gate = AccessGate::minimum_role(Role::User);
        let decision = gate.evaluate(&AuthState::SignedOut);
        assert_eq!(decision.redirect_to(), Some("/login"));
        match decision {
            GateDecision::Denied(denial) => {
                assert_eq!(denial.reason(), &AccessDenied::NotAuthenticated);
            }
            other => panic!("expected denial, got {other:?}"),
        }
    }

    #[test]
    fn signed_out_ignores_fallback_override() {
        let gate = AccessGate::minimum_role(Role::User).with_fallback_path("/home");
        let decision = gate.evaluate(&AuthState::SignedOut);
        assert_eq!(decision.redirect_to(), Some("/login"));
    }

    #[test]
    fn minimum_role_grants_equal_and_higher() {
        let gate = AccessGate::minimum_role(Role::Manager);
        assert!(gate.evaluate(&signed_in(Role::Manager)).is_granted());
        assert!(gate.evaluate(&signed_in(Role::Admin)).is_granted());
        assert!(gate.evaluate(&signed_in(Role::Superadmin)).is_granted());
    }

    #[test]
    fn minimum_role_denies_lower_to_fallback() {
        let gate = AccessGate::minimum_role(Role::Admin);
        let decision = gate.evaluate(&signed_in(Role::User));
        assert_eq!(decision.redirect_to(), Some("/dashboard"));
        match decision {
            GateDecision::Denied(denial) => assert_eq!(
                denial.reason(),
                &AccessDenied::InsufficientRole {
                    required: Role::Admin,
                    actual: Role::User,
                }
            ),
            other => panic!("expected denial, got {other:?}"),
        }
    }

    #[test]
    fn allow_list_denies_user_to_default_fallback() {
        let gate = AccessGate::allow_list([Role::Manager, Role::Admin]);
        let decision = gate.evaluate(&signed_in(Role::User));
        assert!(!decision.is_granted());
        assert_eq!(decision.redirect_to(), Some("/dashboard"));
    }

    #[test]
    fn allow_list_does_not_imply_higher_roles() {
        let gate = AccessGate::allow_list([Role::Manager, Role::Admin]);
        assert!(gate.evaluate(&signed_in(Role::Manager)).is_granted());
        assert!(gate.evaluate(&signed_in(Role::Admin)).is_granted());
        assert!(!gate.evaluate(&signed_in(Role::Superadmin)).is_granted());
    }

    #[test]
    fn custom_fallback_is_used() {
        let gate = AccessGate::allow_list([Role::Superadmin]).with_fallback_path("/dashboard/team");
        let decision = gate.evaluate(&signed_in(Role::Admin));
        assert_eq!(decision.redirect_to(), Some("/dashboard/team"));
    }

    #[test]
    fn unrecognized_role_is_denied_not_sent_to_sign_in() {
        let principal = Principal::from_profile(UserId::new(), OrganizationId::new(), Some("owner"));
        let gate = AccessGate::new(AccessRequirement::Authenticated);
        let decision = gate.evaluate(&AuthState::SignedIn(principal));
        assert_eq!(decision.redirect_to(), Some("/dashboard"));
    }

    #[test]
    fn authenticated_requirement_grants_any_known_role() {
        let gate = AccessGate::new(AccessRequirement::Authenticated);
        for role in Role::ALL {
            assert!(gate.evaluate(&signed_in(role)).is_granted());
        }
    }

    #[test]
    fn decision_follows_state_changes() {
        let gate = AccessGate::minimum_role(Role::Manager);
        let states = [
            AuthState::Loading,
            signed_in(Role::Manager),
            AuthState::SignedOut,
            signed_in(Role::User),
        ];
        let decisions: Vec<GateDecision> = states.iter().map(|s| gate.evaluate(s)).collect();
        assert!(decisions[0].is_pending());
        assert!(decisions[1].is_granted());
        assert_eq!(decisions[2].redirect_to(), Some("/login"));
        assert_eq!(decisions[3].redirect_to(), Some("/dashboard"));
    }

    #[test]
    fn from_parts_prefers_required_role() {
        let requirement =
            AccessRequirement::from_parts(Some(Role::Admin), Some(vec![Role::User]));
        assert_eq!(requirement, AccessRequirement::MinimumRole(Role::Admin));
        assert_eq!(
            AccessRequirement::from_parts(None, Some(vec![Role::User])),
            AccessRequirement::AllowList(vec![Role::User])
        );
        assert_eq!(
            AccessRequirement::from_parts(None, None),
            AccessRequirement::Authenticated
        );
    }

    #[test]
    fn empty_allow_list_denies_everyone() {
        let requirement = AccessRequirement::AllowList(Vec::new());
        for role in Role::ALL {
            let principal = Principal::new(UserId::new(), OrganizationId::new(), role);
            assert!(!requirement.is_met_by(&principal));
        }
    }

    #[test]
    fn check_without_principal() {
        let gate = AccessGate::minimum_role(Role::User);
        assert_eq!(gate.check(None), Err(AccessDenied::NotAuthenticated));
    }

    #[test]
    fn requirement_serialization_format() {
        let json = serde_json::to_string(&AccessRequirement::AllowList(vec![
            Role::Manager,
            Role::Admin,
        ]))
        .expect("serialize");
        assert_eq!(json, r#"{"kind":"allow_list","roles":["manager","admin"]}"#);
    }
}
