//! Role-based access control for TeamTegrate.
//!
//! This crate provides:
//! - The role hierarchy (`Role`, `has_role_access`)
//! - The signed-in actor (`Principal`) and authentication state (`AuthState`)
//! - Access gating with redirects (`AccessGate`, `AccessRequirement`)
//! - Named capabilities and user-management rules
//! - Redirect configuration (`AccessConfig`)
//!
//! # Access Control Model
//!
//! Roles are totally ordered: `user < manager < admin < superadmin`. A gate
//! either requires a minimum role or admits an explicit allow-list of roles.
//! Missing or unrecognized roles never grant access.
//!
//! # Example
//!
//! ```
//! use teamtegrate_access::{AccessGate, AuthState, GateDecision, Principal, Role};
//! use teamtegrate_core::{OrganizationId, UserId};
//!
//! let gate = AccessGate::allow_list([Role::Manager, Role::Admin]);
//!
//! // Nothing is decided until authentication resolves.
//! assert_eq!(gate.evaluate(&AuthState::Loading), GateDecision::Pending);
//!
//! let user = Principal::new(UserId::new(), OrganizationId::new(), Role::User);
//! let decision = gate.evaluate(&AuthState::SignedIn(user));
//! assert_eq!(decision.redirect_to(), Some("/dashboard"));
//!
//! assert!(teamtegrate_access::has_role_access(Some(Role::Admin), Role::Manager));
//! ```

pub mod capability;
pub mod config;
pub mod error;
pub mod gate;
pub mod policy;
pub mod principal;
pub mod role;
pub mod session;

pub use capability::Capability;
pub use config::AccessConfig;
pub use error::{AccessDenied, ConfigError};
pub use gate::{AccessGate, AccessRequirement, Denial, GateDecision};
pub use principal::Principal;
pub use role::{ParseRoleError, Role, has_role_access, has_role_access_by_name};
pub use session::{AuthState, Session, SessionId};
