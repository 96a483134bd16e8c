//! User-management rules.
//!
//! These checks compare two accounts: the acting principal and the account
//! being changed. Role management is strictly downward: an actor may only
//! manage accounts whose role ranks below its own.

use crate::capability::Capability;
use crate::error::AccessDenied;
use crate::principal::Principal;
use crate::role::Role;

/// Roles that may be granted through an invite code.
pub const INVITABLE_ROLES: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

/// Returns true if `actor` may change the role of an account holding
/// `target_role`.
#[must_use]
pub fn can_manage_role(actor: &Principal, target_role: Role) -> bool {
    actor
        .role()
        .is_some_and(|role| role.rank() > target_role.rank())
}

/// Roles `actor` may assign to an account currently holding `target_role`.
///
/// Empty when the actor cannot manage the target at all.
#[must_use]
pub fn assignable_roles(actor: &Principal, target_role: Role) -> Vec<Role> {
    match actor.role() {
        Some(role) if can_manage_role(actor, target_role) => role.subordinates(),
        _ => Vec::new(),
    }
}

/// Authorizes changing `target`'s role to `new_role`.
///
/// # Errors
///
/// Denied when the actor cannot manage the target's current role, cannot
/// assign the new role, targets itself, or the target belongs to another
/// organization.
pub fn authorize_role_change(
    actor: &Principal,
    target: &Principal,
    new_role: Role,
) -> Result<(), AccessDenied> {
    let actor_role = actor.role().ok_or(AccessDenied::UnrecognizedRole)?;
    if actor.id() == target.id() {
        return Err(AccessDenied::SelfTarget);
    }
    if !actor.same_organization(target) {
        return Err(AccessDenied::OrganizationMismatch);
    }
    // An unrecognized current role is treated as the lowest role.
    let current = target.role().unwrap_or(Role::User);
    for role in [current, new_role] {
        if !can_manage_role(actor, role) {
            tracing::debug!(
                actor = %actor.id(),
                target = %target.id(),
                role = %role,
                "Role change denied"
            );
            return Err(AccessDenied::TargetRoleNotManageable {
                actor: actor_role,
                target: role,
            });
        }
    }
    Ok(())
}

/// Authorizes generating an invite code that grants `role`.
///
/// # Errors
///
/// Denied unless the actor is a superadmin and the role is invitable.
pub fn authorize_invite(actor: &Principal, role: Role) -> Result<(), AccessDenied> {
    Capability::GenerateInviteCodes.check(Some(actor))?;
    if INVITABLE_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(AccessDenied::TargetRoleNotManageable {
            actor: Role::Superadmin,
            target: role,
        })
    }
}

/// Authorizes deleting `target`'s account.
///
/// # Errors
///
/// Denied unless the actor is a superadmin in the same organization and the
/// target is another account.
pub fn authorize_user_deletion(actor: &Principal, target: &Principal) -> Result<(), AccessDenied> {
    Capability::DeleteUsers.check(Some(actor))?;
    if actor.id() == target.id() {
        return Err(AccessDenied::SelfTarget);
    }
    if !actor.same_organization(target) {
        tracing::debug!(
            actor = %actor.id(),
            target = %target.id(),
            "Cross-organization deletion blocked"
        );
        return Err(AccessDenied::OrganizationMismatch);
    }
    Ok(())
}

/// Authorizes resetting `target`'s password.
///
/// # Errors
///
/// Denied unless the actor is an admin or superadmin. Admins are further
/// limited to their own organization.
pub fn authorize_password_reset(actor: &Principal, target: &Principal) -> Result<(), AccessDenied> {
    Capability::ResetPasswords.check(Some(actor))?;
    if actor.role() != Some(Role::Superadmin) && !actor.same_organization(target) {
        return Err(AccessDenied::OrganizationMismatch);
    }
    Ok(())
}
