//! Role badge.

use leptos::prelude::*;
use teamtegrate_access::Role;

/// CSS class for a role badge. Unrecognized roles get a neutral style.
#[must_use]
pub fn badge_class(role: Option<Role>) -> String {
    let variant = role.map_or("unknown", Role::as_str);
    format!("role-badge role-badge-{variant}")
}

/// Label shown on a role badge.
#[must_use]
pub fn badge_label(role: Option<Role>) -> &'static str {
    role.map_or("Unknown", Role::display_name)
}

/// Small pill naming a principal's role.
#[component]
pub fn RoleBadge(role: Option<Role>) -> impl IntoView {
    view! { <span class=badge_class(role)>{badge_label(role)}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_role_badge() {
        assert_eq!(badge_class(Some(Role::Superadmin)), "role-badge role-badge-superadmin");
        assert_eq!(badge_label(Some(Role::Superadmin)), "Super Admin");
    }

    #[test]
    fn unknown_role_badge() {
        assert_eq!(badge_class(None), "role-badge role-badge-unknown");
        assert_eq!(badge_label(None), "Unknown");
    }
}
