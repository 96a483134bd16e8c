//! Role-aware navigation.

use leptos::prelude::*;
use teamtegrate_access::{AccessRequirement, AuthState, Capability, Role};

/// A navigation entry shown only to principals meeting its requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub requirement: AccessRequirement,
}

impl NavItem {
    #[must_use]
    pub fn new(label: &'static str, href: &'static str, requirement: AccessRequirement) -> Self {
        Self {
            label,
            href,
            requirement,
        }
    }
}

/// The application's main navigation.
#[must_use]
pub fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", "/dashboard", AccessRequirement::Authenticated),
        NavItem::new("Tasks", "/dashboard/tasks", AccessRequirement::Authenticated),
        NavItem::new("Projects", "/dashboard/projects", AccessRequirement::Authenticated),
        NavItem::new("Chat", "/dashboard/chat", AccessRequirement::Authenticated),
        NavItem::new(
            "Training",
            "/dashboard/training/my-training",
            AccessRequirement::Authenticated,
        ),
        NavItem::new("Team", "/dashboard/team", AccessRequirement::Authenticated),
        NavItem::new(
            "Team Analytics",
            "/dashboard/team-analytics",
            Capability::ViewManagerDashboard.requirement(),
        ),
        NavItem::new(
            "Finance",
            "/dashboard/finance",
            AccessRequirement::MinimumRole(Role::Manager),
        ),
        NavItem::new(
            "Reports",
            "/dashboard/reports",
            AccessRequirement::MinimumRole(Role::Manager),
        ),
        NavItem::new(
            "Organization",
            "/dashboard/organization",
            Capability::ManageUsers.requirement(),
        ),
    ]
}

/// Items visible in the given state. Nothing is visible until a principal
/// has been resolved.
#[must_use]
pub fn visible_items<'a>(state: &AuthState, items: &'a [NavItem]) -> Vec<&'a NavItem> {
    let Some(principal) = state.principal() else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.requirement.is_met_by(principal))
        .collect()
}

/// Side navigation listing the items the current principal may open.
#[component]
pub fn SideNav(
    #[prop(into)] auth: Signal<AuthState>,
    #[prop(optional)] items: Option<Vec<NavItem>>,
) -> impl IntoView {
    let items = items.unwrap_or_else(default_navigation);

    view! {
        <nav class="side-nav">
            {move || {
                auth.with(|state| {
                    visible_items(state, &items)
                        .into_iter()
                        .map(|item| view! { <a href=item.href>{item.label}</a> })
                        .collect_view()
                })
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamtegrate_access::Principal;
    use teamtegrate_core::{OrganizationId, UserId};

    fn labels(state: &AuthState) -> Vec<&'static str> {
        let items = default_navigation();
        visible_items(state, &items)
            .into_iter()
            .map(|item| item.label)
            .collect()
    }

    fn signed_in(role: Role) -> AuthState {
        AuthState::SignedIn(Principal::new(UserId::new(), OrganizationId::new(), role))
    }

    #[test]
    fn nothing_visible_while_loading_or_signed_out() {
        assert!(labels(&AuthState::Loading).is_empty());
        assert!(labels(&AuthState::SignedOut).is_empty());
    }

    #[test]
    fn user_sees_only_general_items() {
        let visible = labels(&signed_in(Role::User));
        assert!(visible.contains(&"Tasks"));
        assert!(!visible.contains(&"Finance"));
        assert!(!visible.contains(&"Organization"));
        assert!(!visible.contains(&"Team Analytics"));
    }

    #[test]
    fn manager_sees_finance_but_not_organization() {
        let visible = labels(&signed_in(Role::Manager));
        assert!(visible.contains(&"Finance"));
        assert!(visible.contains(&"Team Analytics"));
        assert!(!visible.contains(&"Organization"));
    }

    #[test]
    fn superadmin_sees_everything() {
        assert_eq!(
            labels(&signed_in(Role::Superadmin)).len(),
            default_navigation().len()
        );
    }
}
