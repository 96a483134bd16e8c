//! Guard components.
//!
//! Both guards take the authentication state as a signal prop and evaluate an
//! [`AccessGate`] against it every time the signal changes:
//!
//! - [`ProtectedRoute`] wraps a page and redirects when access is denied.
//! - [`RoleGate`] wraps a fragment (a button, a tab) and hides it instead.
//!
//! While authentication is still loading both render nothing.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use teamtegrate_access::{
    AccessConfig, AccessGate, AccessRequirement, AuthState, Capability, GateDecision, Role,
};

fn page_gate(
    required_role: Option<Role>,
    allowed_roles: Option<Vec<Role>>,
    fallback_path: Option<String>,
    config: Option<AccessConfig>,
) -> AccessGate {
    let requirement = AccessRequirement::from_parts(required_role, allowed_roles);
    let gate = AccessGate::with_config(requirement, config.unwrap_or_default());
    match fallback_path {
        Some(path) => gate.with_fallback_path(path),
        None => gate,
    }
}

/// Page guard: renders its children only for qualifying principals.
///
/// Signed-out visitors are redirected to the sign-in path, signed-in
/// principals without access to `fallback_path` (default `/dashboard`).
#[component]
pub fn ProtectedRoute(
    #[prop(into)] auth: Signal<AuthState>,
    #[prop(optional)] required_role: Option<Role>,
    #[prop(optional)] allowed_roles: Option<Vec<Role>>,
    #[prop(optional, into)] fallback_path: Option<String>,
    #[prop(optional)] config: Option<AccessConfig>,
    children: ChildrenFn,
) -> impl IntoView {
    let gate = page_gate(required_role, allowed_roles, fallback_path, config);

    move || match auth.with(|state| gate.evaluate(state)) {
        GateDecision::Pending => ().into_any(),
        GateDecision::Granted => children(),
        GateDecision::Denied(denial) => {
            let path = denial.into_redirect();
            tracing::debug!(path = %path, "Redirecting away from protected route");
            view! { <Redirect path=path/> }.into_any()
        }
    }
}

/// Inline guard: shows its children to qualifying principals and `fallback`
/// (nothing by default) to everyone else.
///
/// A `capability` takes precedence over `required_role` and `allowed_roles`.
#[component]
pub fn RoleGate(
    #[prop(into)] auth: Signal<AuthState>,
    #[prop(optional)] required_role: Option<Role>,
    #[prop(optional)] allowed_roles: Option<Vec<Role>>,
    #[prop(optional)] capability: Option<Capability>,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let requirement = capability.map_or_else(
        || AccessRequirement::from_parts(required_role, allowed_roles),
        Capability::requirement,
    );
    let gate = AccessGate::new(requirement);

    move || match auth.with(|state| gate.evaluate(state)) {
        GateDecision::Pending => ().into_any(),
        GateDecision::Granted => children(),
        GateDecision::Denied(_) => fallback.run(),
    }
}
