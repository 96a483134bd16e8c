//! Leptos components for role-based access in the TeamTegrate UI.
//!
//! Components receive the authentication state as a `Signal<AuthState>` prop
//! instead of reading it from context, so each guard can be driven directly
//! by whatever owns the session.

#![allow(non_snake_case)]

pub mod badge;
pub mod guard;
pub mod nav;

pub use badge::RoleBadge;
pub use guard::{ProtectedRoute, RoleGate};
pub use nav::{NavItem, SideNav, default_navigation, visible_items};
