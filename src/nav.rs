//! Navigation model and route guard.
//!
//! A declarative table maps every dashboard destination to the roles
//! allowed to see it. The same table drives both layers:
//! - `menu_for` filters the sidebar so a role never sees a link it
//!   cannot use;
//! - `check_route_access` enforces at route entry — including the role
//!   allow-list, which the reference front end only checked at
//!   menu-render time.
//!
//! Default deny, checked in order: public path → session present →
//! role allowed.

use thiserror::Error;

use crate::auth::SessionService;
use crate::models::Role;

/// Where unauthenticated sessions are redirected.
pub const LOGIN_PATH: &str = "/login";

/// Marketing pages plus the login entry point — no session required.
pub const PUBLIC_PATHS: &[&str] = &["/", "/about", "/services", "/contact", "/login"];

// ═══════════════════════════════════════════════════════════
// Navigation table
// ═══════════════════════════════════════════════════════════

/// One navigable dashboard destination.
#[derive(Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Roles permitted to see and enter this destination.
    pub roles: &'static [Role],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Tableau de bord",
        path: "/dashboard",
        roles: &Role::ALL,
    },
    NavItem {
        label: "Patients",
        path: "/dashboard/patients",
        roles: &[Role::Receptionist, Role::Doctor, Role::Director],
    },
    NavItem {
        label: "Rendez-vous",
        path: "/dashboard/appointments",
        roles: &[Role::Receptionist, Role::Patient, Role::Doctor],
    },
    NavItem {
        label: "Dossiers médicaux",
        path: "/dashboard/medical-records",
        roles: &[Role::Doctor],
    },
    NavItem {
        label: "Mon dossier médical",
        path: "/dashboard/medical-records/me",
        roles: &[Role::Patient],
    },
    NavItem {
        label: "Mes rendez-vous",
        path: "/dashboard/my-appointments",
        roles: &[Role::Patient],
    },
    NavItem {
        label: "Mes factures",
        path: "/dashboard/my-invoices",
        roles: &[Role::Patient],
    },
    NavItem {
        label: "Médecins",
        path: "/dashboard/doctors",
        roles: &[Role::Director],
    },
    NavItem {
        label: "Utilisateurs",
        path: "/dashboard/users",
        roles: &[Role::Director],
    },
    NavItem {
        label: "Pharmacie",
        path: "/dashboard/pharmacy",
        roles: &[Role::Pharmacist],
    },
    NavItem {
        label: "Facturation",
        path: "/dashboard/invoices",
        roles: &[Role::Cashier],
    },
];

/// Sidebar entries visible to `role`, in table order.
pub fn menu_for(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.roles.contains(&role))
        .collect()
}

// ═══════════════════════════════════════════════════════════
// Route guard
// ═══════════════════════════════════════════════════════════

/// Reasons an access check fails.
#[derive(Debug, Error)]
pub enum NavError {
    /// No session — the router redirects to [`LOGIN_PATH`].
    #[error("no active session, redirect to {LOGIN_PATH}")]
    NotAuthenticated,

    /// Session exists but the role is not on the destination's allow-list.
    #[error("role {role} may not access {path}")]
    Forbidden { role: &'static str, path: String },
}

/// Guard applied before rendering any view.
///
/// Public paths always pass. Every other path requires a session; a path
/// listed in [`NAV_ITEMS`] additionally requires the session role to be
/// on its allow-list. Protected paths not in the table (detail routes)
/// pass on session presence alone.
pub fn check_route_access(session: &SessionService, path: &str) -> Result<(), NavError> {
    if PUBLIC_PATHS.contains(&path) {
        return Ok(());
    }
    let Some(user) = session.current() else {
        return Err(NavError::NotAuthenticated);
    };
    if let Some(item) = NAV_ITEMS.iter().find(|item| item.path == path) {
        if !item.roles.contains(&user.role) {
            tracing::warn!(
                role = user.role.as_str(),
                path,
                "route access denied"
            );
            return Err(NavError::Forbidden {
                role: user.role.as_str(),
                path: path.to_string(),
            });
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
