use super::permissions::RolePermissions;
use super::{Role, RoleCategory};
use serde::Serialize;

/// Display metadata and capabilities for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDefinition {
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
    pub category: RoleCategory,
    pub color: &'static str,
    pub icon: &'static str,
    pub permissions: RolePermissions,
}

const ADMIN: RolePermissions = RolePermissions {
    dashboard: true,
    jobs: true,
    consultants: true,
    candidates: true,
    users: true,
    roles: true,
    webhooks: true,
    api_tokens: true,
    scraper: true,
    boond_manager: true,
    boond_manager_admin: true,
    timesheets: true,
    absences: true,
    data_quality: true,
    settings: true,
    view_all_data: true,
    can_manage_contracts: true,
    can_assign_jobs: true,
    can_assign_consultants: true,
    can_validate_timesheets: true,
    can_export_data: true,
    can_delete_data: true,
    ..RolePermissions::NONE
};

const COMMERCIAL: RolePermissions = RolePermissions {
    dashboard: true,
    jobs: true,
    consultants: true,
    candidates: true,
    boond_manager: true,
    timesheets: true,
    absences: true,
    view_all_data: true,
    can_manage_contracts: true,
    can_assign_jobs: true,
    can_assign_consultants: true,
    can_validate_timesheets: true,
    can_export_data: true,
    ..RolePermissions::NONE
};

const SOURCEUR: RolePermissions = RolePermissions {
    dashboard: true,
    jobs: true,
    candidates: true,
    scraper: true,
    boond_manager: true,
    view_assigned_only: true,
    can_assign_jobs: true,
    ..RolePermissions::NONE
};

const RH: RolePermissions = RolePermissions {
    dashboard: true,
    consultants: true,
    candidates: true,
    users: true,
    boond_manager: true,
    timesheets: true,
    absences: true,
    data_quality: true,
    view_all_data: true,
    can_manage_contracts: true,
    can_validate_timesheets: true,
    can_export_data: true,
    ..RolePermissions::NONE
};

const CONSULTANT_CDI: RolePermissions = RolePermissions {
    consultant_portal: true,
    timesheets: true,
    absences: true,
    view_assigned_only: true,
    ..RolePermissions::NONE
};

const FREELANCE: RolePermissions = RolePermissions {
    consultant_portal: true,
    freelance_portal: true,
    timesheets: true,
    view_assigned_only: true,
    ..RolePermissions::NONE
};

const CANDIDAT: RolePermissions = RolePermissions {
    candidate_portal: true,
    view_assigned_only: true,
    ..RolePermissions::NONE
};

/// Indexed by `Role::index`, in `Role::ordered` order.
pub(super) static CATALOG: [RoleDefinition; 7] = [
    RoleDefinition {
        role: Role::Admin,
        label: "Administrateur",
        description: "Full access to the backoffice, users, integrations and settings",
        category: RoleCategory::Bureau,
        color: "#dc2626",
        icon: "shield",
        permissions: ADMIN,
    },
    RoleDefinition {
        role: Role::Commercial,
        label: "Commercial",
        description: "Manages clients, job openings, contracts and consultant assignments",
        category: RoleCategory::Bureau,
        color: "#2563eb",
        icon: "briefcase",
        permissions: COMMERCIAL,
    },
    RoleDefinition {
        role: Role::Sourceur,
        label: "Sourceur",
        description: "Sources and qualifies candidates for assigned job openings",
        category: RoleCategory::Bureau,
        color: "#7c3aed",
        icon: "search",
        permissions: SOURCEUR,
    },
    RoleDefinition {
        role: Role::Rh,
        label: "Ressources humaines",
        description: "Follows consultants, contracts, timesheets and absences",
        category: RoleCategory::Bureau,
        color: "#db2777",
        icon: "users",
        permissions: RH,
    },
    RoleDefinition {
        role: Role::ConsultantCdi,
        label: "Consultant CDI",
        description: "Permanent consultant using the consultant portal",
        category: RoleCategory::Terrain,
        color: "#059669",
        icon: "user-check",
        permissions: CONSULTANT_CDI,
    },
    RoleDefinition {
        role: Role::Freelance,
        label: "Freelance",
        description: "Independent consultant using the consultant and freelance portals",
        category: RoleCategory::Terrain,
        color: "#d97706",
        icon: "user-cog",
        permissions: FREELANCE,
    },
    RoleDefinition {
        role: Role::Candidat,
        label: "Candidat",
        description: "Candidate in the recruitment pipeline with access to the candidate portal",
        category: RoleCategory::Terrain,
        color: "#6b7280",
        icon: "user",
        permissions: CANDIDAT,
    },
];
