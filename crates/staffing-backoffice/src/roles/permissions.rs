use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Capabilities a role may be granted in the backoffice or the self-service portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    Dashboard,
    Jobs,
    Consultants,
    Candidates,
    Users,
    Roles,
    Webhooks,
    ApiTokens,
    Scraper,
    BoondManager,
    BoondManagerAdmin,
    Timesheets,
    Absences,
    DataQuality,
    Settings,
    ConsultantPortal,
    FreelancePortal,
    CandidatePortal,
    ViewAllData,
    ViewAssignedOnly,
    CanManageContracts,
    CanAssignJobs,
    CanAssignConsultants,
    CanValidateTimesheets,
    CanExportData,
    CanDeleteData,
}

impl Permission {
    pub const fn all() -> [Self; 26] {
        [
            Self::Dashboard,
            Self::Jobs,
            Self::Consultants,
            Self::Candidates,
            Self::Users,
            Self::Roles,
            Self::Webhooks,
            Self::ApiTokens,
            Self::Scraper,
            Self::BoondManager,
            Self::BoondManagerAdmin,
            Self::Timesheets,
            Self::Absences,
            Self::DataQuality,
            Self::Settings,
            Self::ConsultantPortal,
            Self::FreelancePortal,
            Self::CandidatePortal,
            Self::ViewAllData,
            Self::ViewAssignedOnly,
            Self::CanManageContracts,
            Self::CanAssignJobs,
            Self::CanAssignConsultants,
            Self::CanValidateTimesheets,
            Self::CanExportData,
            Self::CanDeleteData,
        ]
    }

    /// Wire name, matching the keys stored on user documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Jobs => "jobs",
            Self::Consultants => "consultants",
            Self::Candidates => "candidates",
            Self::Users => "users",
            Self::Roles => "roles",
            Self::Webhooks => "webhooks",
            Self::ApiTokens => "apiTokens",
            Self::Scraper => "scraper",
            Self::BoondManager => "boondManager",
            Self::BoondManagerAdmin => "boondManagerAdmin",
            Self::Timesheets => "timesheets",
            Self::Absences => "absences",
            Self::DataQuality => "dataQuality",
            Self::Settings => "settings",
            Self::ConsultantPortal => "consultantPortal",
            Self::FreelancePortal => "freelancePortal",
            Self::CandidatePortal => "candidatePortal",
            Self::ViewAllData => "viewAllData",
            Self::ViewAssignedOnly => "viewAssignedOnly",
            Self::CanManageContracts => "canManageContracts",
            Self::CanAssignJobs => "canAssignJobs",
            Self::CanAssignConsultants => "canAssignConsultants",
            Self::CanValidateTimesheets => "canValidateTimesheets",
            Self::CanExportData => "canExportData",
            Self::CanDeleteData => "canDeleteData",
        }
    }
}

impl FromStr for Permission {
    type Err = super::RoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| super::RoleError::UnknownPermission(value.to_string()))
    }
}

/// Static capability record attached to each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissions {
    pub dashboard: bool,
    pub jobs: bool,
    pub consultants: bool,
    pub candidates: bool,
    pub users: bool,
    pub roles: bool,
    pub webhooks: bool,
    pub api_tokens: bool,
    pub scraper: bool,
    pub boond_manager: bool,
    pub boond_manager_admin: bool,
    pub timesheets: bool,
    pub absences: bool,
    pub data_quality: bool,
    pub settings: bool,
    pub consultant_portal: bool,
    pub freelance_portal: bool,
    pub candidate_portal: bool,
    pub view_all_data: bool,
    pub view_assigned_only: bool,
    pub can_manage_contracts: bool,
    pub can_assign_jobs: bool,
    pub can_assign_consultants: bool,
    pub can_validate_timesheets: bool,
    pub can_export_data: bool,
    pub can_delete_data: bool,
}

impl RolePermissions {
    pub(crate) const NONE: Self = Self {
        dashboard: false,
        jobs: false,
        consultants: false,
        candidates: false,
        users: false,
        roles: false,
        webhooks: false,
        api_tokens: false,
        scraper: false,
        boond_manager: false,
        boond_manager_admin: false,
        timesheets: false,
        absences: false,
        data_quality: false,
        settings: false,
        consultant_portal: false,
        freelance_portal: false,
        candidate_portal: false,
        view_all_data: false,
        view_assigned_only: false,
        can_manage_contracts: false,
        can_assign_jobs: false,
        can_assign_consultants: false,
        can_validate_timesheets: false,
        can_export_data: false,
        can_delete_data: false,
    };

    pub const fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::Dashboard => self.dashboard,
            Permission::Jobs => self.jobs,
            Permission::Consultants => self.consultants,
            Permission::Candidates => self.candidates,
            Permission::Users => self.users,
            Permission::Roles => self.roles,
            Permission::Webhooks => self.webhooks,
            Permission::ApiTokens => self.api_tokens,
            Permission::Scraper => self.scraper,
            Permission::BoondManager => self.boond_manager,
            Permission::BoondManagerAdmin => self.boond_manager_admin,
            Permission::Timesheets => self.timesheets,
            Permission::Absences => self.absences,
            Permission::DataQuality => self.data_quality,
            Permission::Settings => self.settings,
            Permission::ConsultantPortal => self.consultant_portal,
            Permission::FreelancePortal => self.freelance_portal,
            Permission::CandidatePortal => self.candidate_portal,
            Permission::ViewAllData => self.view_all_data,
            Permission::ViewAssignedOnly => self.view_assigned_only,
            Permission::CanManageContracts => self.can_manage_contracts,
            Permission::CanAssignJobs => self.can_assign_jobs,
            Permission::CanAssignConsultants => self.can_assign_consultants,
            Permission::CanValidateTimesheets => self.can_validate_timesheets,
            Permission::CanExportData => self.can_export_data,
            Permission::CanDeleteData => self.can_delete_data,
        }
    }

    pub fn granted(&self) -> Vec<Permission> {
        Permission::all()
            .into_iter()
            .filter(|permission| self.allows(*permission))
            .collect()
    }
}
