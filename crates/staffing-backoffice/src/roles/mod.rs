//! Fixed role catalog and permission lookups.
//!
//! Roles arrive as untyped strings from user documents and HTTP requests. The `&str` lookups
//! below never fail: anything outside the closed [`Role`] set yields `None` or `false`.

mod catalog;
pub mod permissions;
pub mod router;

pub use catalog::RoleDefinition;
pub use permissions::{Permission, RolePermissions};
pub use router::access_router;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),
    #[error("unknown role category '{0}'")]
    UnknownCategory(String),
    #[error("unknown permission '{0}'")]
    UnknownPermission(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Commercial,
    Sourceur,
    Rh,
    ConsultantCdi,
    Freelance,
    Candidat,
}

impl Role {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Admin,
            Self::Commercial,
            Self::Sourceur,
            Self::Rh,
            Self::ConsultantCdi,
            Self::Freelance,
            Self::Candidat,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Commercial => "commercial",
            Self::Sourceur => "sourceur",
            Self::Rh => "rh",
            Self::ConsultantCdi => "consultant_cdi",
            Self::Freelance => "freelance",
            Self::Candidat => "candidat",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Admin => 0,
            Self::Commercial => 1,
            Self::Sourceur => 2,
            Self::Rh => 3,
            Self::ConsultantCdi => 4,
            Self::Freelance => 5,
            Self::Candidat => 6,
        }
    }

    pub fn definition(self) -> &'static RoleDefinition {
        &catalog::CATALOG[self.index()]
    }

    pub fn permissions(self) -> &'static RolePermissions {
        &self.definition().permissions
    }

    pub fn category(self) -> RoleCategory {
        self.definition().category
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }

    /// Lenient parse for values read from storage; exact wire names only.
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| RoleError::UnknownRole(value.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bureau roles run the backoffice; terrain roles use the self-service portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Bureau,
    Terrain,
}

impl RoleCategory {
    pub const fn ordered() -> [Self; 2] {
        [Self::Bureau, Self::Terrain]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bureau => "bureau",
            Self::Terrain => "terrain",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bureau => "Bureau",
            Self::Terrain => "Terrain",
        }
    }

    pub fn roles(self) -> Vec<Role> {
        Role::ordered()
            .into_iter()
            .filter(|role| role.category() == self)
            .collect()
    }

    pub fn parse(value: &str) -> Result<Self, RoleError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bureau" => Ok(Self::Bureau),
            "terrain" => Ok(Self::Terrain),
            _ => Err(RoleError::UnknownCategory(value.to_string())),
        }
    }
}

pub fn has_permission(role: &str, permission: &str) -> bool {
    match (Role::parse(role), permission.parse::<Permission>()) {
        (Some(role), Ok(permission)) => role.permissions().allows(permission),
        _ => false,
    }
}

pub fn role_permissions(role: &str) -> Option<&'static RolePermissions> {
    Role::parse(role).map(Role::permissions)
}

pub fn role_definition(role: &str) -> Option<&'static RoleDefinition> {
    Role::parse(role).map(Role::definition)
}

pub fn role_category(role: &str) -> Option<RoleCategory> {
    Role::parse(role).map(Role::category)
}

pub fn roles_by_category(category: RoleCategory) -> Vec<&'static RoleDefinition> {
    catalog::CATALOG
        .iter()
        .filter(|definition| definition.category == category)
        .collect()
}

pub fn is_bureau_role(role: &str) -> bool {
    role_category(role) == Some(RoleCategory::Bureau)
}

pub fn is_terrain_role(role: &str) -> bool {
    role_category(role) == Some(RoleCategory::Terrain)
}
