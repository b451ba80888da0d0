use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LifecycleError;
use crate::roles::Role;

/// Recruitment pipeline stages, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    AQualifier,
    Qualifie,
    EnCours,
    Entretien,
    Proposition,
    Embauche,
}

impl CandidateStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::AQualifier,
            Self::Qualifie,
            Self::EnCours,
            Self::Entretien,
            Self::Proposition,
            Self::Embauche,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AQualifier => "a_qualifier",
            Self::Qualifie => "qualifie",
            Self::EnCours => "en_cours",
            Self::Entretien => "entretien",
            Self::Proposition => "proposition",
            Self::Embauche => "embauche",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AQualifier => "À qualifier",
            Self::Qualifie => "Qualifié",
            Self::EnCours => "En cours",
            Self::Entretien => "Entretien",
            Self::Proposition => "Proposition",
            Self::Embauche => "Embauché",
        }
    }

    pub const fn position(self) -> usize {
        match self {
            Self::AQualifier => 0,
            Self::Qualifie => 1,
            Self::EnCours => 2,
            Self::Entretien => 3,
            Self::Proposition => 4,
            Self::Embauche => 5,
        }
    }

    /// Following stage on the board. Moves are not validated against it.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::AQualifier => Some(Self::Qualifie),
            Self::Qualifie => Some(Self::EnCours),
            Self::EnCours => Some(Self::Entretien),
            Self::Entretien => Some(Self::Proposition),
            Self::Proposition => Some(Self::Embauche),
            Self::Embauche => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Embauche)
    }

    pub const fn can_transition_to_consultant(self) -> bool {
        matches!(self, Self::Embauche)
    }
}

impl FromStr for CandidateStatus {
    type Err = LifecycleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| LifecycleError::UnknownStatus(value.to_string()))
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment contract signed when a candidate is hired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Cdi,
    Freelance,
}

impl ContractType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cdi => "cdi",
            Self::Freelance => "freelance",
        }
    }

    pub const fn consultant_role(self) -> Role {
        match self {
            Self::Cdi => Role::ConsultantCdi,
            Self::Freelance => Role::Freelance,
        }
    }
}

impl FromStr for ContractType {
    type Err = LifecycleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cdi" => Ok(Self::Cdi),
            "freelance" => Ok(Self::Freelance),
            other => Err(LifecycleError::UnknownContractType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Confirme,
    Senior,
    Expert,
}

impl Seniority {
    pub const fn from_years(years: u8) -> Self {
        match years {
            0..=2 => Self::Junior,
            3..=5 => Self::Confirme,
            6..=10 => Self::Senior,
            _ => Self::Expert,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Confirme => "Confirmé",
            Self::Senior => "Senior",
            Self::Expert => "Expert",
        }
    }
}

/// Job families shared by candidates and job openings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobFamily {
    Developpement,
    Data,
    CloudDevops,
    Cybersecurite,
    Infrastructure,
    GestionProjet,
    Conseil,
    Support,
}

impl JobFamily {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Developpement,
            Self::Data,
            Self::CloudDevops,
            Self::Cybersecurite,
            Self::Infrastructure,
            Self::GestionProjet,
            Self::Conseil,
            Self::Support,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developpement => "developpement",
            Self::Data => "data",
            Self::CloudDevops => "cloud_devops",
            Self::Cybersecurite => "cybersecurite",
            Self::Infrastructure => "infrastructure",
            Self::GestionProjet => "gestion_projet",
            Self::Conseil => "conseil",
            Self::Support => "support",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Developpement => "Développement",
            Self::Data => "Data & IA",
            Self::CloudDevops => "Cloud & DevOps",
            Self::Cybersecurite => "Cybersécurité",
            Self::Infrastructure => "Infrastructure & Réseaux",
            Self::GestionProjet => "Gestion de projet",
            Self::Conseil => "Conseil & AMOA",
            Self::Support => "Support & Exploitation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|family| family.as_str() == value)
    }
}

/// A person in the recruitment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub job_family: Option<JobFamily>,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub years_of_experience: Option<u8>,
    pub status: CandidateStatus,
    #[serde(default)]
    pub contract_type: Option<String>,
}

impl Candidate {
    pub fn seniority(&self) -> Option<Seniority> {
        self.years_of_experience.map(Seniority::from_years)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Column of the recruitment board.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStage {
    pub status: CandidateStatus,
    pub label: &'static str,
    pub position: usize,
    pub terminal: bool,
}

impl From<CandidateStatus> for PipelineStage {
    fn from(status: CandidateStatus) -> Self {
        Self {
            status,
            label: status.label(),
            position: status.position(),
            terminal: status.is_terminal(),
        }
    }
}

pub fn pipeline() -> Vec<PipelineStage> {
    CandidateStatus::ordered()
        .into_iter()
        .map(PipelineStage::from)
        .collect()
}
