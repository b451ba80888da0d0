//! Recruitment pipeline stages and the rule turning a hired candidate into a terrain role.
//!
//! Stage moves are unchecked: a recruiter may jump straight to `embauche` or move
//! a card backwards on the board, and nothing here rejects it.

pub mod domain;
pub mod router;

pub use domain::{
    pipeline, Candidate, CandidateStatus, ContractType, JobFamily, PipelineStage, Seniority,
};
pub use router::candidate_router;

use crate::roles::Role;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("unknown candidate status '{0}'")]
    UnknownStatus(String),
    #[error("unknown contract type '{0}', expected 'cdi' or 'freelance'")]
    UnknownContractType(String),
    #[error("hired candidate has no contract type")]
    MissingContractType,
}

/// True only for `embauche`; unknown strings are never hireable.
pub fn can_transition_to_consultant(status: &str) -> bool {
    status
        .parse::<CandidateStatus>()
        .map(CandidateStatus::can_transition_to_consultant)
        .unwrap_or(false)
}

pub fn consultant_role_for_contract(contract_type: &str) -> Result<Role, LifecycleError> {
    contract_type
        .parse::<ContractType>()
        .map(ContractType::consultant_role)
}

/// `candidat` until hired; afterwards the role follows the contract type.
pub fn candidate_role(candidate: &Candidate) -> Result<Role, LifecycleError> {
    if !candidate.status.can_transition_to_consultant() {
        return Ok(Role::Candidat);
    }

    match candidate.contract_type.as_deref() {
        Some(contract_type) => consultant_role_for_contract(contract_type),
        None => Err(LifecycleError::MissingContractType),
    }
}
