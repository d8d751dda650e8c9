use serde::{Deserialize, Serialize};

use crate::catalog::{RoleCatalog, RoleProfile};
use crate::errors::AdvisorError;
use crate::matching::normalize::SkillSet;

/// Partition of a role's required skills by whether the user already has them.
/// Both lists are alphabetically sorted; together they equal the required set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapResult {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl GapResult {
    /// Splits a profile's required skills against the user's set.
    pub fn for_role(skills: &SkillSet, role: &RoleProfile) -> Self {
        // BTreeSet iteration is already sorted
        let (present, missing): (Vec<String>, Vec<String>) = role
            .required_skills
            .iter()
            .cloned()
            .partition(|s| skills.contains(s));
        Self { present, missing }
    }
}

/// Gap analysis for a role by name. Unknown names are rejected.
pub fn analyze_gap(
    catalog: &RoleCatalog,
    skills: &SkillSet,
    role_name: &str,
) -> Result<GapResult, AdvisorError> {
    let role = catalog.get(role_name)?;
    Ok(GapResult::for_role(skills, role))
}
