use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::RoleCatalog;
use crate::errors::AdvisorError;
use crate::matching::normalize::SkillSet;
use crate::matching::scoring::{RoleScorer, ScoreResult};

/// Scores every catalog role and returns the best `top_n`, highest first.
///
/// The sort is stable: equal scores keep catalog declaration order, so the
/// first-declared role wins a tie. `top_n` larger than the catalog returns
/// every role. The top recommendation is always element 0.
pub fn rank_roles<S: AsRef<str>>(
    catalog: &RoleCatalog,
    scorer: &dyn RoleScorer,
    raw_skills: &[S],
    top_n: usize,
) -> Result<Vec<ScoreResult>, AdvisorError> {
    if top_n == 0 {
        return Err(AdvisorError::Validation(
            "recommendation count must be at least 1".to_string(),
        ));
    }

    let skills = SkillSet::from_raw(raw_skills);
    let mut scored: Vec<ScoreResult> = catalog
        .roles()
        .iter()
        .map(|role| scorer.score(catalog, &skills, role))
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(top_n);

    debug!(
        skills = skills.len(),
        returned = scored.len(),
        "ranked catalog roles"
    );

    Ok(scored)
}
