//! Role scoring: pluggable, trait-based scorer for one (skills, role) pair.
//!
//! Default: `OverlapRoleScorer` (coverage ratio + concentration term + trending boost).
//! `Advisor` holds an `Arc<dyn RoleScorer>` so the formula can be swapped without
//! touching the ranker or the menu.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{RoleCatalog, RoleProfile, TRENDING_REASON_TAGS};
use crate::errors::AdvisorError;
use crate::matching::normalize::SkillSet;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Match score for one role, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub role: String,
    pub score: f64, // 0.0 – 1.0
    pub reason: String,
}

impl ScoreResult {
    /// Score as a whole percentage, 0 – 100.
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the scoring formula. The returned score must lie in [0, 1].
pub trait RoleScorer: Send + Sync {
    fn score(&self, catalog: &RoleCatalog, skills: &SkillSet, role: &RoleProfile) -> ScoreResult;
}

// ────────────────────────────────────────────────────────────────────────────
// OverlapRoleScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

const COVERAGE_WEIGHT: f64 = 0.6;
const CONCENTRATION_WEIGHT: f64 = 0.2;
const CONCENTRATION_CAP: f64 = 0.5;

/// Algorithm:
/// 1. overlap = |skills ∩ required|
/// 2. ratio = overlap / max(1, |required|)
/// 3. concentration = min(0.5, overlap / max(1, |skills|))
/// 4. base = 0.6 × ratio + 0.2 × concentration
/// 5. add the trending boost of every role tag found in the catalog's table
/// 6. clamp to [0, 1]
pub struct OverlapRoleScorer;

impl RoleScorer for OverlapRoleScorer {
    fn score(&self, catalog: &RoleCatalog, skills: &SkillSet, role: &RoleProfile) -> ScoreResult {
        let overlap = role
            .required_skills
            .iter()
            .filter(|s| skills.contains(s))
            .count();

        let ratio = overlap as f64 / role.required_skills.len().max(1) as f64;
        let concentration = (overlap as f64 / skills.len().max(1) as f64).min(CONCENTRATION_CAP);
        let base = COVERAGE_WEIGHT * ratio + CONCENTRATION_WEIGHT * concentration;

        let boost: f64 = role
            .tags
            .iter()
            .filter_map(|tag| catalog.trending_boost(tag))
            .sum();

        let score = (base + boost).clamp(0.0, 1.0);

        debug!(
            role = %role.name,
            overlap,
            ratio,
            concentration,
            boost,
            score,
            "scored role"
        );

        ScoreResult {
            role: role.name.clone(),
            score,
            reason: build_reason(overlap, &role.tags),
        }
    }
}

/// Scores a single role by name. Unknown names are rejected, never substituted.
pub fn score_role(
    catalog: &RoleCatalog,
    scorer: &dyn RoleScorer,
    skills: &SkillSet,
    role_name: &str,
) -> Result<ScoreResult, AdvisorError> {
    let role = catalog.get(role_name)?;
    Ok(scorer.score(catalog, skills, role))
}

/// Clauses in fixed order: match count, then trending alignment.
fn build_reason(overlap: usize, tags: &[String]) -> String {
    let mut parts = Vec::with_capacity(2);

    if overlap > 0 {
        parts.push(format!("{overlap} matching skill(s)"));
    } else {
        parts.push("No direct skill matches".to_string());
    }

    if tags
        .iter()
        .any(|t| TRENDING_REASON_TAGS.contains(&t.as_str()))
    {
        parts.push("Role aligned with trending areas".to_string());
    }

    parts.join("; ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn score(raw: &[&str], role: &str) -> ScoreResult {
        let catalog = RoleCatalog::builtin();
        score_role(&catalog, &OverlapRoleScorer, &SkillSet::from_raw(raw), role).unwrap()
    }

    #[test]
    fn test_frontend_scenario() {
        let result = score(&["javascript", "react", "html", "css"], "Frontend Engineer");
        // 0.6 × 4/7 + 0.2 × 0.5 + 0.03 (web) ≈ 0.4729
        let expected = 0.6 * (4.0 / 7.0) + 0.2 * 0.5 + 0.03;
        assert!((result.score - expected).abs() < 1e-9, "Score was {}", result.score);
        assert!((result.score - 0.4729).abs() < 1e-4);
        assert_eq!(result.reason, "4 matching skill(s)");
        assert_eq!(result.percent(), 47);
    }

    #[test]
    fn test_no_matches_with_trending_tags() {
        let result = score(&["cooking"], "Data Scientist / ML Engineer");
        // ai + ml + data boosts only
        assert!((result.score - 0.21).abs() < 1e-9, "Score was {}", result.score);
        assert_eq!(
            result.reason,
            "No direct skill matches; Role aligned with trending areas"
        );
    }

    #[test]
    fn test_empty_skills_score_is_boost_only() {
        let result = score(&[], "Backend Engineer");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.reason, "No direct skill matches");
    }

    #[test]
    fn test_concentration_term_is_capped() {
        // one skill, fully concentrated: min(0.5, 1/1) = 0.5
        let result = score(&["selenium"], "QA / Test Automation");
        let expected = 0.6 * (1.0 / 6.0) + 0.2 * 0.5;
        assert!((result.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_concentration_diluted_by_unrelated_skills() {
        let result = score(
            &["selenium", "baking", "knitting", "chess", "piano"],
            "QA / Test Automation",
        );
        let expected = 0.6 * (1.0 / 6.0) + 0.2 * (1.0 / 5.0);
        assert!((result.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_score_clamped_to_one() {
        let catalog = RoleCatalog::new(
            vec![RoleProfile::new("Hype", &["rust"], "", &["a", "b"])],
            vec![("a".to_string(), 0.9), ("b".to_string(), 0.9)],
        )
        .unwrap();
        let skills = SkillSet::from_raw(&["rust"]);
        let result = score_role(&catalog, &OverlapRoleScorer, &skills, "Hype").unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.percent(), 100);
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let catalog = RoleCatalog::builtin();
        let inputs: [&[&str]; 4] = [
            &[],
            &[
                "python",
                "ml",
                "pandas",
                "numpy",
                "statistics",
                "tensorflow",
                "pytorch",
                "machine learning",
            ],
            &["sql"],
            &["docker", "kubernetes", "aws", "gcp", "ci/cd", "monitoring", "infrastructure"],
        ];
        for raw in inputs {
            let skills = SkillSet::from_raw(raw);
            for role in catalog.roles() {
                let result = OverlapRoleScorer.score(&catalog, &skills, role);
                assert!((0.0..=1.0).contains(&result.score), "{} out of range", result.role);
                assert!(result.percent() <= 100);
            }
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let catalog = RoleCatalog::builtin();
        let skills = SkillSet::from_raw(&["python"]);
        let err = score_role(&catalog, &OverlapRoleScorer, &skills, "Wizard").unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownRole(ref r) if r == "Wizard"));
    }

    #[test]
    fn test_reason_web_tag_is_not_trending_clause() {
        assert_eq!(
            build_reason(2, &["web".to_string(), "frontend".to_string()]),
            "2 matching skill(s)"
        );
        assert_eq!(
            build_reason(1, &["cloud".to_string()]),
            "1 matching skill(s); Role aligned with trending areas"
        );
    }
}
