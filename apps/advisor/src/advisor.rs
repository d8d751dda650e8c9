use std::sync::Arc;

use tracing::info;

use crate::catalog::RoleCatalog;
use crate::errors::AdvisorError;
use crate::interview::{
    evaluate_answer, EvaluationResult, InterviewQuestion, QuestionBank, RandomSource,
};
use crate::matching::{
    analyze_gap, rank_roles, score_role, GapResult, OverlapRoleScorer, RoleScorer, ScoreResult,
    SkillSet,
};
use crate::roadmap::{build_roadmap, Roadmap};

/// Entry point consumed by the menu (or any other caller).
///
/// Holds the read-only catalog, question banks, and the pluggable scorer.
/// Every operation is a fresh, pure computation; nothing is cached between calls.
#[derive(Clone)]
pub struct Advisor {
    pub catalog: Arc<RoleCatalog>,
    pub questions: Arc<QuestionBank>,
    /// Pluggable role scorer. Default: OverlapRoleScorer.
    pub scorer: Arc<dyn RoleScorer>,
}

impl Advisor {
    pub fn new(catalog: RoleCatalog, questions: QuestionBank, scorer: Arc<dyn RoleScorer>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            questions: Arc::new(questions),
            scorer,
        }
    }

    /// Built-in catalog, built-in question banks, default scorer.
    pub fn builtin() -> Self {
        Self::new(
            RoleCatalog::builtin(),
            QuestionBank::builtin(),
            Arc::new(OverlapRoleScorer),
        )
    }

    /// Top `top_n` roles for the raw skills, best first. `recommend(.., 1)[0]`
    /// is the top recommendation.
    pub fn recommend<S: AsRef<str>>(
        &self,
        raw_skills: &[S],
        top_n: usize,
    ) -> Result<Vec<ScoreResult>, AdvisorError> {
        let ranked = rank_roles(&self.catalog, self.scorer.as_ref(), raw_skills, top_n)?;
        info!(
            "Recommended {} role(s); top: {}",
            ranked.len(),
            ranked.first().map(|r| r.role.as_str()).unwrap_or("-")
        );
        Ok(ranked)
    }

    /// The single best-scoring role.
    pub fn top_recommendation<S: AsRef<str>>(
        &self,
        raw_skills: &[S],
    ) -> Result<ScoreResult, AdvisorError> {
        self.recommend(raw_skills, 1)?
            .into_iter()
            .next()
            .ok_or_else(|| AdvisorError::Validation("role catalog is empty".to_string()))
    }

    /// Score for one named role.
    pub fn score<S: AsRef<str>>(
        &self,
        raw_skills: &[S],
        role_name: &str,
    ) -> Result<ScoreResult, AdvisorError> {
        score_role(
            &self.catalog,
            self.scorer.as_ref(),
            &SkillSet::from_raw(raw_skills),
            role_name,
        )
    }

    pub fn gap<S: AsRef<str>>(
        &self,
        raw_skills: &[S],
        role_name: &str,
    ) -> Result<GapResult, AdvisorError> {
        analyze_gap(&self.catalog, &SkillSet::from_raw(raw_skills), role_name)
    }

    pub fn roadmap<S: AsRef<str>>(
        &self,
        role_name: &str,
        raw_skills: &[S],
    ) -> Result<Roadmap, AdvisorError> {
        let roadmap = build_roadmap(&self.catalog, role_name, raw_skills)?;
        info!(
            "Built roadmap for {} ({} missing skills)",
            roadmap.target_role,
            roadmap.gap.missing.len()
        );
        Ok(roadmap)
    }

    /// Random question for the role, or from the Default bank.
    pub fn pick_question(
        &self,
        role_name: &str,
        rng: &mut dyn RandomSource,
    ) -> Option<&InterviewQuestion> {
        self.questions.pick(role_name, rng)
    }

    pub fn evaluate_answer(
        &self,
        role_name: &str,
        prompt: &str,
        answer: &str,
        rng: &mut dyn RandomSource,
    ) -> EvaluationResult {
        evaluate_answer(&self.questions, role_name, prompt, answer, rng)
    }

    pub fn list_roles(&self) -> Vec<&str> {
        self.catalog.role_names()
    }

    pub fn role_description(&self, role_name: &str) -> Result<&str, AdvisorError> {
        self.catalog.description(role_name)
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoleProfile;
    use crate::interview::SequenceSource;
    use crate::roadmap::ROADMAP_WEEKS;

    /// Prefers QA regardless of skills, to exercise the scorer seam.
    struct FixedScorer;

    impl RoleScorer for FixedScorer {
        fn score(
            &self,
            _catalog: &RoleCatalog,
            _skills: &SkillSet,
            role: &RoleProfile,
        ) -> ScoreResult {
            let score = if role.name == "QA / Test Automation" { 0.9 } else { 0.1 };
            ScoreResult {
                role: role.name.clone(),
                score,
                reason: "fixed".to_string(),
            }
        }
    }

    #[test]
    fn test_top_recommendation_matches_recommend_first() {
        let advisor = Advisor::builtin();
        let skills = ["Python", "Pandas, NumPy"];
        let top = advisor.top_recommendation(&skills).unwrap();
        let all = advisor.recommend(&skills, 8).unwrap();
        assert_eq!(top, all[0]);
        assert_eq!(top.role, "Data Scientist / ML Engineer");
    }

    #[test]
    fn test_scorer_is_swappable() {
        let advisor = Advisor::new(
            RoleCatalog::builtin(),
            QuestionBank::builtin(),
            Arc::new(FixedScorer),
        );
        let top = advisor.top_recommendation(&["javascript"]).unwrap();
        assert_eq!(top.role, "QA / Test Automation");
        assert_eq!(top.reason, "fixed");
    }

    #[test]
    fn test_unknown_role_everywhere() {
        let advisor = Advisor::builtin();
        let skills = ["python"];
        assert!(matches!(
            advisor.gap(&skills, "Nope"),
            Err(AdvisorError::UnknownRole(_))
        ));
        assert!(matches!(
            advisor.roadmap("Nope", &skills),
            Err(AdvisorError::UnknownRole(_))
        ));
        assert!(matches!(
            advisor.score(&skills, "Nope"),
            Err(AdvisorError::UnknownRole(_))
        ));
        assert!(matches!(
            advisor.role_description("Nope"),
            Err(AdvisorError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_operations_are_idempotent() {
        let advisor = Advisor::builtin();
        let skills = ["Docker", "AWS, GCP"];
        assert_eq!(
            advisor.recommend(&skills, 4).unwrap(),
            advisor.recommend(&skills, 4).unwrap()
        );
        assert_eq!(
            advisor.gap(&skills, "DevOps / SRE").unwrap(),
            advisor.gap(&skills, "DevOps / SRE").unwrap()
        );
        assert_eq!(
            advisor.roadmap("DevOps / SRE", &skills).unwrap(),
            advisor.roadmap("DevOps / SRE", &skills).unwrap()
        );
    }

    #[test]
    fn test_roadmap_carries_gap() {
        let advisor = Advisor::builtin();
        let roadmap = advisor.roadmap("Backend Engineer", &["python"]).unwrap();
        assert_eq!(roadmap.entries.len(), ROADMAP_WEEKS);
        assert_eq!(roadmap.gap, advisor.gap(&["python"], "Backend Engineer").unwrap());
    }

    #[test]
    fn test_pick_then_evaluate_round() {
        let advisor = Advisor::builtin();
        let mut rng = SequenceSource::new(vec![0.9], vec![0]);
        let question = advisor
            .pick_question("Frontend Engineer", &mut rng)
            .unwrap()
            .clone();
        let result = advisor.evaluate_answer(
            "Frontend Engineer",
            &question.prompt,
            "React reconciliation, for example",
            &mut rng,
        );
        // react + reconciliation: 40 + 24 + 36 = 100
        assert_eq!(result.score, 100);
        assert!(!result.feedback.contains("concrete example"));
    }

    #[test]
    fn test_list_roles_and_description() {
        let advisor = Advisor::builtin();
        let roles = advisor.list_roles();
        assert_eq!(roles.len(), 8);
        assert!(advisor
            .role_description(roles[0])
            .unwrap()
            .contains("web interfaces"));
    }
}
