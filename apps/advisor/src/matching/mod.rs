// Skill matching: normalization, per-role scoring, ranking, and gap analysis.
// All functions are pure; the catalog is borrowed read-only.

pub mod gap;
pub mod normalize;
pub mod ranker;
pub mod scoring;

pub use gap::{analyze_gap, GapResult};
pub use normalize::SkillSet;
pub use ranker::rank_roles;
pub use scoring::{score_role, OverlapRoleScorer, RoleScorer, ScoreResult};
