//! Role catalog: immutable role profiles keyed by unique name.
//!
//! Declaration order is significant: the ranker uses it to break score ties,
//! and the menu lists roles in this order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::trending::TRENDING_BOOSTS;
use crate::errors::AdvisorError;

/// One job role: required skills, a short description, and topic tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    /// Normalized skill tokens. Never empty.
    pub required_skills: BTreeSet<String>,
    /// The same tokens, deduplicated, in the order the role lists them.
    pub declared_skills: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
}

impl RoleProfile {
    pub fn new(name: &str, skills: &[&str], description: &str, tags: &[&str]) -> Self {
        let mut required_skills = BTreeSet::new();
        let declared_skills: Vec<String> = skills
            .iter()
            .filter(|s| required_skills.insert(s.to_string()))
            .map(|s| s.to_string())
            .collect();
        Self {
            name: name.to_string(),
            required_skills,
            declared_skills,
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Read-only lookup over role profiles and the trending-boost table.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
    trending: Vec<(String, f64)>,
}

impl RoleCatalog {
    /// Builds a catalog, rejecting duplicate names, empty or non-normalized
    /// skill sets, and boosts outside (0, 1).
    pub fn new(
        roles: Vec<RoleProfile>,
        trending: Vec<(String, f64)>,
    ) -> Result<Self, AdvisorError> {
        let mut seen = BTreeSet::new();
        for role in &roles {
            if !seen.insert(role.name.as_str()) {
                return Err(AdvisorError::Validation(format!(
                    "duplicate role name '{}'",
                    role.name
                )));
            }
            if role.required_skills.is_empty() {
                return Err(AdvisorError::Validation(format!(
                    "role '{}' has no required skills",
                    role.name
                )));
            }
            if let Some(bad) = role
                .required_skills
                .iter()
                .find(|s| s.is_empty() || s.trim() != s.as_str() || s.to_lowercase() != **s)
            {
                return Err(AdvisorError::Validation(format!(
                    "role '{}' has non-normalized skill '{bad}'",
                    role.name
                )));
            }
        }

        if let Some((tag, boost)) = trending.iter().find(|(_, b)| !(*b > 0.0 && *b < 1.0)) {
            return Err(AdvisorError::Validation(format!(
                "trending boost for '{tag}' must lie in (0, 1), got {boost}"
            )));
        }

        Ok(Self { roles, trending })
    }

    /// The built-in catalog of eight engineering and product roles.
    pub fn builtin() -> Self {
        let roles = vec![
            RoleProfile::new(
                "Frontend Engineer",
                &["javascript", "react", "html", "css", "typescript", "ui", "accessibility"],
                "Build user-facing web interfaces. Emphasize performance and UX.",
                &["web", "frontend"],
            ),
            RoleProfile::new(
                "Backend Engineer",
                &["python", "node.js", "java", "sql", "rest", "api", "microservices", "databases"],
                "Server-side systems, APIs, data modeling and business logic.",
                &["backend", "api"],
            ),
            RoleProfile::new(
                "Full-stack Engineer",
                &["javascript", "react", "node.js", "sql", "html", "css", "rest"],
                "Handles both frontend and backend; versatile product engineering.",
                &["web", "fullstack"],
            ),
            RoleProfile::new(
                "Data Scientist / ML Engineer",
                &[
                    "python",
                    "machine learning",
                    "ml",
                    "pandas",
                    "numpy",
                    "statistics",
                    "tensorflow",
                    "pytorch",
                ],
                "Analyze data and build ML models; productionize models for products.",
                &["ai", "ml", "data"],
            ),
            RoleProfile::new(
                "DevOps / SRE",
                &["docker", "kubernetes", "aws", "gcp", "ci/cd", "monitoring", "infrastructure"],
                "Ensure reliability, scalability and deployment automation.",
                &["cloud", "infra"],
            ),
            RoleProfile::new(
                "Data Engineer",
                &["etl", "sql", "spark", "hadoop", "airflow", "databases", "python"],
                "Design data pipelines and engineering systems for analytics.",
                &["data", "etl"],
            ),
            RoleProfile::new(
                "QA / Test Automation",
                &["selenium", "testing", "automation", "pytest", "integration tests", "qa"],
                "Automation and verification of product quality and regressions.",
                &["testing", "qa"],
            ),
            RoleProfile::new(
                "Product Manager (Technical)",
                &["communication", "roadmap", "stakeholders", "metrics", "product", "analytics"],
                "Define product vision, prioritize features with technical teams.",
                &["product"],
            ),
        ];

        Self {
            roles,
            trending: TRENDING_BOOSTS
                .iter()
                .map(|(tag, boost)| (tag.to_string(), *boost))
                .collect(),
        }
    }

    /// All profiles in declaration order.
    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// Role names in declaration order.
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }

    /// Looks up a role by exact name.
    pub fn get(&self, name: &str) -> Result<&RoleProfile, AdvisorError> {
        self.roles
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| AdvisorError::UnknownRole(name.to_string()))
    }

    pub fn description(&self, name: &str) -> Result<&str, AdvisorError> {
        self.get(name).map(|r| r.description.as_str())
    }

    /// Boost for a tag, or `None` if the tag is not trending.
    pub fn trending_boost(&self, tag: &str) -> Option<f64> {
        self.trending
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, boost)| *boost)
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
