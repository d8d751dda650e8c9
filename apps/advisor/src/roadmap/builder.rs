//! Roadmap builder: turns a gap analysis into a fixed-structure weekly plan.
//!
//! Template (week order never depends on content):
//! - Weeks 1–4: one missing skill per week, first four in alphabetical order;
//!   a generic fundamentals task fills any remaining week.
//! - Weeks 5–8: a guided project, only the first task names the role.
//! - Weeks 9–10: interview and algorithms practice.
//! - Weeks 11–12: portfolio, then applications.

use serde::{Deserialize, Serialize};

use crate::catalog::RoleCatalog;
use crate::errors::AdvisorError;
use crate::matching::gap::GapResult;
use crate::matching::normalize::SkillSet;

pub const ROADMAP_WEEKS: usize = 12;

const FOCUS_WEEKS: usize = 4;

const FUNDAMENTALS_TASK: &str =
    "Deepen core fundamentals and practice small exercises (4-6 hrs).";

const PROJECT_FOLLOW_UP_TASKS: [&str; 3] = [
    "Continue project; add tests, version control and CI steps.",
    "Add deployment / demo (host on free tier) and write README.",
    "Polish UI/UX and fix performance issues; get feedback.",
];

const INTERVIEW_PREP_TASKS: [&str; 2] = [
    "Practice mock interviews: behavioral + 5 coding problems (2-3 hrs/day).",
    "Data structures and algorithms: targeted practice (arrays, maps, recursion).",
];

const LAUNCH_TASKS: [&str; 2] = [
    "Prepare tailored resume and LinkedIn; publish project demo (portfolio).",
    "Apply to roles, network, and schedule mock interviews with peers/mentors.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapPhase {
    Fundamentals,
    Project,
    InterviewPrep,
    Launch,
}

/// One week of the plan. `label` is always `"Week {week}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub week: u8,
    pub label: String,
    pub phase: RoadmapPhase,
    pub task: String,
}

/// A complete plan: exactly `ROADMAP_WEEKS` entries, plus the gap it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub target_role: String,
    pub entries: Vec<RoadmapEntry>,
    pub gap: GapResult,
}

/// Builds the 12-week roadmap for `role_name`. Unknown names are rejected.
pub fn build_roadmap<S: AsRef<str>>(
    catalog: &RoleCatalog,
    role_name: &str,
    raw_skills: &[S],
) -> Result<Roadmap, AdvisorError> {
    let role = catalog.get(role_name)?;
    let gap = GapResult::for_role(&SkillSet::from_raw(raw_skills), role);

    let mut tasks: Vec<(RoadmapPhase, String)> = Vec::with_capacity(ROADMAP_WEEKS);

    for i in 0..FOCUS_WEEKS {
        let task = match gap.missing.get(i) {
            Some(skill) => {
                format!("Learn fundamentals of {skill} (3-6 hrs): small exercises & mini-tutorial.")
            }
            None => FUNDAMENTALS_TASK.to_string(),
        };
        tasks.push((RoadmapPhase::Fundamentals, task));
    }

    tasks.push((
        RoadmapPhase::Project,
        format!("Start a guided project for {role_name}, include at least one missing skill."),
    ));
    tasks.extend(
        PROJECT_FOLLOW_UP_TASKS
            .iter()
            .map(|t| (RoadmapPhase::Project, t.to_string())),
    );
    tasks.extend(
        INTERVIEW_PREP_TASKS
            .iter()
            .map(|t| (RoadmapPhase::InterviewPrep, t.to_string())),
    );
    tasks.extend(
        LAUNCH_TASKS
            .iter()
            .map(|t| (RoadmapPhase::Launch, t.to_string())),
    );

    let entries = tasks
        .into_iter()
        .zip(1u8..)
        .map(|((phase, task), week)| RoadmapEntry {
            week,
            label: format!("Week {week}"),
            phase,
            task,
        })
        .collect();

    Ok(Roadmap {
        target_role: role.name.clone(),
        entries,
        gap,
    })
}
