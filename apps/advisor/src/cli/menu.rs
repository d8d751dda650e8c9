//! Menu loop: reads choices from any `BufRead`, writes screens to any `Write`.
//!
//! Selection policy: an out-of-range interview pick silently falls back to the
//! top recommendation. Gap analysis instead rejects a bad pick with "Invalid choice.".

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::advisor::Advisor;
use crate::catalog::market_tips;
use crate::cli::input::{parse_choice, parse_skill_line, wrap_text};
use crate::config::Config;
use crate::interview::RandomSource;
use crate::matching::ScoreResult;
use crate::models::UserProfile;
use crate::profile_store::{load_profile, save_profile};

const RULE_WIDTH: usize = 78;
const INTERVIEW_CANDIDATES: usize = 3;
const MISSING_PREVIEW: usize = 6;

pub struct Menu<R, W> {
    advisor: Advisor,
    config: Config,
    rng: Box<dyn RandomSource>,
    profile: UserProfile,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(
        advisor: Advisor,
        config: Config,
        rng: Box<dyn RandomSource>,
        input: R,
        out: W,
    ) -> Self {
        Self {
            advisor,
            config,
            rng,
            profile: UserProfile::new("", vec![]),
            input,
            out,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Greets the user, collects the initial profile, then loops until `0` or EOF.
    pub fn run(&mut self) -> Result<()> {
        self.header("Career Advisor: skills, roles, roadmap, mock interviews")?;

        let name = self
            .prompt("What's your name? (press Enter for 'Student'): ")?
            .unwrap_or_default();
        self.profile = UserProfile::new(&name, vec![]);
        writeln!(self.out, "Welcome, {}", self.profile.name)?;

        writeln!(
            self.out,
            "Enter comma-separated skills (e.g., 'Python, React, SQL'):"
        )?;
        let skills = self.prompt("Skills: ")?.unwrap_or_default();
        self.profile.skills = parse_skill_line(&skills);
        info!("Session started with {} raw skill(s)", self.profile.skills.len());

        loop {
            self.print_main_menu()?;
            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.show_recommendations()?,
                "2" => self.show_roadmap()?,
                "3" => self.run_mock_interview()?,
                "4" => self.show_gap_analysis()?,
                "5" => self.save()?,
                "6" => self.load()?,
                "7" => self.show_tips()?,
                "0" => {
                    writeln!(self.out, "Good luck, keep building!")?;
                    break;
                }
                _ => writeln!(self.out, "Unknown choice, try again.")?,
            }
        }

        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Main Menu: choose an action:")?;
        for line in [
            "  1) Show role recommendations",
            "  2) View personalized 12-week roadmap",
            "  3) Mock interview simulator",
            "  4) Skill-gap analysis for a role",
            "  5) Save profile",
            "  6) Load profile",
            "  7) Quick tips for an evolving job market",
            "  0) Exit",
        ] {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn show_recommendations(&mut self) -> Result<()> {
        let recs = self.advisor.recommend(&self.profile.skills, self.config.top_n)?;
        self.header("Role Recommendations")?;
        for rec in &recs {
            writeln!(
                self.out,
                "- {:28} | Score: {:>3}% | {}",
                rec.role,
                rec.percent(),
                rec.reason
            )?;
        }
        if let Some(top) = recs.first() {
            let desc = self.advisor.role_description(&top.role)?;
            writeln!(self.out)?;
            writeln!(self.out, "Top suggestion: {}: {}", top.role, desc)?;
        }
        Ok(())
    }

    fn show_roadmap(&mut self) -> Result<()> {
        let top = self.advisor.top_recommendation(&self.profile.skills)?;
        let roadmap = self.advisor.roadmap(&top.role, &self.profile.skills)?;

        self.header(&format!("12-Week Roadmap: Target {}", roadmap.target_role))?;
        writeln!(
            self.out,
            "Detected skills relevant to role: {}",
            join_or_none(&roadmap.gap.present)
        )?;
        let preview: Vec<String> = roadmap
            .gap
            .missing
            .iter()
            .take(MISSING_PREVIEW)
            .cloned()
            .collect();
        writeln!(
            self.out,
            "Top missing skills to focus on: {}",
            join_or_none(&preview)
        )?;
        writeln!(self.out)?;
        for entry in &roadmap.entries {
            writeln!(self.out, "{:8} - {}", entry.label, entry.task)?;
        }
        Ok(())
    }

    fn run_mock_interview(&mut self) -> Result<()> {
        let recs = self
            .advisor
            .recommend(&self.profile.skills, INTERVIEW_CANDIDATES)?;

        writeln!(self.out, "Which role shall we simulate an interview for?")?;
        for (i, rec) in recs.iter().enumerate() {
            writeln!(self.out, "  {}) {} (score {}%)", i + 1, rec.role, rec.percent())?;
        }
        writeln!(self.out, "  0) Enter custom role")?;

        let selection = self.prompt("Select: ")?.unwrap_or_default();
        let role = if selection == "0" {
            let custom = self.prompt("Enter role name: ")?.unwrap_or_default();
            if custom.is_empty() {
                fallback_role(&recs)
            } else {
                custom
            }
        } else {
            match parse_choice(&selection, recs.len()) {
                Some(idx) => recs[idx].role.clone(),
                None => fallback_role(&recs),
            }
        };

        let Some(question) = self.advisor.pick_question(&role, self.rng.as_mut()).cloned() else {
            writeln!(self.out, "No interview questions available.")?;
            return Ok(());
        };

        self.header(&format!("Mock Interview: {role}"))?;
        writeln!(self.out, "Question:")?;
        for line in wrap_text(&question.prompt, RULE_WIDTH, "    ", "    ") {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Type your short answer (one paragraph). Press Enter when done."
        )?;
        let answer = self.prompt("Answer: ")?.unwrap_or_default();

        let result =
            self.advisor
                .evaluate_answer(&role, &question.prompt, &answer, self.rng.as_mut());
        writeln!(self.out)?;
        writeln!(self.out, "Simulated score: {}/100", result.score)?;
        writeln!(self.out, "Feedback: {}", result.feedback)?;
        Ok(())
    }

    fn show_gap_analysis(&mut self) -> Result<()> {
        let roles: Vec<String> = self
            .advisor
            .list_roles()
            .into_iter()
            .map(str::to_string)
            .collect();

        writeln!(self.out, "Available roles:")?;
        for (i, role) in roles.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, role)?;
        }

        let pick = self.prompt("Pick role by number: ")?.unwrap_or_default();
        let Some(idx) = parse_choice(&pick, roles.len()) else {
            writeln!(self.out, "Invalid choice.")?;
            return Ok(());
        };
        let role = &roles[idx];

        let gap = self.advisor.gap(&self.profile.skills, role)?;
        let required: Vec<String> = self
            .advisor
            .catalog
            .get(role)?
            .declared_skills
            .clone();

        self.header(&format!("Skill-gap Analysis for: {role}"))?;
        writeln!(self.out, "Required skills for role: {}", required.join(", "))?;
        writeln!(self.out, "You have: {}", join_or_none(&gap.present))?;
        writeln!(
            self.out,
            "You are missing (prioritize these): {}",
            join_or_none(&gap.missing)
        )?;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let default_path = self.config.profile_path.display().to_string();
        let raw = self
            .prompt(&format!("Save filename (default {default_path}): "))?
            .unwrap_or_default();
        let path = if raw.is_empty() {
            self.config.profile_path.clone()
        } else {
            PathBuf::from(raw)
        };

        match save_profile(&path, &self.profile) {
            Ok(saved) => writeln!(self.out, "Profile saved to {}", saved.display())?,
            Err(e) => {
                warn!(code = e.code(), "Saving profile failed: {e}");
                writeln!(self.out, "Could not save profile: {e}")?;
            }
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let raw = self.prompt("Path to profile JSON: ")?.unwrap_or_default();
        let path = if raw.is_empty() {
            self.config.profile_path.clone()
        } else {
            PathBuf::from(raw)
        };

        match load_profile(&path) {
            Ok(profile) => {
                self.profile = profile;
                writeln!(
                    self.out,
                    "Loaded profile for {}, skills: {}",
                    self.profile.name,
                    self.profile.skills.join(", ")
                )?;
            }
            Err(e) => {
                warn!(code = e.code(), "Loading profile failed: {e}");
                writeln!(self.out, "Could not load profile: {e}")?;
            }
        }
        Ok(())
    }

    fn show_tips(&mut self) -> Result<()> {
        self.header("Quick Tips: Evolving Job Market")?;
        for (i, tip) in market_tips().iter().enumerate() {
            let marker = format!("{}) ", i + 1);
            let indent = " ".repeat(marker.len());
            for line in wrap_text(tip, RULE_WIDTH, &marker, &indent) {
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }

    fn header(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Prints `label` and reads one trimmed line. `None` on EOF.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Invalid selections fall back to the top recommendation.
fn fallback_role(recs: &[ScoreResult]) -> String {
    recs.first().map(|r| r.role.clone()).unwrap_or_default()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}
