use serde::{Deserialize, Serialize};

use crate::interview::random::RandomSource;

/// Role key holding the fallback questions.
pub const DEFAULT_BANK: &str = "Default";

/// A question prompt with the keywords a good answer is expected to mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub prompt: String,
    pub keywords: Vec<String>,
}

impl InterviewQuestion {
    pub fn new(prompt: &str, keywords: &[&str]) -> Self {
        Self {
            prompt: prompt.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Question banks grouped by role name. Always holds a non-empty `Default` bank.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    banks: Vec<(String, Vec<InterviewQuestion>)>,
}

impl QuestionBank {
    pub fn builtin() -> Self {
        let banks = vec![
            (
                "Frontend Engineer",
                vec![
                    InterviewQuestion::new(
                        "Explain the virtual DOM and why React uses it.",
                        &["react", "virtual", "dom", "diff", "reconciliation"],
                    ),
                    InterviewQuestion::new(
                        "How do you optimize web performance?",
                        &["lazy", "bundle", "cdn", "cache", "minify", "critical"],
                    ),
                ],
            ),
            (
                "Backend Engineer",
                vec![
                    InterviewQuestion::new(
                        "Describe how you would design a RESTful API for a book store.",
                        &["rest", "endpoints", "http", "status", "auth", "crud"],
                    ),
                    InterviewQuestion::new(
                        "Explain database indexing and when to use it.",
                        &["index", "query", "performance", "b-tree", "select"],
                    ),
                ],
            ),
            (
                "Data Scientist / ML Engineer",
                vec![
                    InterviewQuestion::new(
                        "Explain bias-variance tradeoff.",
                        &["bias", "variance", "overfit", "underfit", "regularization"],
                    ),
                    InterviewQuestion::new(
                        "Describe how you'd evaluate a classification model.",
                        &["accuracy", "precision", "recall", "f1", "roc", "auc"],
                    ),
                ],
            ),
            (
                "DevOps / SRE",
                vec![
                    InterviewQuestion::new(
                        "How do you design a CI/CD pipeline?",
                        &["ci", "cd", "pipeline", "automation", "tests", "deploy"],
                    ),
                    InterviewQuestion::new(
                        "What is infrastructure as code?",
                        &["terraform", "ansible", "declarative", "provision"],
                    ),
                ],
            ),
            (
                DEFAULT_BANK,
                vec![
                    InterviewQuestion::new(
                        "Tell me about a challenging problem you solved.",
                        &["problem", "challenge", "impact", "team", "learned"],
                    ),
                    InterviewQuestion::new(
                        "How do you keep your skills up to date?",
                        &["learn", "courses", "projects", "reading", "practice"],
                    ),
                ],
            ),
        ];

        Self {
            banks: banks
                .into_iter()
                .map(|(role, questions)| (role.to_string(), questions))
                .collect(),
        }
    }

    /// Questions for a role, if the role has its own bank.
    pub fn for_role(&self, role: &str) -> Option<&[InterviewQuestion]> {
        self.banks
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, questions)| questions.as_slice())
    }

    /// The fallback bank.
    pub fn default_bank(&self) -> &[InterviewQuestion] {
        self.for_role(DEFAULT_BANK).unwrap_or(&[])
    }

    /// Picks a random question from the role's bank, or from `Default` when
    /// the role has none.
    pub fn pick(&self, role: &str, rng: &mut dyn RandomSource) -> Option<&InterviewQuestion> {
        let bank = match self.for_role(role) {
            Some(questions) if !questions.is_empty() => questions,
            _ => self.default_bank(),
        };
        bank.get(rng.pick_index(bank.len()))
    }

    /// Keywords for a prompt.
    ///
    /// Exact prompt match within the role's bank wins. Anything else (no bank
    /// for the role, or a prompt from a different bank) falls back to the
    /// first Default question's keywords. Returns `(keywords, matched_exactly)`.
    pub fn keywords_for(&self, role: &str, prompt: &str) -> (&[String], bool) {
        let exact = self
            .for_role(role)
            .and_then(|questions| questions.iter().find(|q| q.prompt == prompt));

        match exact {
            Some(question) => (question.keywords.as_slice(), true),
            None => (
                self.default_bank()
                    .first()
                    .map(|q| q.keywords.as_slice())
                    .unwrap_or(&[]),
                false,
            ),
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
