const MARKET_TIPS: &[&str] = &[
    "Learn one cloud platform (AWS/GCP/Azure) and one IaC tool (Terraform).",
    "Build 2-3 portfolio projects with deployed demos (GitHub + live demo).",
    "Practice data structures & algorithms weekly (30-60 mins).",
    "Focus on communication: write README, explain trade-offs in interviews.",
    "Keep a learning log and adapt to new tools (micro-certifications help).",
    "Network: join local meetups, open-source, and mentorship channels.",
];

/// Quick tips for navigating an evolving job market, in display order.
pub fn market_tips() -> &'static [&'static str] {
    MARKET_TIPS
}
