/// Tags considered "hot" in the job market, with their additive score boost.
/// Every boost lies in (0, 1).
pub const TRENDING_BOOSTS: &[(&str, f64)] = &[
    ("ai", 0.08),
    ("ml", 0.08),
    ("cloud", 0.06),
    ("data", 0.05),
    ("web", 0.03),
];

/// Tags that earn the "aligned with trending areas" reason clause.
/// `web` is boosted but does not count toward the reason.
pub const TRENDING_REASON_TAGS: &[&str] = &["ai", "ml", "cloud", "data"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boosts_are_strictly_between_zero_and_one() {
        for (tag, boost) in TRENDING_BOOSTS {
            assert!(*boost > 0.0 && *boost < 1.0, "{tag} boost out of range");
        }
    }

    #[test]
    fn test_reason_tags_are_all_boosted() {
        for tag in TRENDING_REASON_TAGS {
            assert!(TRENDING_BOOSTS.iter().any(|(t, _)| t == tag));
        }
    }
}
