// Roadmap generation: a fixed 12-week learning plan for a target role.
// Deterministic: same role + same raw skills always yields the same plan.

pub mod builder;

pub use builder::{build_roadmap, Roadmap, RoadmapEntry, RoadmapPhase, ROADMAP_WEEKS};
