// Static reference data: role profiles, trending boosts, market tips.
// Built once at startup and shared read-only with every component.

pub mod roles;
pub mod tips;
pub mod trending;

pub use roles::{RoleCatalog, RoleProfile};
pub use tips::market_tips;
pub use trending::{TRENDING_BOOSTS, TRENDING_REASON_TAGS};
