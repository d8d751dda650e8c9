// Interactive menu: the calling collaborator around the advisor core.
// Owns prompts, text formatting, persistence calls, and selection fallback.

pub mod input;
pub mod menu;

pub use menu::Menu;
