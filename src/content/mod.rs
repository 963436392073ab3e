//! Static site content and the types describing it.

mod portfolio;
pub(crate) mod types;

pub use portfolio::{
	ABOUT_CARDS, CONTACT_CHANNELS, HERO_PHRASES, OWNER, PROJECTS, SECTIONS, skill_categories,
	top_skills,
};
pub use types::{Category, Owner, Project, Skill};
