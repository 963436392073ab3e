//! Sections of the portfolio page, top to bottom.

mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
