mod component;
mod interpreter;

pub use component::TerminalCard;
pub use interpreter::Profile;
