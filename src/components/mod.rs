pub mod constellation;
pub mod contact;
pub mod helix;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod tilt;
