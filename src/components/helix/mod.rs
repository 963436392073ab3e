mod component;
mod geometry;
mod state;

pub use component::DnaHelix;
