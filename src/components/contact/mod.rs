//! Contact form: field model, submission state machine and its view.

mod component;
mod form;
mod submitter;

pub use component::ContactFormCard;
