//! Site chrome around the routed pages.

mod footer;
mod navbar;
mod scroll;

pub use footer::Footer;
pub use navbar::Navbar;
pub use scroll::{ScrollChrome, scroll_to_section};
