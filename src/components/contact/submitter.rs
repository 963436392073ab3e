use std::time::Duration;

use leptos::prelude::set_timeout;
use log::info;

use super::form::{ContactForm, SubmitError};

pub type SubmitCallback = Box<dyn FnOnce(Result<(), SubmitError>) + 'static>;

/// Delivers a contact message somewhere and reports back once.
pub trait ContactSubmitter {
	fn submit(&self, form: ContactForm, on_done: SubmitCallback);
}

/// Pretends to send the message, resolving successfully after `delay`.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
	pub delay: Duration,
}

impl SimulatedSubmitter {
	pub fn new(delay_ms: u64) -> Self {
		Self {
			delay: Duration::from_millis(delay_ms),
		}
	}
}

impl ContactSubmitter for SimulatedSubmitter {
	fn submit(&self, form: ContactForm, on_done: SubmitCallback) {
		info!(
			"sending message from {} <{}> ({} chars)",
			form.name,
			form.email,
			form.message.chars().count()
		);
		set_timeout(move || on_done(Ok(())), self.delay);
	}
}
