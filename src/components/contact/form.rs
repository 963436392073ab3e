use std::fmt;

use crate::config::ContactConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
	Name,
	Email,
	Message,
}

impl FieldName {
	pub fn as_str(self) -> &'static str {
		match self {
			FieldName::Name => "name",
			FieldName::Email => "email",
			FieldName::Message => "message",
		}
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
	Text,
	Email,
}

impl InputType {
	pub fn as_attr(self) -> &'static str {
		match self {
			InputType::Text => "text",
			InputType::Email => "email",
		}
	}
}

/// Single-line input or multi-line text area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
	Input(InputType),
	TextArea { rows: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
	pub name: FieldName,
	pub label: &'static str,
	pub placeholder: &'static str,
	pub required: bool,
	pub kind: FieldKind,
}

impl FieldSpec {
	/// Fill of the field's progress bar in `[0, 1]`.
	pub fn progress(&self, value: &str, config: &ContactConfig) -> f64 {
		let full = match self.kind {
			FieldKind::Input(_) => config.input_progress_chars,
			FieldKind::TextArea { .. } => config.textarea_progress_chars,
		};
		if full == 0 {
			return 1.0;
		}
		(value.chars().count() as f64 / full as f64).min(1.0)
	}
}

pub const FIELDS: [FieldSpec; 3] = [
	FieldSpec {
		name: FieldName::Name,
		label: "Name",
		placeholder: "Your name",
		required: true,
		kind: FieldKind::Input(InputType::Text),
	},
	FieldSpec {
		name: FieldName::Email,
		label: "Email",
		placeholder: "your.email@example.com",
		required: true,
		kind: FieldKind::Input(InputType::Email),
	},
	FieldSpec {
		name: FieldName::Message,
		label: "Message",
		placeholder: "Tell me about your project...",
		required: true,
		kind: FieldKind::TextArea { rows: 5 },
	},
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
	Missing(FieldName),
	InvalidEmail(String),
}

impl fmt::Display for FormError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FormError::Missing(field) => write!(f, "please fill in your {field}"),
			FormError::InvalidEmail(value) => write!(f, "\"{value}\" is not a valid email address"),
		}
	}
}

impl std::error::Error for FormError {}

fn looks_like_email(value: &str) -> bool {
	let Some((local, domain)) = value.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& !domain.contains('@')
		&& domain.split('.').count() >= 2
		&& domain.split('.').all(|part| !part.is_empty())
		&& !value.chars().any(char::is_whitespace)
}

impl ContactForm {
	pub fn get(&self, field: FieldName) -> &str {
		match field {
			FieldName::Name => &self.name,
			FieldName::Email => &self.email,
			FieldName::Message => &self.message,
		}
	}

	pub fn set(&mut self, field: FieldName, value: String) {
		match field {
			FieldName::Name => self.name = value,
			FieldName::Email => self.email = value,
			FieldName::Message => self.message = value,
		}
	}

	/// Checks required fields in display order, then the email format.
	pub fn validate(&self) -> Result<(), FormError> {
		for spec in FIELDS.iter().filter(|s| s.required) {
			if self.get(spec.name).trim().is_empty() {
				return Err(FormError::Missing(spec.name));
			}
		}
		let email = self.email.trim();
		if !looks_like_email(email) {
			return Err(FormError::InvalidEmail(email.to_string()));
		}
		Ok(())
	}
}

/// Failure reported by a [`ContactSubmitter`](super::ContactSubmitter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
	Invalid(FormError),
	Rejected(String),
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SubmitError::Invalid(e) => write!(f, "{e}"),
			SubmitError::Rejected(reason) => write!(
				f,
				"There was an error submitting your message ({reason}). Please try again."
			),
		}
	}
}

impl std::error::Error for SubmitError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			SubmitError::Invalid(e) => Some(e),
			SubmitError::Rejected(_) => None,
		}
	}
}

impl From<FormError> for SubmitError {
	fn from(e: FormError) -> Self {
		SubmitError::Invalid(e)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	Sending,
	Success,
	Error(String),
}

/// Form contents plus where the submission stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactModel {
	pub form: ContactForm,
	pub status: SubmitStatus,
}

impl ContactModel {
	pub fn is_sending(&self) -> bool {
		self.status == SubmitStatus::Sending
	}

	/// Editing after a finished submission returns the form to idle.
	pub fn edit(&mut self, field: FieldName, value: String) {
		self.form.set(field, value);
		if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error(_)) {
			self.status = SubmitStatus::Idle;
		}
	}

	/// Moves to `Sending` and hands out the form to submit.
	///
	/// Returns `Ok(None)` while a submission is already in flight.
	pub fn begin_submit(&mut self) -> Result<Option<ContactForm>, SubmitError> {
		if self.is_sending() {
			return Ok(None);
		}
		if let Err(e) = self.form.validate() {
			self.status = SubmitStatus::Error(e.to_string());
			return Err(e.into());
		}
		self.status = SubmitStatus::Sending;
		Ok(Some(self.form.clone()))
	}

	/// Success clears the form; failure keeps it for another attempt.
	pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
		if !self.is_sending() {
			return;
		}
		match result {
			Ok(()) => {
				self.form = ContactForm::default();
				self.status = SubmitStatus::Success;
			}
			Err(e) => self.status = SubmitStatus::Error(e.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> ContactModel {
		let mut model = ContactModel::default();
		model.edit(FieldName::Name, "Ada".into());
		model.edit(FieldName::Email, "ada@example.com".into());
		model.edit(FieldName::Message, "Hello there".into());
		model
	}

	#[test]
	fn progress_depends_on_field_kind() {
		let config = ContactConfig::default();
		let [name, _, message] = FIELDS;
		assert_eq!(name.progress("", &config), 0.0);
		assert_eq!(name.progress("0123456789", &config), 0.5);
		assert_eq!(name.progress(&"x".repeat(40), &config), 1.0);
		assert_eq!(message.progress(&"x".repeat(25), &config), 0.25);
	}

	#[test]
	fn validation_reports_the_first_missing_field() {
		let mut form = ContactForm::default();
		assert_eq!(form.validate(), Err(FormError::Missing(FieldName::Name)));
		form.name = "Ada".into();
		form.message = "   ".into();
		form.email = "ada@example.com".into();
		assert_eq!(form.validate(), Err(FormError::Missing(FieldName::Message)));
	}

	#[test]
	fn malformed_emails_are_rejected() {
		for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@x.io"] {
			assert!(!looks_like_email(bad), "{bad}");
		}
		assert!(looks_like_email("ada.lovelace@example.co.uk"));
	}

	#[test]
	fn successful_submission_clears_the_form() {
		let mut model = filled();
		let sent = model.begin_submit().unwrap().unwrap();
		assert_eq!(sent.name, "Ada");
		assert!(model.is_sending());

		model.finish_submit(Ok(()));
		assert_eq!(model.status, SubmitStatus::Success);
		assert_eq!(model.form, ContactForm::default());
	}

	#[test]
	fn failed_submission_keeps_the_form() {
		let mut model = filled();
		model.begin_submit().unwrap();
		model.finish_submit(Err(SubmitError::Rejected("offline".into())));
		assert!(matches!(model.status, SubmitStatus::Error(ref m) if m.contains("offline")));
		assert_eq!(model.form.name, "Ada");

		assert!(model.begin_submit().unwrap().is_some());
	}

	#[test]
	fn double_submit_is_ignored_while_sending() {
		let mut model = filled();
		assert!(model.begin_submit().unwrap().is_some());
		assert_eq!(model.begin_submit(), Ok(None));
		assert!(model.is_sending());
	}

	#[test]
	fn invalid_form_never_reaches_sending() {
		let mut model = ContactModel::default();
		let err = model.begin_submit().unwrap_err();
		assert_eq!(err, SubmitError::Invalid(FormError::Missing(FieldName::Name)));
		assert_eq!(model.status, SubmitStatus::Error("please fill in your name".into()));
	}

	#[test]
	fn late_results_are_dropped() {
		let mut model = filled();
		model.finish_submit(Ok(()));
		assert_eq!(model.status, SubmitStatus::Idle);
		assert_eq!(model.form.name, "Ada");
	}

	#[test]
	fn editing_after_success_resets_status() {
		let mut model = filled();
		model.begin_submit().unwrap();
		model.finish_submit(Ok(()));
		model.edit(FieldName::Name, "B".into());
		assert_eq!(model.status, SubmitStatus::Idle);
	}
}
