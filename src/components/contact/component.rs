use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, error, warn};

use super::form::{ContactModel, FIELDS, FieldKind, FieldSpec, SubmitStatus};
use super::submitter::{ContactSubmitter, SimulatedSubmitter};
use crate::config::ContactConfig;

#[component]
fn AnimatedField(spec: FieldSpec, model: RwSignal<ContactModel>, config: ContactConfig) -> impl IntoView {
	let focused = RwSignal::new(false);
	let id = format!("contact-{}", spec.name);
	let value = move || model.with(|m| m.form.get(spec.name).to_string());
	let progress = move || model.with(|m| spec.progress(m.form.get(spec.name), &config));
	let sending = move || model.with(ContactModel::is_sending);
	let on_input = move |ev: ev::Event| model.update(|m| m.edit(spec.name, event_target_value(&ev)));

	let control = match spec.kind {
		FieldKind::Input(input_type) => view! {
			<input
				id=id.clone()
				name=spec.name.as_str()
				type=input_type.as_attr()
				placeholder=spec.placeholder
				required=spec.required
				disabled=sending
				prop:value=value
				on:input=on_input
				on:focus=move |_| focused.set(true)
				on:blur=move |_| focused.set(false)
			/>
		}
		.into_any(),
		FieldKind::TextArea { rows } => view! {
			<textarea
				id=id.clone()
				name=spec.name.as_str()
				rows=rows.to_string()
				placeholder=spec.placeholder
				required=spec.required
				disabled=sending
				prop:value=value
				on:input=on_input
				on:focus=move |_| focused.set(true)
				on:blur=move |_| focused.set(false)
			/>
		}
		.into_any(),
	};

	view! {
		<div class="field" class:focused=move || focused.get()>
			<label for=id>{spec.label}</label>
			<div class="field-control">
				{control}
				<div class="field-glow" />
				<div class="field-progress">
					<div
						class="field-progress-fill"
						style:transform=move || format!("scaleX({:.3})", progress())
					/>
				</div>
			</div>
		</div>
	}
}

/// Contact form bound to a [`ContactSubmitter`]; defaults to a simulated one.
#[component]
pub fn ContactFormCard(
	#[prop(optional)] submitter: Option<Rc<dyn ContactSubmitter>>,
	#[prop(optional)] config: Option<ContactConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let submitter = submitter
		.unwrap_or_else(|| Rc::new(SimulatedSubmitter::new(config.submit_delay_ms)));
	let model = RwSignal::new(ContactModel::default());

	let on_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		let form = match model.try_update(ContactModel::begin_submit) {
			Some(Ok(Some(form))) => form,
			Some(Ok(None)) => {
				debug!("submission already in flight");
				return;
			}
			Some(Err(e)) => {
				warn!("contact form not sent: {e}");
				return;
			}
			None => return,
		};
		submitter.submit(
			form,
			Box::new(move |result| {
				if let Err(ref e) = result {
					error!("contact submission failed: {e}");
				}
				model.try_update(|m| m.finish_submit(result));
			}),
		);
	};

	let sending = move || model.with(ContactModel::is_sending);
	let status = move || {
		model.with(|m| match &m.status {
			SubmitStatus::Success => Some(view! {
				<p class="form-status success">
					"Message sent successfully! I'll get back to you soon."
				</p>
			}
			.into_any()),
			SubmitStatus::Error(message) => Some(view! {
				<p class="form-status error">{message.clone()}</p>
			}
			.into_any()),
			SubmitStatus::Idle | SubmitStatus::Sending => None,
		})
	};

	view! {
		<form class="contact-form" class:sending=sending novalidate=true on:submit=on_submit>
			{FIELDS
				.into_iter()
				.map(|spec| view! { <AnimatedField spec=spec model=model config=config /> })
				.collect_view()}
			<button type="submit" class="submit-button" disabled=sending>
				{move || if sending() { "Sending..." } else { "Send Message" }}
			</button>
			{status}
		</form>
	}
}
