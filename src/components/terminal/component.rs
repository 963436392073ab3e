use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{KeyboardEvent, MouseEvent};

use super::interpreter::{Action, LineKind, Profile, Terminal};
use crate::components::layout::scroll_to_section;
use crate::components::tilt::{client_point, drive, element_bounds};
use crate::config::ParallaxConfig;
use crate::motion::parallax::TiltSpring;

const CURSOR_BLINK: Duration = Duration::from_millis(530);
const SCROLL_DELAY: Duration = Duration::from_millis(800);
const RAINBOW_DURATION: Duration = Duration::from_millis(5000);
const RAINBOW_CLASSES: [&str; 7] = [
	"rainbow-red",
	"rainbow-orange",
	"rainbow-yellow",
	"rainbow-green",
	"rainbow-blue",
	"rainbow-indigo",
	"rainbow-purple",
];

fn rainbow_text(text: &str) -> impl IntoView + use<> {
	text.chars()
		.enumerate()
		.map(|(i, c)| {
			let color = RAINBOW_CLASSES[i % RAINBOW_CLASSES.len()];
			view! { <span class=color>{c.to_string()}</span> }
		})
		.collect_view()
}

/// Interactive terminal card that tilts toward the pointer.
#[component]
pub fn TerminalCard(profile: Profile, #[prop(optional, into)] class: String) -> impl IntoView {
	let terminal = RwSignal::new(Terminal::new(profile));
	let tilt = RwSignal::new(TiltSpring::new(ParallaxConfig::with_max_tilt(10.0)));
	let tilt_running = StoredValue::new(false);
	let active = RwSignal::new(false);
	let cursor_visible = RwSignal::new(true);
	let pointer = RwSignal::new((0.0, 0.0));
	let card_ref = NodeRef::<leptos::html::Div>::new();
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let output_ref = NodeRef::<leptos::html::Div>::new();

	match set_interval_with_handle(move || cursor_visible.update(|v| *v = !*v), CURSOR_BLINK) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("terminal cursor blink unavailable: {e:?}"),
	}

	// Keep the newest line in view.
	Effect::new(move |_| {
		terminal.with(|t| t.lines.len());
		if let Some(out) = output_ref.get() {
			out.set_scroll_top(out.scroll_height());
		}
	});

	let run_action = move |action: Action| match action {
		Action::None => {}
		Action::ScrollTo(id) => set_timeout(move || scroll_to_section(id), SCROLL_DELAY),
		Action::Rainbow => {
			debug!("terminal rainbow mode on");
			set_timeout(
				move || {
					terminal.try_update(Terminal::end_rainbow);
				},
				RAINBOW_DURATION,
			);
		}
	};

	let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" => {
			if let Some(action) = terminal.try_update(Terminal::submit) {
				run_action(action);
			}
		}
		"ArrowUp" => {
			ev.prevent_default();
			terminal.update(Terminal::history_prev);
		}
		"ArrowDown" => {
			ev.prevent_default();
			terminal.update(Terminal::history_next);
		}
		_ => {}
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some(el) = card_ref.get_untracked() else {
			return;
		};
		let bounds = element_bounds(&el);
		let client = client_point(&ev);
		let (fx, fy) = bounds.relative(client);
		pointer.set((fx * 100.0, fy * 100.0));
		tilt.update(|t| t.pointer_move(client, &bounds));
		drive(tilt, tilt_running);
	};
	let on_mouseleave = move |_: MouseEvent| {
		active.set(false);
		tilt.update(TiltSpring::pointer_leave);
		drive(tilt, tilt_running);
	};
	let focus_input = move |_: MouseEvent| {
		if let Some(input) = input_ref.get_untracked() {
			let _ = input.focus();
		}
	};

	let rainbow = move || terminal.with(|t| t.rainbow);
	let playful = move || terminal.with(|t| t.rainbow || t.kawaii);
	let lines = move || {
		terminal.with(|t| {
			t.lines
				.iter()
				.map(|line| match line.kind {
					LineKind::Rainbow => {
						view! { <div class="line line-rainbow">{rainbow_text(&line.text)}</div> }.into_any()
					}
					kind => view! { <div class=format!("line {}", kind.class())>{line.text.clone()}</div> }
						.into_any(),
				})
				.collect_view()
		})
	};
	let caret_offset = move || terminal.with(|t| format!("{}ch", t.input.chars().count()));

	view! {
		<div
			node_ref=card_ref
			class=format!("terminal-card {class}")
			class:active=move || active.get()
			style:transform=move || tilt.with(|t| t.current().css(1000.0))
			on:mouseenter=move |_| active.set(true)
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<Show when=move || active.get()>
				<div class="terminal-glow" />
			</Show>
			<div class="terminal-window" class:rainbow=rainbow on:click=focus_input>
				<div class="terminal-header">
					<div class="window-buttons">
						<span class="window-button close" />
						<span class="window-button minimize" />
						<span class="window-button maximize" />
					</div>
					<div class="terminal-title" class:playful=playful>
						{move || terminal.with(Terminal::title)}
					</div>
				</div>
				<div node_ref=output_ref class="terminal-output">
					{lines}
					<div class="terminal-input-row">
						<span class="terminal-prompt">{move || terminal.with(Terminal::prompt)}</span>
						<div class="terminal-input-wrap">
							<input
								node_ref=input_ref
								type="text"
								class="terminal-input"
								class:playful=playful
								autocomplete="off"
								spellcheck="false"
								prop:value=move || terminal.with(|t| t.input.clone())
								on:input=move |ev: ev::Event| {
									terminal.update(|t| t.set_input(event_target_value(&ev)));
								}
								on:keydown=on_keydown
							/>
							<span
								class="terminal-caret"
								class:hidden=move || !cursor_visible.get()
								style:left=caret_offset
							/>
						</div>
					</div>
				</div>
				<Show when=move || active.get()>
					<div
						class="terminal-cursor"
						style:left=move || format!("calc({:.1}% - 12px)", pointer.get().0)
						style:top=move || format!("calc({:.1}% - 12px)", pointer.get().1)
					>
						{move || if rainbow() { "🌈" } else { "✨" }}
					</div>
				</Show>
			</div>
		</div>
	}
}
