use leptos::prelude::*;

use crate::components::tilt::TiltCard;
use crate::content::{ABOUT_CARDS, OWNER};

#[component]
pub fn About() -> impl IntoView {
	let cards = ABOUT_CARDS
		.iter()
		.map(|card| {
			view! {
				<TiltCard class="about-card">
					<div class="about-icon">{card.icon}</div>
					<h3>{card.title}</h3>
					<p>{card.description}</p>
				</TiltCard>
			}
		})
		.collect_view();

	view! {
		<section id="about" class="section about">
			<h2 class="section-title">"About Me"</h2>
			<p class="section-lead">
				{format!("{} is a {}. ", OWNER.name, OWNER.title.to_lowercase())}
				{OWNER.tagline}
			</p>
			<div class="about-grid">{cards}</div>
		</section>
	}
}
