use leptos::prelude::*;

use crate::components::constellation::SkillConstellation;
use crate::components::helix::DnaHelix;
use crate::content::{skill_categories, top_skills};

const HELIX_SKILLS: usize = 12;

#[component]
pub fn Skills() -> impl IntoView {
	let categories = skill_categories();
	let helix_skills = top_skills(&categories, HELIX_SKILLS);
	let categories = Signal::derive(move || categories.clone());
	let helix_skills = Signal::derive(move || helix_skills.clone());

	let legend = move || {
		categories.with(|cats| {
			cats.iter()
				.map(|c| {
					let swatch = c.color.clone().unwrap_or_default();
					view! {
						<li class="legend-item" title=c.description.clone()>
							<span class="legend-swatch" style:background=swatch />
							<span>{format!("{} {}", c.icon, c.name)}</span>
						</li>
					}
				})
				.collect_view()
		})
	};

	view! {
		<section id="skills" class="section skills">
			<h2 class="section-title">"Skills"</h2>
			<p class="section-lead">"Hover a category to see the skills orbiting it."</p>
			<SkillConstellation categories=categories />
			<ul class="constellation-legend">{legend}</ul>
			<h3 class="subsection-title">"Strongest skills"</h3>
			<p class="section-lead">"Drag to spin the helix, click a node for details."</p>
			<DnaHelix skills=helix_skills />
		</section>
	}
}
