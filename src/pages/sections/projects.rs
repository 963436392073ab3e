use leptos::prelude::*;

use crate::components::tilt::{MagneticButton, TiltCard};
use crate::content::{PROJECTS, Project};

/// Index reached by stepping `step` slots from `index`, wrapping at both ends.
pub fn navigate(index: usize, step: isize, len: usize) -> usize {
	if len == 0 {
		return 0;
	}
	(index as isize + step).rem_euclid(len as isize) as usize
}

/// Carousel position plus the card whose long description is open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Carousel {
	pub active: usize,
	pub expanded: Option<usize>,
}

impl Carousel {
	pub fn step(&mut self, step: isize, len: usize) {
		self.expanded = None;
		self.active = navigate(self.active, step, len);
	}

	pub fn toggle_details(&mut self) {
		self.expanded = match self.expanded {
			Some(i) if i == self.active => None,
			_ => Some(self.active),
		};
	}

	pub fn is_expanded(&self) -> bool {
		self.expanded == Some(self.active)
	}
}

fn project_links(project: &Project) -> impl IntoView + use<> {
	let github = project.github_url.map(|href| {
		view! { <MagneticButton href=href icon="⌥" class="project-link">"Source"</MagneticButton> }
	});
	let live = project.live_url.map(|href| {
		view! { <MagneticButton href=href icon="↗" class="project-link">"Live"</MagneticButton> }
	});
	view! { <div class="project-links">{github}{live}</div> }
}

#[component]
pub fn Projects() -> impl IntoView {
	let carousel = RwSignal::new(Carousel::default());
	let len = PROJECTS.len();
	let project = move || PROJECTS.get(carousel.with(|c| c.active)).copied();

	let card = move || {
		project().map(|p| {
			let tags = p
				.tags
				.iter()
				.map(|&tag| view! { <span class="tag">{tag}</span> })
				.collect_view();
			let expanded = carousel.with(Carousel::is_expanded);
			view! {
				<TiltCard max_tilt=6.0 class="project-card">
					<div class=format!("project-banner {}", p.accent)>
						<span class="project-icon">{p.icon}</span>
					</div>
					<div class="project-body">
						<div class="project-header">
							<h3>{p.title}</h3>
							<div class="carousel-controls">
								<button
									class="icon-button"
									aria-label="Previous project"
									on:click=move |_| carousel.update(|c| c.step(-1, len))
								>
									"‹"
								</button>
								<button
									class="icon-button"
									aria-label="Next project"
									on:click=move |_| carousel.update(|c| c.step(1, len))
								>
									"›"
								</button>
							</div>
						</div>
						<p class="project-description">
							{if expanded { p.long_description } else { p.description }}
						</p>
						<button
							class="read-more"
							on:click=move |_| carousel.update(Carousel::toggle_details)
						>
							{if expanded { "Show less" } else { "Read more" }}
						</button>
						<div class="project-tags">{tags}</div>
						{project_links(&p)}
					</div>
				</TiltCard>
			}
		})
	};

	let dots = (0..len)
		.map(|i| {
			view! {
				<button
					class="carousel-dot"
					class:active=move || carousel.with(|c| c.active == i)
					aria-label=format!("Project {}", i + 1)
					on:click=move |_| {
						carousel.update(|c| {
							let step = i as isize - c.active as isize;
							c.step(step, len);
						})
					}
				/>
			}
		})
		.collect_view();

	view! {
		<section id="projects" class="section projects">
			<h2 class="section-title">"Projects"</h2>
			<div class="carousel">{card}</div>
			<div class="carousel-dots">{dots}</div>
		</section>
	}
}
