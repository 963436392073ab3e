use leptos::prelude::*;

use crate::components::contact::ContactFormCard;
use crate::components::tilt::{MagneticButton, TiltCard};
use crate::content::{CONTACT_CHANNELS, OWNER};

#[component]
pub fn Contact() -> impl IntoView {
	let channels = CONTACT_CHANNELS
		.iter()
		.map(|channel| {
			let value = match channel.href {
				Some(href) => view! {
					<MagneticButton href=href icon=channel.icon class="channel-link">
						{channel.value}
					</MagneticButton>
				}
				.into_any(),
				None => view! {
					<span class="channel-text">
						<span class="magnetic-icon">{channel.icon}</span>
						{channel.value}
					</span>
				}
				.into_any(),
			};
			view! {
				<li class="channel">
					<span class="channel-label">{channel.label}</span>
					{value}
				</li>
			}
		})
		.collect_view();

	view! {
		<section id="contact" class="section contact">
			<h2 class="section-title">"Get In Touch"</h2>
			<div class="contact-grid">
				<TiltCard class="contact-info">
					<h3>"Contact Information"</h3>
					<p>"Feel free to reach out. I usually answer within a day."</p>
					<ul class="channels">{channels}</ul>
					<div class="social-links">
						<MagneticButton href=OWNER.github icon="⌥">"GitHub"</MagneticButton>
						<MagneticButton href=OWNER.linkedin icon="in">"LinkedIn"</MagneticButton>
					</div>
				</TiltCard>
				<ContactFormCard />
			</div>
		</section>
	}
}
