use super::types::{AboutCard, Category, ContactChannel, Owner, Project, Skill};

pub const OWNER: Owner = Owner {
	name: "Jordan Vale",
	handle: "jordan",
	title: "Full-Stack Developer",
	tagline: "Full-stack developer building modern web applications. Turning complex problems into clean digital products.",
	email: "hello@jordanvale.dev",
	github: "https://github.com/jordanvale",
	linkedin: "https://linkedin.com/in/jordanvale",
};

/// Anchors tracked by the floating section indicator, in page order.
pub const SECTIONS: &[&str] = &["about", "projects", "skills", "contact"];

pub const HERO_PHRASES: &[&str] = &[
	"Building digital experiences.",
	"Crafting elegant solutions.",
	"Bringing ideas to life.",
];

pub const ABOUT_CARDS: &[AboutCard] = &[
	AboutCard {
		icon: "⌨️",
		title: "Full-Stack Development",
		description: "Typed front ends and fast back ends, built with a focus on security, performance and usability.",
	},
	AboutCard {
		icon: "🖥️",
		title: "Backend Development",
		description: "Robust services and RESTful APIs that keep modern web applications responsive.",
	},
	AboutCard {
		icon: "🌍",
		title: "Multilingual Communication",
		description: "Comfortable working across international teams and time zones.",
	},
	AboutCard {
		icon: "📚",
		title: "Education",
		description: "Ongoing studies in business technology alongside professional work.",
	},
];

pub const PROJECTS: &[Project] = &[
	Project {
		title: "WhiskerCode",
		description: "An editor extension that explains unfamiliar code blocks, traces variables and drafts documentation.",
		long_description: "WhiskerCode analyses code structure, variable scope and execution flow to produce contextual explanations. It offers semantic analysis, natural-language summaries of functions, visual tracing of variable changes and generated documentation.",
		tags: &["JavaScript", "Editor Extension", "AST Parsing", "Static Analysis"],
		accent: "accent-amber",
		icon: "</>",
		github_url: Some("https://github.com/jordanvale/whiskercode"),
		live_url: None,
	},
	Project {
		title: "Jikanshin",
		description: "Real-time speech translation that shows subtitles as an overlay on the screen.",
		long_description: "Jikanshin captures microphone input, runs speech recognition, translates the transcript and renders the result as an unobtrusive subtitle overlay for meetings, videos and language practice.",
		tags: &["Python", "Speech Recognition", "Machine Translation", "Desktop App"],
		accent: "accent-cyan",
		icon: "≋",
		github_url: Some("https://github.com/jordanvale/jikanshin"),
		live_url: None,
	},
	Project {
		title: "SmartScribe",
		description: "Coming soon. Closed source.",
		long_description: "Coming soon. This closed source project is under active development.",
		tags: &["Coming Soon", "Closed Source"],
		accent: "accent-pink",
		icon: "✎",
		github_url: None,
		live_url: Some("https://jordanvale.dev/smartscribe"),
	},
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
	ContactChannel {
		label: "Email",
		value: "hello@jordanvale.dev",
		icon: "✉",
		href: Some("mailto:hello@jordanvale.dev"),
	},
	ContactChannel {
		label: "Phone",
		value: "+31 6 0000 0000",
		icon: "☎",
		href: Some("tel:+31600000000"),
	},
	ContactChannel {
		label: "Location",
		value: "Almere, Netherlands",
		icon: "⌖",
		href: None,
	},
];

/// Skill categories rendered by the constellation.
pub fn skill_categories() -> Vec<Category> {
	vec![
		Category::new("Languages", "👨‍💻", "Programming languages I work with regularly")
			.with_color("rgba(59, 130, 246, 0.7)")
			.with_skill("TypeScript", 95, "rgba(59, 130, 246, 0.8)")
			.with_skill("JavaScript", 95, "rgba(234, 179, 8, 0.8)")
			.with_skill("Python", 85, "rgba(34, 197, 94, 0.8)")
			.with_skill("HTML5/CSS3", 90, "rgba(249, 115, 22, 0.8)")
			.with_skill("SQL", 80, "rgba(168, 85, 247, 0.8)")
			.with_skill("Rust", 75, "rgba(239, 68, 68, 0.8)"),
		Category::new("Frameworks", "🛠️", "Libraries and frameworks I build with")
			.with_color("rgba(14, 165, 233, 0.7)")
			.with_skill("React.js", 90, "rgba(14, 165, 233, 0.8)")
			.with_skill("Next.js", 88, "rgba(31, 41, 55, 0.8)")
			.with_skill("Node.js", 92, "rgba(22, 163, 74, 0.8)")
			.with_skill("Express.js", 90, "rgba(100, 116, 139, 0.8)")
			.with_skill("NestJS", 85, "rgba(220, 38, 38, 0.8)")
			.with_skill("Tailwind CSS", 90, "rgba(6, 182, 212, 0.8)")
			.with_skill("Leptos", 70, "rgba(234, 88, 12, 0.8)"),
		Category::new("DevOps", "🔄", "Infrastructure and deployment technologies")
			.with_color("rgba(202, 138, 4, 0.7)")
			.with_skill("Linux", 85, "rgba(202, 138, 4, 0.8)")
			.with_skill("Docker", 75, "rgba(37, 99, 235, 0.8)")
			.with_skill("Git/GitHub", 90, "rgba(55, 65, 81, 0.8)")
			.with_skill("CI/CD", 75, "rgba(21, 128, 61, 0.8)")
			.with_skill("Kubernetes", 65, "rgba(59, 130, 246, 0.8)"),
		Category::new("Cloud & BaaS", "☁️", "Cloud platforms, backend-as-a-service and auth")
			.with_color("rgba(56, 189, 142, 0.7)")
			.with_skill("Supabase", 88, "rgba(56, 189, 142, 0.8)")
			.with_skill("AWS", 80, "rgba(255, 153, 0, 0.8)")
			.with_skill("Google Cloud", 75, "rgba(66, 133, 244, 0.8)")
			.with_skill("Azure", 70, "rgba(0, 120, 212, 0.8)"),
		Category::new("Databases", "💾", "Database systems and data storage technologies")
			.with_color("rgba(51, 103, 145, 0.7)")
			.with_skill("PostgreSQL", 85, "rgba(51, 103, 145, 0.8)")
			.with_skill("MongoDB", 80, "rgba(88, 150, 54, 0.8)")
			.with_skill("Redis", 75, "rgba(220, 50, 50, 0.8)")
			.with_skill("Prisma", 78, "rgba(45, 60, 75, 0.8)")
			.with_skill("GraphQL", 70, "rgba(229, 53, 171, 0.8)"),
		Category::new("API & Integration", "🔗", "API design, integration and related technologies")
			.with_color("rgba(220, 38, 38, 0.7)")
			.with_skill("RESTful Services", 90, "rgba(14, 165, 233, 0.8)")
			.with_skill("Microservices", 85, "rgba(22, 163, 74, 0.8)")
			.with_skill("OAuth 2.0", 88, "rgba(55, 65, 81, 0.8)")
			.with_skill("WebSockets", 75, "rgba(59, 130, 246, 0.8)")
			.with_skill("MQTT", 70, "rgba(100, 180, 100, 0.8)"),
		Category::new("AI & ML", "🤖", "Artificial intelligence and machine learning tools")
			.with_color("rgba(70, 100, 220, 0.7)")
			.with_skill("Gemini API", 85, "rgba(70, 100, 220, 0.8)")
			.with_skill("TensorFlow", 70, "rgba(255, 140, 0, 0.8)"),
	]
}

/// The `n` highest-rated skills across all categories, ties kept in input order.
pub fn top_skills(categories: &[Category], n: usize) -> Vec<Skill> {
	let mut skills: Vec<Skill> = categories
		.iter()
		.flat_map(|c| c.skills.iter().cloned())
		.collect();
	skills.sort_by(|a, b| b.level.cmp(&a.level));
	skills.truncate(n);
	skills
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn top_skills_orders_by_level_and_keeps_ties_stable() {
		let top = top_skills(&skill_categories(), 3);
		let names: Vec<_> = top.iter().map(|s| s.name.as_str()).collect();
		assert_eq!(names, ["TypeScript", "JavaScript", "Node.js"]);
	}

	#[test]
	fn category_ids_are_unique() {
		let categories = skill_categories();
		let mut ids: Vec<_> = categories.iter().map(Category::id).collect();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), categories.len());
	}
}
