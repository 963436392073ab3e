/// A named competency with a proficiency level.
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
	pub name: String,
	/// Proficiency in percent, 0..=100.
	pub level: u8,
	pub color: String,
}

impl Skill {
	pub fn new(name: &str, level: u8, color: &str) -> Self {
		Self {
			name: name.into(),
			level: level.min(100),
			color: color.into(),
		}
	}
}

/// Top-level skill grouping. Owns its skills.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
	pub name: String,
	pub icon: String,
	pub description: String,
	pub skills: Vec<Skill>,
	pub color: Option<String>,
}

impl Category {
	pub fn new(name: &str, icon: &str, description: &str) -> Self {
		Self {
			name: name.into(),
			icon: icon.into(),
			description: description.into(),
			skills: Vec::new(),
			color: None,
		}
	}

	pub fn with_color(mut self, color: &str) -> Self {
		self.color = Some(color.into());
		self
	}

	pub fn with_skill(mut self, name: &str, level: u8, color: &str) -> Self {
		self.skills.push(Skill::new(name, level, color));
		self
	}

	/// Node id derived from the name with whitespace and `&` stripped.
	pub fn id(&self) -> String {
		format!("cat-{}", slug(&self.name, &['&']))
	}
}

/// Strips whitespace and the given characters.
pub(crate) fn slug(name: &str, strip: &[char]) -> String {
	name.chars()
		.filter(|c| !c.is_whitespace() && !strip.contains(c))
		.collect()
}

/// A portfolio project shown in the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
	pub title: &'static str,
	pub description: &'static str,
	pub long_description: &'static str,
	pub tags: &'static [&'static str],
	/// CSS gradient class for the card background.
	pub accent: &'static str,
	pub icon: &'static str,
	pub github_url: Option<&'static str>,
	pub live_url: Option<&'static str>,
}

/// Card in the about section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboutCard {
	pub icon: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

/// One way of reaching the site owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactChannel {
	pub label: &'static str,
	pub value: &'static str,
	pub icon: &'static str,
	pub href: Option<&'static str>,
}

/// Identity shown in the navbar, footer and metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Owner {
	pub name: &'static str,
	/// Lowercase login shown in the terminal prompt.
	pub handle: &'static str,
	pub title: &'static str,
	pub tagline: &'static str,
	pub email: &'static str,
	pub github: &'static str,
	pub linkedin: &'static str,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn category_id_strips_spaces_and_ampersands() {
		let category = Category::new("Cloud & BaaS", "☁️", "");
		assert_eq!(category.id(), "cat-CloudBaaS");
	}

	#[test]
	fn skill_level_is_capped() {
		assert_eq!(Skill::new("Rust", 140, "#fff").level, 100);
	}
}
