//! Command interpreter behind the hero terminal.

use log::debug;

use crate::content::Owner;
use crate::motion::noise::rand_simple;

pub const KAWAII_FACES: &[&str] = &[
	"(づ｡◕‿‿◕｡)づ",
	"(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧",
	"(◕‿◕✿)",
	"(。･ω･｡)",
	"ʕ•ᴥ•ʔ",
	"(◠‿◠)",
	"(✿◠‿◠)",
	"(ﾉ´ヮ`)ﾉ*: ･ﾟ",
	"ヽ(・∀・)ﾉ",
	"(´｡• ᵕ •｡`)",
	"(≧◡≦)",
	"(◕‿◕)",
];

const CAT: &str = r#"
  /\_/\
 ( o.o )
  > ^ <
"#;

const BUNNY: &str = r#"
   /\ /\
  ( . . )
  c(")(")
"#;

const BEAR: &str = r#"
  ʕ •ᴥ• ʔ
   /    \
  |      |
   \____/
"#;

const DOG: &str = r#"
   / \__
  (    @\___
  /         O
 /   (_____/
/_____/   U
"#;

const HEART: &str = r#"
   .:::.   .:::.
  :::::::.:::::::
  :::::::::::::::
  ':::::::::::::'
    ':::::::::'
      '::::'
        ''
"#;

const BASE_HELP: &[&str] = &[
	"  help     - Show this help message",
	"  clear    - Clear the terminal",
	"  skills   - List my technical skills",
	"  about    - About me",
	"  contact  - How to reach me",
	"  projects - View my projects",
];

const KAWAII_HELP: &[&str] = &[
	"  kawaii   - Show a cute face",
	"  cat      - Show a cat ASCII art",
	"  bunny    - Show a bunny ASCII art",
	"  bear     - Show a bear ASCII art",
	"  dog      - Show a dog ASCII art",
	"  heart    - Show a heart ASCII art",
	"  rainbow  - Do something colorful",
	"  meow     - Make a cat sound",
	"  colors   - Show pretty colors",
	"  serious  - Return to professional mode",
];

fn face_at(n: usize) -> &'static str {
	let index = (rand_simple(n) * KAWAII_FACES.len() as f64) as usize;
	KAWAII_FACES[index.min(KAWAII_FACES.len() - 1)]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
	System,
	Command,
	Output,
	Error,
	Kawaii,
	Ascii,
	Rainbow,
}

impl LineKind {
	pub fn class(self) -> &'static str {
		match self {
			LineKind::System => "line-system",
			LineKind::Command => "line-command",
			LineKind::Output => "line-output",
			LineKind::Error => "line-error",
			LineKind::Kawaii => "line-kawaii",
			LineKind::Ascii => "line-ascii",
			LineKind::Rainbow => "line-rainbow",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
	pub kind: LineKind,
	pub text: String,
}

impl Line {
	fn new(kind: LineKind, text: impl Into<String>) -> Self {
		Self {
			kind,
			text: text.into(),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Art {
	Cat,
	Bunny,
	Bear,
	Dog,
	Heart,
}

impl Art {
	pub fn text(self) -> &'static str {
		match self {
			Art::Cat => CAT,
			Art::Bunny => BUNNY,
			Art::Bear => BEAR,
			Art::Dog => DOG,
			Art::Heart => HEART,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
	Help,
	Clear,
	Skills,
	About,
	Contact,
	Projects,
	OpenProjects,
	Kawaii,
	Serious,
	Art(Art),
	Rainbow,
	Meow,
	Colors,
	Unknown(String),
}

impl Command {
	/// Parses normalized input. The playful commands only exist in kawaii mode.
	pub fn parse(input: &str, kawaii: bool) -> Self {
		let playful = |cmd: Command| {
			if kawaii {
				cmd
			} else {
				Command::Unknown(input.to_string())
			}
		};
		match input {
			"help" => Command::Help,
			"clear" => Command::Clear,
			"skills" => Command::Skills,
			"about" => Command::About,
			"contact" => Command::Contact,
			"projects" => Command::Projects,
			"open projects" => Command::OpenProjects,
			"kawaii" => Command::Kawaii,
			"serious" => Command::Serious,
			"cat" => playful(Command::Art(Art::Cat)),
			"bunny" => playful(Command::Art(Art::Bunny)),
			"bear" => playful(Command::Art(Art::Bear)),
			"dog" => playful(Command::Art(Art::Dog)),
			"heart" => playful(Command::Art(Art::Heart)),
			"rainbow" => playful(Command::Rainbow),
			"meow" => playful(Command::Meow),
			"colors" => playful(Command::Colors),
			other => Command::Unknown(other.to_string()),
		}
	}
}

/// Side effect the view performs after a command ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	None,
	/// Scroll to the element with this id after a short pause.
	ScrollTo(&'static str),
	/// Start the temporary rainbow theme.
	Rainbow,
}

/// Who the terminal talks about.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
	pub handle: String,
	pub name: String,
	pub about: String,
	pub email: String,
	pub github: String,
	pub skills: Vec<String>,
}

impl Profile {
	pub fn new(owner: &Owner, skills: Vec<String>) -> Self {
		Self {
			handle: owner.handle.to_string(),
			name: owner.name.to_string(),
			about: owner.tagline.to_string(),
			email: owner.email.to_string(),
			github: owner.github.to_string(),
			skills,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Terminal {
	pub lines: Vec<Line>,
	pub input: String,
	pub kawaii: bool,
	pub rainbow: bool,
	history: Vec<String>,
	/// Position while browsing history, `0` being the most recent entry.
	history_index: Option<usize>,
	faces_shown: usize,
	profile: Profile,
}

impl Terminal {
	pub fn new(profile: Profile) -> Self {
		let lines = vec![
			Line::new(LineKind::System, format!("{}'s Portfolio Terminal v1.0.0", profile.name)),
			Line::new(LineKind::System, "Type \"help\" for available commands."),
		];
		Self {
			lines,
			input: String::new(),
			kawaii: false,
			rainbow: false,
			history: Vec::new(),
			history_index: None,
			faces_shown: 0,
			profile,
		}
	}

	pub fn history(&self) -> &[String] {
		&self.history
	}

	pub fn prompt(&self) -> &'static str {
		if self.kawaii || self.rainbow { "(^・ω・^)$" } else { "$" }
	}

	pub fn title(&self) -> String {
		if self.kawaii {
			format!("{} kawaii@portfolio ~ /terminal", face_at(self.faces_shown))
		} else if self.rainbow {
			"kawaii@portfolio ~ /terminal".to_string()
		} else {
			format!("{}@portfolio ~ /terminal", self.profile.handle)
		}
	}

	/// Next face of a fixed pseudo-random sequence.
	pub fn next_face(&mut self) -> &'static str {
		let face = face_at(self.faces_shown);
		self.faces_shown += 1;
		face
	}

	pub fn set_input(&mut self, input: String) {
		self.input = input;
	}

	pub fn end_rainbow(&mut self) {
		self.rainbow = false;
	}

	/// Runs the current input and clears it.
	pub fn submit(&mut self) -> Action {
		let input = std::mem::take(&mut self.input);
		self.execute(&input)
	}

	pub fn execute(&mut self, raw: &str) -> Action {
		let input = raw.trim().to_lowercase();
		if input.is_empty() {
			self.push(LineKind::Command, "$");
			return Action::None;
		}
		if self.history.last() != Some(&input) {
			self.history.push(input.clone());
		}
		self.history_index = None;

		let command = Command::parse(&input, self.kawaii);
		debug!("terminal command {command:?}");
		if command != Command::Clear {
			self.push(LineKind::Command, format!("$ {input}"));
		}
		self.run(command)
	}

	fn run(&mut self, command: Command) -> Action {
		match command {
			Command::Help => {
				self.heading("Here are my commands:", "Available commands:");
				self.output(BASE_HELP);
				if self.kawaii {
					self.push(LineKind::Kawaii, "✨ Kawaii commands! ✨");
					self.output(KAWAII_HELP);
				} else {
					self.push(LineKind::Output, "  kawaii   - Enable kawaii mode 🙂");
				}
			}
			Command::Clear => {
				self.lines = vec![Line::new(LineKind::System, "Terminal cleared")];
				if self.kawaii {
					self.cute("All clean now!");
				}
			}
			Command::Skills => {
				self.heading("Here are my skills!", "Technical Skills:");
				if self.kawaii {
					self.push(LineKind::Output, "Technical Skills:");
				}
				let skills: Vec<String> = self.profile.skills.iter().map(|s| format!("  • {s}")).collect();
				self.lines.extend(skills.into_iter().map(|s| Line::new(LineKind::Output, s)));
			}
			Command::About => {
				self.heading("Nice to meet you!", "About Me:");
				self.push(LineKind::Output, self.profile.about.clone());
			}
			Command::Contact => {
				self.heading("Let's get in touch!", "Contact Information:");
				self.push(LineKind::Output, format!("Email: {}", self.profile.email));
				self.push(LineKind::Output, format!("GitHub: {}", self.profile.github));
			}
			Command::Projects => {
				self.heading("Check out my work!", "Projects:");
				self.output(&[
					"Navigate to the Projects section to see my work.",
					"Or run \"open projects\" to go there directly.",
				]);
			}
			Command::OpenProjects => {
				if self.kawaii {
					self.cute("Taking you there now!");
				}
				self.push(LineKind::System, "Navigating to Projects section...");
				return Action::ScrollTo("projects");
			}
			Command::Kawaii => {
				self.kawaii = true;
				self.cute("Kawaii mode activated!");
				self.push(LineKind::Kawaii, "Type \"help\" to see all the kawaii commands!");
			}
			Command::Serious => {
				self.kawaii = false;
				self.rainbow = false;
				self.push(LineKind::System, "Returning to professional mode.");
			}
			Command::Art(art) => {
				self.push(LineKind::Ascii, art.text());
				self.cute("How cute!");
			}
			Command::Rainbow => {
				self.rainbow = true;
				self.push(LineKind::Kawaii, "🌈 RAINBOW MODE ACTIVATED! 🌈");
				return Action::Rainbow;
			}
			Command::Meow => {
				self.push(LineKind::Kawaii, "🐱 Meow! Meow! Purrrrrr~");
				self.push(LineKind::Ascii, CAT);
			}
			Command::Colors => self.push(LineKind::Rainbow, "🌈 Pretty colors! 🌈"),
			Command::Unknown(input) => {
				self.push(
					LineKind::Error,
					format!("Command not found: {input}. Type \"help\" for available commands."),
				);
				if self.kawaii {
					self.cute("Oopsie!");
				}
			}
		}
		Action::None
	}

	/// Steps back through history. Stops at the oldest entry.
	pub fn history_prev(&mut self) {
		if self.history.is_empty() {
			return;
		}
		let index = match self.history_index {
			None => 0,
			Some(i) => (i + 1).min(self.history.len() - 1),
		};
		self.show_history(index);
	}

	/// Steps forward; past the newest entry the input is cleared.
	pub fn history_next(&mut self) {
		match self.history_index {
			Some(0) => {
				self.history_index = None;
				self.input.clear();
			}
			Some(i) => self.show_history(i - 1),
			None => {}
		}
	}

	fn show_history(&mut self, index: usize) {
		self.history_index = Some(index);
		self.input = self.history[self.history.len() - 1 - index].clone();
	}

	fn push(&mut self, kind: LineKind, text: impl Into<String>) {
		self.lines.push(Line::new(kind, text));
	}

	fn output(&mut self, lines: &[&str]) {
		self.lines.extend(lines.iter().map(|l| Line::new(LineKind::Output, *l)));
	}

	fn cute(&mut self, text: &str) {
		let face = self.next_face();
		self.push(LineKind::Kawaii, format!("{face} {text}"));
	}

	fn heading(&mut self, kawaii: &str, plain: &str) {
		if self.kawaii {
			self.cute(kawaii);
		} else {
			self.push(LineKind::System, plain);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::OWNER;

	fn terminal() -> Terminal {
		Terminal::new(Profile::new(&OWNER, vec!["Rust".into(), "TypeScript".into()]))
	}

	fn texts(t: &Terminal) -> Vec<&str> {
		t.lines.iter().map(|l| l.text.as_str()).collect()
	}

	#[test]
	fn starts_with_a_greeting() {
		let t = terminal();
		assert_eq!(
			texts(&t),
			[
				"Jordan Vale's Portfolio Terminal v1.0.0",
				"Type \"help\" for available commands."
			]
		);
	}

	#[test]
	fn commands_are_trimmed_and_case_insensitive() {
		let mut t = terminal();
		t.execute("  SKILLS ");
		let texts = texts(&t);
		assert!(texts.contains(&"$ skills"));
		assert!(texts.contains(&"  • Rust"));
		assert_eq!(t.history(), ["skills"]);
	}

	#[test]
	fn empty_input_echoes_a_prompt_without_history() {
		let mut t = terminal();
		t.execute("   ");
		assert_eq!(t.lines.last().map(|l| l.text.as_str()), Some("$"));
		assert!(t.history().is_empty());
	}

	#[test]
	fn unknown_command_reports_an_error() {
		let mut t = terminal();
		t.execute("sudo");
		let last = t.lines.last().unwrap();
		assert_eq!(last.kind, LineKind::Error);
		assert!(last.text.starts_with("Command not found: sudo."));
	}

	#[test]
	fn playful_commands_need_kawaii_mode() {
		let mut t = terminal();
		t.execute("cat");
		assert_eq!(t.lines.last().unwrap().kind, LineKind::Error);

		t.execute("kawaii");
		assert!(t.kawaii);
		t.execute("cat");
		let n = t.lines.len();
		assert_eq!(t.lines[n - 2].kind, LineKind::Ascii);
		assert!(t.lines[n - 1].text.ends_with("How cute!"));

		t.execute("serious");
		assert!(!t.kawaii);
		assert_eq!(Command::parse("meow", false), Command::Unknown("meow".into()));
	}

	#[test]
	fn clear_leaves_only_a_notice() {
		let mut t = terminal();
		t.execute("help");
		t.execute("clear");
		assert_eq!(texts(&t), ["Terminal cleared"]);
	}

	#[test]
	fn open_projects_requests_a_scroll() {
		let mut t = terminal();
		assert_eq!(t.execute("open projects"), Action::ScrollTo("projects"));
		t.execute("kawaii");
		assert_eq!(t.execute("rainbow"), Action::Rainbow);
		assert!(t.rainbow);
		assert_eq!(t.prompt(), "(^・ω・^)$");
		t.end_rainbow();
		assert!(!t.rainbow);
	}

	#[test]
	fn history_skips_consecutive_duplicates_and_navigates() {
		let mut t = terminal();
		for cmd in ["help", "help", "about", "skills"] {
			t.set_input(cmd.into());
			t.submit();
		}
		assert_eq!(t.history(), ["help", "about", "skills"]);
		assert!(t.input.is_empty());

		t.history_prev();
		assert_eq!(t.input, "skills");
		t.history_prev();
		t.history_prev();
		assert_eq!(t.input, "help");
		t.history_prev();
		assert_eq!(t.input, "help");

		t.history_next();
		assert_eq!(t.input, "about");
		t.history_next();
		t.history_next();
		assert_eq!(t.input, "");
		t.history_next();
		assert_eq!(t.input, "");
	}

	#[test]
	fn kawaii_faces_are_deterministic() {
		let mut a = terminal();
		let mut b = terminal();
		let faces_a: Vec<_> = (0..20).map(|_| a.next_face()).collect();
		let faces_b: Vec<_> = (0..20).map(|_| b.next_face()).collect();
		assert_eq!(faces_a, faces_b);
		assert!(faces_a.iter().all(|f| KAWAII_FACES.contains(f)));
	}

	#[test]
	fn title_follows_mode() {
		let mut t = terminal();
		assert_eq!(t.title(), "jordan@portfolio ~ /terminal");
		t.rainbow = true;
		assert_eq!(t.title(), "kawaii@portfolio ~ /terminal");
		t.rainbow = false;
		t.execute("kawaii");
		assert!(t.title().ends_with("kawaii@portfolio ~ /terminal"));
	}
}
