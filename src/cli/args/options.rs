use clap::ValueEnum;
use formsmith::Screen;

/// Screens that can be opened first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScreenArg {
	Template,
	People,
}

impl ScreenArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		self.screen().as_str()
	}

	pub(crate) fn screen(self) -> Screen {
		match self {
			ScreenArg::Template => Screen::Template,
			ScreenArg::People => Screen::People,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
