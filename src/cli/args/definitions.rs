use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ScreenArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `formsmith` binary.
#[derive(Parser, Debug)]
#[command(
	name = "formsmith",
	version,
	long_version = long_version(),
	about = "Compose templates from a catalog of sections in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FORMSMITH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long = "name",
		value_name = "NAME",
		help = "Pre-fill the template name (default: empty)"
	)]
	pub(crate) template_name: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Open the add dialog with this search query (default: closed)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "catalog-size",
		value_name = "NUM",
		help = "Number of sections in the generated catalog (default: 500)"
	)]
	pub(crate) catalog_size: Option<usize>,
	#[arg(
		long = "catalog-label",
		value_name = "TEXT",
		help = "Prefix for generated section names (default: Section)"
	)]
	pub(crate) catalog_label: Option<String>,
	#[arg(
		long = "people",
		value_name = "NUM",
		help = "Number of rows in the people table (default: 20)"
	)]
	pub(crate) people_rows: Option<usize>,
	#[arg(
		long,
		value_name = "SEED",
		help = "Seed for the generated people table (default: random)"
	)]
	pub(crate) seed: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 's',
		long = "screen",
		value_enum,
		help = "Choose the screen shown first (default: template)"
	)]
	pub(crate) start_screen: Option<ScreenArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'v',
		long,
		help = "Log debug events to the log file (default: disabled)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
