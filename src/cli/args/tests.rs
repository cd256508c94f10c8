use clap::{CommandFactory, Parser};

use super::options::ScreenArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["formsmith"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.template_name.is_none());
	assert!(!parsed.print_config);
}

#[test]
fn parse_cli_reads_value_flags() {
	let parsed = CliArgs::try_parse_from([
		"formsmith",
		"-t",
		"Weekly report",
		"-q",
		"Sec",
		"--catalog-size",
		"12",
		"--people",
		"8",
		"--seed",
		"42",
		"-s",
		"people",
		"-o",
		"json",
	])
	.expect("parses");
	assert_eq!(parsed.template_name.as_deref(), Some("Weekly report"));
	assert_eq!(parsed.initial_query.as_deref(), Some("Sec"));
	assert_eq!(parsed.catalog_size, Some(12));
	assert_eq!(parsed.people_rows, Some(8));
	assert_eq!(parsed.seed, Some(42));
	assert_eq!(parsed.start_screen, Some(ScreenArg::People));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn unknown_screen_is_rejected() {
	assert!(CliArgs::try_parse_from(["formsmith", "--screen", "settings"]).is_err());
}
