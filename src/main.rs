mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use formsmith::{logging, ui::style};
use settings::ResolvedConfig;
use workflow::TemplateWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Err(err) = logging::initialize(cli.verbose) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_template(cli.output, resolved)
}

/// Execute the template workflow and print output in the chosen format.
fn run_template(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = TemplateWorkflow::from_config(settings);
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
