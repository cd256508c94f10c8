use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Catalog size: {}", config.catalog_size);
	let _ = writeln!(out, "  Catalog label: {}", config.catalog_label);
	let _ = writeln!(out, "  People rows: {}", config.people_rows);
	match config.people_seed {
		Some(seed) => {
			let _ = writeln!(out, "  People seed: {seed}");
		}
		None => {
			let _ = writeln!(out, "  People seed: (random)");
		}
	}
	if !config.template_name.is_empty() {
		let _ = writeln!(out, "  Template name: {}", config.template_name);
	}
	if let Some(query) = &config.initial_query {
		let _ = writeln!(out, "  Initial query: {query}");
	}
	let _ = writeln!(out, "  UI theme: {}", config.theme);
	let _ = writeln!(out, "  Start screen: {}", config.start_screen);
	out
}

#[cfg(test)]
mod tests {
	use formsmith::Screen;
	use insta::assert_snapshot;

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			catalog_size: 120,
			catalog_label: "Chapter".into(),
			people_rows: 20,
			people_seed: None,
			template_name: "Handbook".into(),
			initial_query: Some("intro".into()),
			theme: "light".into(),
			start_screen: Screen::People,
		};

		assert_snapshot!(format_summary(&config), @r"
		Effective configuration:
		  Catalog size: 120
		  Catalog label: Chapter
		  People rows: 20
		  People seed: (random)
		  Template name: Handbook
		  Initial query: intro
		  UI theme: light
		  Start screen: people
		");
	}
}
