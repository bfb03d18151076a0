use std::io::Write;

use apvocab::{Category, Registry};

use crate::CliError;

/// list known type names, for one category or all of them
pub fn types(category: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
	let registry = Registry::global();
	let categories = match category {
		None => Category::all().to_vec(),
		Some(name) => vec![
			Category::try_from(name).map_err(|_| CliError::UnknownCategory(name.to_string()))?
		],
	};
	for category in categories {
		writeln!(out, "# {}", category.as_ref())?;
		for name in registry.names(category) {
			writeln!(out, "{name}")?;
		}
	}
	Ok(())
}
