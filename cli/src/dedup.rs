use std::io::Write;

use apvocab::{Addressed, Dedup};

use crate::{CliError, Config};

pub fn dedup(config: &Config, input: &[u8], out: &mut impl Write) -> Result<(), CliError> {
	let mut item = crate::decode::parse(config, input, None)?;
	let before = item.get().map(Addressed::addressed).unwrap_or_default().len();
	item.dedup_recipients(&(&config.dedup).into());
	let after = item.get().map(Addressed::addressed).unwrap_or_default().len();
	tracing::info!("recipients: {before} -> {after}");
	crate::decode::emit(config, &item, false, out)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn dedup_prints_cleaned_activity() {
		let mut config = Config::default();
		config.output.pretty = false;
		let input = serde_json::json!({
			"type": "Create",
			"actor": "https://ex/u/alice",
			"object": "https://ex/n/1",
			"to": ["https://ex/u/alice", "https://ex/u/bob", "https://ex/n/1"],
			"cc": ["https://ex/u/bob", "https://ex/u/carl"]
		});
		let mut out = Vec::new();
		dedup(&config, input.to_string().as_bytes(), &mut out).unwrap();
		let printed : serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(printed["to"], serde_json::json!(["https://ex/u/bob"]));
		assert_eq!(printed["cc"], serde_json::json!(["https://ex/u/carl"]));
	}
}
