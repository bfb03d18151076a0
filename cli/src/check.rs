use apvocab::Codec;

use crate::{CliError, Config};

/// decode, encode and decode again: both decoded values must match
pub fn check(config: &Config, input: &[u8]) -> Result<(), CliError> {
	let codec = Codec::with_options(apvocab::Registry::global(), (&config.codec).into());
	let first = codec.decode(input)?;
	let encoded = codec.encode(&first)?;
	let second = codec.decode(&encoded)?;
	if first != second {
		return Err(CliError::RoundTrip(String::from_utf8_lossy(&encoded).into_owned()));
	}
	let original : serde_json::Value = serde_json::from_slice(input)?;
	let dropped = match (original.as_object(), first.to_json().as_object()) {
		(Some(before), Some(after)) => before.keys().filter(|k| *k != "@context" && !after.contains_key(*k)).count(),
		_ => 0,
	};
	if dropped > 0 {
		tracing::warn!("round trip is stable, but {dropped} unknown or invalid top-level fields were dropped");
	} else {
		tracing::info!("round trip is stable");
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn valid_documents_pass() {
		let input = serde_json::json!({
			"@context": "https://www.w3.org/ns/activitystreams",
			"type": "Announce",
			"actor": {"type": "Service", "id": "https://ex/relay", "inbox": "https://ex/relay/inbox"},
			"object": {"type": "Note", "id": "https://ex/n/1", "contentMap": {"en": "hi", "it": "ciao"}},
			"published": "2024-06-04T17:09:20+00:00"
		});
		assert!(check(&Config::default(), input.to_string().as_bytes()).is_ok());
	}

	#[test]
	fn broken_documents_fail() {
		assert!(matches!(check(&Config::default(), b"{\"type\":"), Err(CliError::Decode(_))));
	}
}
