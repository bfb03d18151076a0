use std::io::Write;

use apvocab::{BaseType, Codec, Item};

use crate::{CliError, Config};

/// print item as json, honoring output settings
pub fn emit(config: &Config, item: &Item, context: bool, out: &mut impl Write) -> Result<(), CliError> {
	let mut json = item.to_json();
	if context || config.output.ld_context {
		use apvocab::LD;
		json = json.ld_context();
	}
	if config.output.pretty {
		serde_json::to_writer_pretty(&mut *out, &json)?;
	} else {
		serde_json::to_writer(&mut *out, &json)?;
	}
	writeln!(out)?;
	Ok(())
}

/// decode with configured options, optionally expecting given type when none is declared
pub fn parse(config: &Config, input: &[u8], expect: Option<&str>) -> Result<Item, CliError> {
	let registry = apvocab::Registry::global();
	let codec = Codec::with_options(registry, (&config.codec).into());
	match expect {
		None => Ok(codec.decode(input)?),
		Some(name) => {
			let fallback : BaseType = registry
				.lookup(name)
				.ok_or_else(|| CliError::UnknownType(name.to_string()))?;
			Ok(codec.decode_as(input, fallback)?)
		},
	}
}

pub fn decode(config: &Config, input: &[u8], expect: Option<&str>, context: bool, out: &mut impl Write) -> Result<(), CliError> {
	let item = parse(config, input, expect)?;
	tracing::debug!("decoded {}", apvocab::Base::base_type(&item));
	emit(config, &item, context, out)
}

#[cfg(test)]
mod test {
	use super::*;

	fn compact() -> Config {
		let mut config = Config::default();
		config.output.pretty = false;
		config
	}

	#[test]
	fn decode_normalizes_documents() {
		let mut out = Vec::new();
		let input = br#"{"type":"Note","id":"https://ex/1","name":["not","text"],"to":"https://ex/u/bob","bogus":1}"#;
		decode(&compact(), input, None, false, &mut out).unwrap();
		let printed : serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(printed, serde_json::json!({"type": "Note", "id": "https://ex/1", "to": ["https://ex/u/bob"]}));
	}

	#[test]
	fn decode_can_expect_a_type() {
		let mut out = Vec::new();
		decode(&compact(), br#"{"orderedItems":[]}"#, Some("OrderedCollection"), false, &mut out).unwrap();
		let printed : serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(printed["type"], "OrderedCollection");
		assert_eq!(printed["totalItems"], 0);

		let res = decode(&compact(), b"{}", Some("Banana"), false, &mut Vec::new());
		assert!(matches!(res, Err(CliError::UnknownType(_))));
	}

	#[test]
	fn context_is_added_on_request() {
		let mut out = Vec::new();
		decode(&compact(), br#"{"type":"Person","id":"https://ex/u/alice"}"#, None, true, &mut out).unwrap();
		let printed : serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert!(printed["@context"].is_array());
	}
}
