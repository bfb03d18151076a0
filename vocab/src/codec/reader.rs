use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
	BaseType, Iri, Item, ItemCollection, NaturalLanguageValues,
	object::{Source, activity::Closed, actor::{Endpoints, PublicKey}},
};

use super::{Codec, FieldSet};

/// Field lookups over one json object being decoded. Every lookup is lenient: anything
/// malformed reads as absent.
pub struct Reader<'a> {
	codec: &'a Codec<'a>,
	map: &'a Map<String, Value>,
	depth: usize,
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

impl<'a> Reader<'a> {
	pub(crate) fn new(codec: &'a Codec<'a>, map: &'a Map<String, Value>, depth: usize) -> Self {
		Reader { codec, map, depth }
	}

	fn nested(&self, map: &'a Map<String, Value>) -> Self {
		Reader { codec: self.codec, map, depth: self.depth }
	}

	/// raw value, with explicit nulls treated as missing
	pub fn get(&self, key: &str) -> Option<&'a Value> {
		match self.map.get(key) {
			None | Some(Value::Null) => None,
			Some(x) => Some(x),
		}
	}

	fn item_from(&self, key: &str, value: &Value) -> Option<Item> {
		match value {
			Value::String(_) | Value::Object(_) => self.codec.item(value, self.depth + 1),
			_ => {
				tracing::debug!("dropping {} in reference field '{key}'", json_kind(value));
				None
			},
		}
	}

	pub fn read_item(&self, key: &str) -> Option<Item> {
		match self.get(key)? {
			Value::Array(arr) => {
				let mut found = arr.iter().filter_map(|x| self.item_from(key, x));
				let first = found.next();
				if found.next().is_some() {
					tracing::debug!("field '{key}' holds many values, keeping only the first");
				}
				first
			},
			x => self.item_from(key, x),
		}
	}

	pub fn read_items(&self, key: &str) -> ItemCollection {
		match self.get(key) {
			None => ItemCollection::new(),
			Some(Value::Array(arr)) => arr
				.iter()
				.filter_map(|x| self.item_from(key, x))
				.collect(),
			Some(x) => self.item_from(key, x).into_iter().collect(),
		}
	}

	/// reads both `key` and its language map variant `keyMap`
	pub fn read_nlv(&self, key: &str) -> NaturalLanguageValues {
		let mut out = NaturalLanguageValues::new();
		if let Some(x) = self.get(key) {
			out.extend_from_json(x);
		}
		if let Some(x) = self.get(&format!("{key}Map")) {
			out.extend_from_json(x);
		}
		out
	}

	/// id-like value, taken as is
	pub fn read_id(&self, key: &str) -> Option<Iri> {
		match self.get(key)?.as_str()? {
			"" => None,
			x => Some(Iri::new(x)),
		}
	}

	/// reference which must be a valid iri
	pub fn read_iri(&self, key: &str) -> Option<Iri> {
		let raw = self.get(key)?.as_str()?;
		match self.codec.parse_iri(raw) {
			Ok(iri) => Some(iri),
			Err(e) => {
				tracing::debug!("dropping field '{key}': {e}");
				None
			},
		}
	}

	pub fn read_str(&self, key: &str) -> Option<String> {
		Some(self.get(key)?.as_str()?.to_string())
	}

	pub fn read_strings(&self, key: &str) -> Vec<String> {
		match self.get(key) {
			Some(Value::String(x)) => vec![x.clone()],
			Some(Value::Array(arr)) => arr
				.iter()
				.filter_map(|x| Some(x.as_str()?.to_string()))
				.collect(),
			_ => Vec::new(),
		}
	}

	pub fn read_time(&self, key: &str) -> Option<DateTime<Utc>> {
		let raw = self.get(key)?.as_str()?;
		match DateTime::parse_from_rfc3339(raw) {
			Ok(t) => Some(t.with_timezone(&Utc)),
			Err(e) => {
				tracing::debug!("invalid timestamp in '{key}' ({raw}): {e}");
				None
			},
		}
	}

	pub fn read_bool(&self, key: &str) -> Option<bool> {
		self.get(key)?.as_bool()
	}

	pub fn read_u64(&self, key: &str) -> Option<u64> {
		self.get(key)?.as_u64()
	}

	pub fn read_f64(&self, key: &str) -> Option<f64> {
		self.get(key)?.as_f64()
	}

	/// non-negative counter, zero when missing or invalid
	pub fn read_count(&self, key: &str) -> u64 {
		self.read_u64(key).unwrap_or(0)
	}

	pub fn read_pem(&self, key: &str) -> String {
		self.read_str(key).unwrap_or_default()
	}

	pub fn read_base_type(&self, key: &str) -> Option<BaseType> {
		self.codec.registry().lookup(self.get(key)?.as_str()?)
	}

	/// closing time, closed flag, or whatever object closed it
	pub fn read_closed(&self, key: &str) -> Option<Closed> {
		match self.get(key)? {
			Value::Bool(x) => Some(Closed::Flag(*x)),
			Value::String(x) => match DateTime::parse_from_rfc3339(x) {
				Ok(t) => Some(Closed::At(t.with_timezone(&Utc))),
				Err(_) => self.read_item(key).map(Closed::Item),
			},
			_ => self.read_item(key).map(Closed::Item),
		}
	}

	/// embedded json object without a vocabulary type of its own
	pub fn read_struct<T: FieldSet + Default>(&self, key: &str) -> Option<T> {
		let Some(map) = self.get(key)?.as_object() else {
			tracing::debug!("expected object in field '{key}'");
			return None;
		};
		let mut out = T::default();
		out.read_fields(&self.nested(map));
		Some(out)
	}

	pub fn read_source(&self, key: &str) -> Option<Source> {
		self.read_struct(key)
	}

	pub fn read_endpoints(&self, key: &str) -> Option<Endpoints> {
		self.read_struct(key)
	}

	pub fn read_public_key(&self, key: &str) -> Option<PublicKey> {
		self.read_struct(key)
	}
}
