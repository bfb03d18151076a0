use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::{
	Base, BaseType, Entity, Iri, Item, ItemCollection, NaturalLanguageValues,
	item::each_object,
	object::{Source, activity::Closed, actor::{Endpoints, PublicKey}},
};

use super::FieldSet;

/// Serializing counterpart of [`super::Reader`]: every empty value is omitted, except counters.
pub trait InsertValue {
	fn insert_id(&mut self, k: &str, v: &Option<Iri>);
	fn insert_iri(&mut self, k: &str, v: &Option<Iri>);
	fn insert_item(&mut self, k: &str, v: &Option<Item>);
	fn insert_items(&mut self, k: &str, v: &ItemCollection);
	fn insert_nlv(&mut self, k: &str, v: &NaturalLanguageValues);
	fn insert_str(&mut self, k: &str, v: &Option<String>);
	fn insert_strings(&mut self, k: &str, v: &[String]);
	fn insert_time(&mut self, k: &str, t: &Option<DateTime<Utc>>);
	fn insert_bool(&mut self, k: &str, v: &Option<bool>);
	fn insert_u64(&mut self, k: &str, v: &Option<u64>);
	fn insert_f64(&mut self, k: &str, f: &Option<f64>);
	fn insert_count(&mut self, k: &str, v: &u64);
	fn insert_pem(&mut self, k: &str, v: &str);
	fn insert_base_type(&mut self, k: &str, v: &Option<BaseType>);
	fn insert_closed(&mut self, k: &str, v: &Option<Closed>);
	fn insert_struct<T: FieldSet>(&mut self, k: &str, v: &Option<T>);

	fn insert_source(&mut self, k: &str, v: &Option<Source>) {
		self.insert_struct(k, v)
	}

	fn insert_endpoints(&mut self, k: &str, v: &Option<Endpoints>) {
		self.insert_struct(k, v)
	}

	fn insert_public_key(&mut self, k: &str, v: &Option<PublicKey>) {
		self.insert_struct(k, v)
	}
}

fn timestr(t: &DateTime<Utc>) -> String {
	t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl InsertValue for Map<String, Value> {
	fn insert_id(&mut self, k: &str, v: &Option<Iri>) {
		if let Some(v) = v {
			self.insert(k.to_string(), Value::String(v.to_string()));
		}
	}

	fn insert_iri(&mut self, k: &str, v: &Option<Iri>) {
		self.insert_id(k, v)
	}

	fn insert_item(&mut self, k: &str, v: &Option<Item>) {
		if let Some(v) = v {
			self.insert(k.to_string(), v.to_json());
		}
	}

	fn insert_items(&mut self, k: &str, v: &ItemCollection) {
		if !v.is_empty() {
			self.insert(
				k.to_string(),
				Value::Array(v.iter().map(Item::to_json).collect()),
			);
		}
	}

	fn insert_nlv(&mut self, k: &str, v: &NaturalLanguageValues) {
		if let Some(v) = v.to_json() {
			self.insert(k.to_string(), v);
		}
	}

	fn insert_str(&mut self, k: &str, v: &Option<String>) {
		if let Some(v) = v {
			self.insert(k.to_string(), Value::String(v.clone()));
		}
	}

	fn insert_strings(&mut self, k: &str, v: &[String]) {
		match v {
			[] => {},
			[x] => { self.insert(k.to_string(), Value::String(x.clone())); },
			_ => {
				self.insert(
					k.to_string(),
					Value::Array(v.iter().cloned().map(Value::String).collect()),
				);
			},
		}
	}

	fn insert_time(&mut self, k: &str, t: &Option<DateTime<Utc>>) {
		if let Some(t) = t {
			self.insert(k.to_string(), Value::String(timestr(t)));
		}
	}

	fn insert_bool(&mut self, k: &str, v: &Option<bool>) {
		if let Some(v) = v {
			self.insert(k.to_string(), Value::Bool(*v));
		}
	}

	fn insert_u64(&mut self, k: &str, v: &Option<u64>) {
		if let Some(v) = v {
			self.insert(k.to_string(), Value::from(*v));
		}
	}

	fn insert_f64(&mut self, k: &str, v: &Option<f64>) {
		if let Some(v) = v {
			if let Some(n) = serde_json::Number::from_f64(*v) {
				self.insert(k.to_string(), Value::Number(n));
			}
		}
	}

	fn insert_count(&mut self, k: &str, v: &u64) {
		self.insert(k.to_string(), Value::from(*v));
	}

	fn insert_pem(&mut self, k: &str, v: &str) {
		self.insert(k.to_string(), Value::String(v.to_string()));
	}

	fn insert_base_type(&mut self, k: &str, v: &Option<BaseType>) {
		if let Some(v) = v {
			self.insert(k.to_string(), Value::String(v.to_string()));
		}
	}

	fn insert_closed(&mut self, k: &str, v: &Option<Closed>) {
		match v {
			None => {},
			Some(Closed::At(t)) => { self.insert(k.to_string(), Value::String(timestr(t))); },
			Some(Closed::Flag(x)) => { self.insert(k.to_string(), Value::Bool(*x)); },
			Some(Closed::Item(x)) => { self.insert(k.to_string(), x.to_json()); },
		}
	}

	fn insert_struct<T: FieldSet>(&mut self, k: &str, v: &Option<T>) {
		if let Some(v) = v {
			let mut map = Map::new();
			v.write_fields(&mut map);
			self.insert(k.to_string(), Value::Object(map));
		}
	}
}

impl Entity {
	/// json object for this value, `type` included
	pub fn to_json(&self) -> Value {
		let mut map = Map::new();
		map.insert("type".to_string(), Value::String(self.base_type().to_string()));
		each_object!(self, x => x.write_fields(&mut map), l => l.write_fields(&mut map));
		Value::Object(map)
	}
}

impl Item {
	/// bare string for references, full object otherwise
	pub fn to_json(&self) -> Value {
		match self {
			Item::Reference(iri) => Value::String(iri.to_string()),
			Item::Value(x) => x.to_json(),
		}
	}
}
