use indexmap::IndexMap;

/// language tag used for values that carry no language information
pub const NIL_LANG: &str = "-";

/// A natural language string, optionally expressed in many languages.
///
/// On the wire this is either a bare string (no language given) or a map of language tags to
/// strings. A single untagged value is stored under [`NIL_LANG`] and collapses back to a bare
/// string when encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaturalLanguageValues(IndexMap<String, String>);

impl NaturalLanguageValues {
	pub fn new() -> Self {
		Self::default()
	}

	/// untagged single value
	pub fn single(value: impl Into<String>) -> Self {
		let mut out = Self::default();
		out.append(NIL_LANG, value);
		out
	}

	/// insert or overwrite the value for given language tag
	pub fn append(&mut self, lang: impl Into<String>, value: impl Into<String>) {
		self.0.insert(lang.into(), value.into());
	}

	pub fn get(&self, lang: &str) -> Option<&str> {
		self.0.get(lang).map(|x| x.as_str())
	}

	/// the untagged value, or the first one stored if every value is tagged
	pub fn first(&self) -> Option<&str> {
		self.get(NIL_LANG)
			.or_else(|| self.0.values().next().map(|x| x.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// bare string, map of values, or nothing if empty
	pub fn to_json(&self) -> Option<serde_json::Value> {
		match self.0.len() {
			0 => None,
			1 if self.0.contains_key(NIL_LANG) =>
				self.get(NIL_LANG).map(|x| serde_json::Value::String(x.to_string())),
			_ => Some(serde_json::Value::Object(
				self.0
					.iter()
					.map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
					.collect()
			)),
		}
	}

	/// merge values found in given json: strings go under [`NIL_LANG`], maps are taken verbatim.
	/// non-string map values and any other json kind are ignored
	pub fn extend_from_json(&mut self, value: &serde_json::Value) {
		match value {
			serde_json::Value::String(x) => self.append(NIL_LANG, x.as_str()),
			serde_json::Value::Object(map) => {
				for (lang, v) in map {
					match v.as_str() {
						Some(v) => self.append(lang.as_str(), v),
						None => tracing::debug!("ignoring non-string value for language '{lang}'"),
					}
				}
			},
			serde_json::Value::Null => {},
			_ => tracing::debug!("ignoring natural language value which is neither string nor map"),
		}
	}

	pub fn from_json(value: &serde_json::Value) -> Self {
		let mut out = Self::default();
		out.extend_from_json(value);
		out
	}
}

impl From<&str> for NaturalLanguageValues {
	fn from(value: &str) -> Self {
		Self::single(value)
	}
}

impl From<String> for NaturalLanguageValues {
	fn from(value: String) -> Self {
		Self::single(value)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NaturalLanguageValues {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut out = Self::default();
		for (k, v) in iter {
			out.append(k, v);
		}
		out
	}
}

impl std::fmt::Display for NaturalLanguageValues {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.first().unwrap_or_default())
	}
}
