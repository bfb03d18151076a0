#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IriError {
	#[error("empty iri")]
	Empty,

	#[error("iri has no scheme: '{0}'")]
	MissingScheme(String),

	#[error("invalid scheme in iri '{0}'")]
	InvalidScheme(String),

	#[error("iri contains whitespace or control characters: '{0}'")]
	InvalidCharacter(String),
}

/// Opaque reference to a resource. Never dereferenced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Iri(String);

impl Iri {
	/// wraps a string without validating it, for ids and values built by hand
	pub fn new(value: impl Into<String>) -> Self {
		Iri(value.into())
	}

	/// accepts only absolute iris: `scheme ":" rest`, scheme being a letter followed by
	/// letters, digits, '+', '-' or '.'
	pub fn parse(value: &str) -> Result<Self, IriError> {
		if value.is_empty() {
			return Err(IriError::Empty);
		}
		if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
			return Err(IriError::InvalidCharacter(value.to_string()));
		}
		let Some((scheme, rest)) = value.split_once(':') else {
			return Err(IriError::MissingScheme(value.to_string()));
		};
		let mut chars = scheme.chars();
		let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
			&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
		if !valid_scheme || rest.is_empty() {
			return Err(IriError::InvalidScheme(value.to_string()));
		}
		Ok(Iri(value.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}

	/// scheme + authority, e.g. `https://example.net`
	pub fn origin(&self) -> Option<&str> {
		let (_, rest) = self.0.split_once("://")?;
		let host_len = rest.find('/').unwrap_or(rest.len());
		let scheme_len = self.0.len() - rest.len();
		Some(&self.0[..scheme_len + host_len])
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Iri {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Iri {
	fn from(value: &str) -> Self {
		Iri::new(value)
	}
}

impl From<String> for Iri {
	fn from(value: String) -> Self {
		Iri(value)
	}
}

impl PartialEq<str> for Iri {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Iri {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}
