#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub codec: CodecConfig,

	#[serde(default)]
	pub dedup: DedupConfig,

	#[serde(default)]
	pub output: OutputConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct CodecConfig {
	#[serde_inline_default(true)]
	/// drop references which are not absolute iris
	pub validate_iris: bool,

	#[serde_inline_default(32)]
	/// how many embedded objects deep to decode before keeping just their ids
	pub max_depth: usize,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DedupConfig {
	#[serde_inline_default(true)]
	/// also clean up the audience list, after bcc
	pub include_audience: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// indent printed json
	pub pretty: bool,

	#[serde(default)]
	/// always wrap printed objects in a json-ld @context
	pub ld_context: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

impl From<&CodecConfig> for apvocab::CodecOptions {
	fn from(value: &CodecConfig) -> Self {
		apvocab::CodecOptions {
			validate_iris: value.validate_iris,
			max_depth: value.max_depth,
		}
	}
}

impl From<&DedupConfig> for apvocab::DedupOptions {
	fn from(value: &DedupConfig) -> Self {
		apvocab::DedupOptions {
			include_audience: value.include_audience,
		}
	}
}
