mod config;
pub use config::*;

mod decode;
pub use decode::*;

mod dedup;
pub use dedup::*;

mod check;
pub use check::*;

mod types;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("failed decoding document: {0}")]
	Decode(#[from] apvocab::DecodeError),

	#[error("failed encoding document: {0}")]
	Encode(#[from] apvocab::EncodeError),

	#[error("unknown type '{0}'")]
	UnknownType(String),

	#[error("unknown category '{0}', expected one of object, link, activity, actor, collection")]
	UnknownCategory(String),

	#[error("document changes after a round trip, re-encoded as: {0}")]
	RoundTrip(String),
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// decode a document and print it back normalized
	Decode {
		/// file to read, - for stdin
		input: String,

		#[arg(long = "as")]
		/// type to assume when the document declares none
		expect: Option<String>,

		#[arg(long, default_value_t = false)]
		/// wrap output in a json-ld @context
		context: bool,
	},

	/// remove duplicate and excluded recipients from an activity
	Dedup {
		/// file to read, - for stdin
		input: String,
	},

	/// verify that a document survives decoding and encoding unchanged
	Check {
		/// file to read, - for stdin
		input: String,
	},

	/// list known vocabulary types
	Types {
		/// only list types of this category
		category: Option<String>,
	},
}

fn read_input(input: &str) -> Result<Vec<u8>, CliError> {
	if input == "-" {
		let mut buf = Vec::new();
		std::io::Read::read_to_end(&mut std::io::stdin(), &mut buf)?;
		Ok(buf)
	} else {
		Ok(std::fs::read(input)?)
	}
}

pub fn run(config: &Config, command: CliCommand) -> Result<(), CliError> {
	tracing::info!("running cli task: {command:?}");
	let mut out = std::io::stdout().lock();
	match command {
		CliCommand::Decode { input, expect, context } =>
			decode(config, &read_input(&input)?, expect.as_deref(), context, &mut out),
		CliCommand::Dedup { input } =>
			dedup(config, &read_input(&input)?, &mut out),
		CliCommand::Check { input } =>
			check(config, &read_input(&input)?),
		CliCommand::Types { category } =>
			types(category.as_deref(), &mut out),
	}
}
