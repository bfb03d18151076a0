use std::path::PathBuf;
use clap::{Parser, Subcommand};

use apvocab_cli as cli;


#[derive(Parser)]
/// inspect and normalize activitypub documents
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	#[command(flatten)]
	Cli(cli::CliCommand),
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_writer(std::io::stderr)
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = cli::Config::load(args.config.as_ref());

	match args.command {
		Mode::Config => match toml::to_string_pretty(&config) {
			Ok(x) => println!("{x}"),
			Err(e) => {
				tracing::error!("failed serializing config: {e}");
				std::process::exit(1);
			},
		},

		Mode::Cli(command) => {
			if let Err(e) = cli::run(&config, command) {
				tracing::error!("{e}");
				std::process::exit(1);
			}
		},
	}
}
