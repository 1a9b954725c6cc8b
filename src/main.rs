#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::RecordKind;

#[derive(Parser)]
#[command(name = "staticjson", about = "Typed record to JSON tree conversion tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode the built-in sample records and decode them back.
	Demo,
	/// Decode a JSON file into a built-in record and print it re-encoded.
	Decode {
		path: PathBuf,
		#[arg(long, value_enum)]
		record: RecordKind,
		#[arg(long)]
		strict: bool,
		#[arg(long)]
		options: Option<PathBuf>,
		#[arg(long)]
		pretty: bool,
	},
	/// Print the registered fields of a built-in record.
	Schema {
		#[arg(long, value_enum)]
		record: RecordKind,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Demo => cmd::demo::run(),
		Commands::Decode {
			path,
			record,
			strict,
			options,
			pretty,
		} => cmd::decode::run(cmd::decode::Args {
			path,
			record,
			strict,
			options,
			pretty,
		}),
		Commands::Schema { record, json } => cmd::schema::run(record, json),
	}
}
