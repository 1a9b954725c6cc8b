use std::path::{Path, PathBuf};

use staticjson::archive::{LoadOptions, LoadReport, Record, from_text_opts, to_text, to_text_pretty};
use staticjson::samples::{Animal, Bird};

use crate::cmd::RecordKind;

/// Inputs of the `decode` command.
pub struct Args {
	pub path: PathBuf,
	pub record: RecordKind,
	pub strict: bool,
	pub options: Option<PathBuf>,
	pub pretty: bool,
}

/// Decode `args.path` into the selected record and print the re-encoded record.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let options = resolve_options(args.options.as_ref(), args.strict)?;
	let text = read_input(&args.path)?;

	match args.record {
		RecordKind::Animal => decode_and_print::<Animal>(&text, &options, args.pretty)?,
		RecordKind::Bird => decode_and_print::<Bird>(&text, &options, args.pretty)?,
	}
	Ok(())
}

fn read_input(path: &Path) -> staticjson::archive::Result<String> {
	Ok(std::fs::read_to_string(path)?)
}

fn resolve_options(path: Option<&PathBuf>, strict: bool) -> staticjson::archive::Result<LoadOptions> {
	let mut options = match path {
		Some(path) => LoadOptions::from_json(&std::fs::read_to_string(path)?)?,
		None => LoadOptions::default(),
	};
	if strict {
		let strict = LoadOptions::strict();
		options.on_missing = strict.on_missing;
		options.on_mismatch = strict.on_mismatch;
	}
	Ok(options)
}

fn decode_and_print<R: Record + Default>(text: &str, options: &LoadOptions, pretty: bool) -> staticjson::archive::Result<()> {
	let mut record = R::default();
	let report = from_text_opts(&mut record, text, options)?;
	print_report(&report);

	let encoded = if pretty { to_text_pretty(&record)? } else { to_text(&record)? };
	println!("{encoded}");
	Ok(())
}

fn print_report(report: &LoadReport) {
	for issue in &report.skipped {
		eprintln!("skipped {issue}");
	}
}
