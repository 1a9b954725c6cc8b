use staticjson::archive::ArchiveError;
use thiserror::Error;

/// Sample round-trip command.
pub mod demo;
/// File decode command.
pub mod decode;
/// Registered-field listing command.
pub mod schema;

/// Command result type.
pub type Result<T> = std::result::Result<T, CmdError>;

/// Failures surfaced by subcommands.
#[derive(Debug, Error)]
pub enum CmdError {
	#[error(transparent)]
	Archive(#[from] ArchiveError),
	#[error("{record} differs after round trip")]
	RoundTrip { record: &'static str },
}

/// Built-in record selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
	Animal,
	Bird,
}
