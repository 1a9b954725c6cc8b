use serde_json::{Map, Value};

use crate::archive::shape::short_type_name;
use crate::archive::{
	ArchiveError, JsonBuilder, LoadOptions, LoadReport, Member, Record, Result, TreeBuilder, TreeRead, load_with, save_with,
};

/// Encode `record` into `node` using a fresh [`JsonBuilder`].
pub fn to_tree<R: Record>(record: &R, node: &mut Value) {
	let mut builder = JsonBuilder::new();
	to_tree_in(record, node, &mut builder);
	log::trace!("encoded {} with {} nodes", short_type_name::<R>(), builder.allocated());
}

/// Encode `record` into `node`, allocating through `builder`.
pub fn to_tree_in<R: Record, B: TreeBuilder>(record: &R, node: &mut B::Node, builder: &mut B) {
	save_with::<Member, R, B>(record, node, builder);
}

/// Populate `record` from an object node with default options.
pub fn from_tree<R: Record, N: TreeRead>(record: &mut R, node: &N) -> Result<LoadReport> {
	from_tree_opts(record, node, &LoadOptions::default())
}

/// Populate `record` from an object node.
pub fn from_tree_opts<R: Record, N: TreeRead>(record: &mut R, node: &N, options: &LoadOptions) -> Result<LoadReport> {
	let report = load_with::<Member, R, N>(record, node, options)?;
	log::trace!("decoded {} with {} skipped field(s)", short_type_name::<R>(), report.skipped.len());
	Ok(report)
}

/// Parse JSON text and populate `record` with default options.
pub fn from_text<R: Record>(record: &mut R, text: &str) -> Result<LoadReport> {
	from_text_opts(record, text, &LoadOptions::default())
}

/// Parse JSON text and populate `record`.
///
/// Parsing completes before any field is touched, so malformed text leaves the
/// record unchanged.
pub fn from_text_opts<R: Record>(record: &mut R, text: &str, options: &LoadOptions) -> Result<LoadReport> {
	let document: Value = serde_json::from_str(text).map_err(ArchiveError::MalformedDocument)?;
	from_tree_opts(record, &document, options)
}

/// Encode `record` as compact JSON text.
pub fn to_text<R: Record>(record: &R) -> Result<String> {
	let document = encode_document(record);
	serde_json::to_string(&document).map_err(ArchiveError::Encode)
}

/// Encode `record` as indented JSON text.
pub fn to_text_pretty<R: Record>(record: &R) -> Result<String> {
	let document = encode_document(record);
	serde_json::to_string_pretty(&document).map_err(ArchiveError::Encode)
}

fn encode_document<R: Record>(record: &R) -> Value {
	let mut document = Value::Object(Map::new());
	to_tree(record, &mut document);
	document
}
