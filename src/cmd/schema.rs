use serde::Serialize;
use staticjson::archive::{ArchiveError, Schema};
use staticjson::samples::{Animal, Bird};

use crate::cmd::RecordKind;

#[derive(Serialize)]
struct JsonSchema<'a> {
	name: &'a str,
	fields: Vec<JsonField<'a>>,
}

#[derive(Serialize)]
struct JsonField<'a> {
	key: &'a str,
	shape: String,
	base: bool,
}

/// Print the registered fields of the selected record in conversion order.
pub fn run(record: RecordKind, json: bool) -> crate::cmd::Result<()> {
	let schema = match record {
		RecordKind::Animal => Schema::of::<Animal>(),
		RecordKind::Bird => Schema::of::<Bird>(),
	};

	if json {
		let out = JsonSchema {
			name: schema.name,
			fields: schema
				.fields
				.iter()
				.map(|field| JsonField {
					key: &field.key,
					shape: field.shape.to_string(),
					base: field.base,
				})
				.collect(),
		};
		println!("{}", serde_json::to_string_pretty(&out).map_err(ArchiveError::Encode)?);
		return Ok(());
	}

	println!("record: {}", schema.name);
	for field in &schema.fields {
		let marker = if field.base { " (base)" } else { "" };
		println!("  {}: {}{marker}", field.key, field.shape);
	}
	Ok(())
}
