use serde::Deserialize;

use crate::archive::{ArchiveError, Result};

/// Reaction to a per-field input condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
	/// Leave the field untouched and record the condition in the report.
	#[default]
	Skip,
	/// Fail the conversion once the walk completes.
	Error,
}

/// Runtime policies and limits for input conversion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
	/// Action when a registered key is absent from its object node.
	pub on_missing: Policy,
	/// Action when a present node does not fit the field's shape.
	pub on_mismatch: Policy,
	/// Maximum nested record depth, counting the root record as one.
	pub max_depth: u32,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			on_missing: Policy::Skip,
			on_mismatch: Policy::Skip,
			max_depth: 128,
		}
	}
}

impl LoadOptions {
	/// Preset that rejects missing keys and mismatched nodes.
	pub fn strict() -> Self {
		Self {
			on_missing: Policy::Error,
			on_mismatch: Policy::Error,
			..Self::default()
		}
	}

	/// Parse options from a JSON document; absent keys keep their defaults.
	pub fn from_json(text: &str) -> Result<Self> {
		serde_json::from_str(text).map_err(ArchiveError::MalformedDocument)
	}
}
