use thiserror::Error;

use crate::archive::{NodeKind, Shape};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors produced while converting records to and from trees.
#[derive(Debug, Error)]
pub enum ArchiveError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text could not be parsed into a tree.
	#[error("malformed document: {0}")]
	MalformedDocument(#[source] serde_json::Error),
	/// Tree could not be serialized back to text.
	#[error("encode failed: {0}")]
	Encode(#[source] serde_json::Error),
	/// Top-level input node is not an object.
	#[error("expected an object at the document root, got {kind}")]
	NotAnObject {
		/// Kind of the root node that was supplied.
		kind: NodeKind,
	},
	/// Field issues raised under an `Error` policy.
	#[error("{} field issue(s), first: {}", .issues.len(), first_issue(.issues))]
	Rejected {
		/// Every issue that was not tolerated, in walk order.
		issues: Vec<Issue>,
	},
}

/// One per-field condition observed during input conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {kind}")]
pub struct Issue {
	/// Dotted key path of the field, with `[n]` for sequence elements.
	pub path: String,
	/// What went wrong at `path`.
	pub kind: IssueKind,
}

/// Classification of a per-field input condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IssueKind {
	/// Registered key absent from the object node.
	#[error("missing key")]
	MissingKey,
	/// Node kind does not fit the field's static shape.
	#[error("expected {expected}, found {found}")]
	ShapeMismatch {
		/// Shape the field was registered with.
		expected: Shape,
		/// Kind of the node that was present.
		found: NodeKind,
	},
	/// Numeric node is not representable in the field type.
	#[error("number out of range for {expected}")]
	OutOfRange {
		/// Shape the field was registered with.
		expected: Shape,
	},
	/// Nested records went deeper than the configured limit.
	#[error("record depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
}

fn first_issue(issues: &[Issue]) -> String {
	issues.first().map(ToString::to_string).unwrap_or_else(|| "none".to_owned())
}
