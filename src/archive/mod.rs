mod base;
mod convert;
mod entry;
mod error;
mod field;
mod field_as;
mod input;
mod json;
mod nvp;
mod options;
mod output;
mod scalar;
mod schema;
mod sequence;
mod shape;
#[cfg(test)]
mod test_support;
mod tree;

/// Base-record composition adapter.
pub use base::{Inherits, base_object, base_object_mut};
/// Record-level conversion and text entry points.
pub use convert::{from_text, from_text_opts, from_tree, from_tree_opts, to_text, to_text_pretty, to_tree, to_tree_in};
/// Record registration and serialization entry resolution.
pub use entry::{Fields, Member, Record, RecordDef};
/// Error and result aliases.
pub use error::{ArchiveError, Issue, IssueKind, Result};
/// Field capability trait.
pub use field::Field;
/// Converter trait for fields that go through an external definition.
pub use field_as::FieldAs;
/// Input archive, its context, and the external-definition entry point.
pub use input::{InputArchive, LoadCtx, LoadReport, load_with};
/// `serde_json` tree-building context.
pub use json::JsonBuilder;
/// Name-value binding.
pub use nvp::{Nvp, bind};
/// Input policies and limits.
pub use options::{LoadOptions, Policy};
/// Output archive and the external-definition entry point.
pub use output::{OutputArchive, save_with};
/// Static schema introspection.
pub use schema::{FieldInfo, Schema};
/// Sequence capability trait and helpers used by `sequence_field!`.
pub use sequence::{Sequence, load_sequence, save_sequence, sequence_shape};
/// Field shape classification.
pub use shape::{ScalarKind, Shape};
/// Tree collaborator interface.
pub use tree::{NodeKind, TreeBuilder, TreeRead};
