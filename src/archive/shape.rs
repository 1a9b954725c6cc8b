use std::fmt;

/// Width and signedness of an arithmetic scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// `bool`.
	Bool,
	/// `i32`.
	I32,
	/// `u32`.
	U32,
	/// `i64`.
	I64,
	/// `u64`.
	U64,
	/// `f32`.
	F32,
	/// `f64`.
	F64,
}

impl ScalarKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::I32 => "i32",
			Self::U32 => "u32",
			Self::I64 => "i64",
			Self::U64 => "u64",
			Self::F32 => "f32",
			Self::F64 => "f64",
		}
	}
}

/// Serialization shape of a field type.
///
/// Every [`Field`](crate::archive::Field) reports exactly one shape; the shape
/// depends only on the static type, never on runtime content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
	/// Arithmetic scalar.
	Scalar(ScalarKind),
	/// Text scalar.
	Text,
	/// Optional wrapper around another shape.
	Optional(Box<Shape>),
	/// Ordered homogeneous sequence.
	Sequence(Box<Shape>),
	/// Record with a type-bound registration.
	Record(&'static str),
	/// Record converted through an external definition.
	External(&'static str),
}

impl Shape {
	/// Return whether this shape converts through an object node.
	pub fn is_record(&self) -> bool {
		matches!(self, Self::Record(_) | Self::External(_))
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Scalar(kind) => f.write_str(kind.as_str()),
			Self::Text => f.write_str("string"),
			Self::Optional(inner) => write!(f, "optional<{inner}>"),
			Self::Sequence(inner) => write!(f, "sequence<{inner}>"),
			Self::Record(name) => write!(f, "record {name}"),
			Self::External(name) => write!(f, "external record {name}"),
		}
	}
}

/// Type name without its module path, keeping generic arguments.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
	let full = std::any::type_name::<T>();
	let head_end = full.find('<').unwrap_or(full.len());
	let start = full[..head_end].rfind("::").map_or(0, |at| at + 2);
	&full[start..]
}

#[cfg(test)]
mod tests {
	use super::short_type_name;
	use crate::archive::{ScalarKind, Shape};

	struct Probe;

	#[test]
	fn short_type_name_drops_module_path() {
		assert_eq!(short_type_name::<Probe>(), "Probe");
		assert_eq!(short_type_name::<u32>(), "u32");
	}

	#[test]
	fn nested_shapes_render_inside_out() {
		let shape = Shape::Optional(Box::new(Shape::Sequence(Box::new(Shape::Scalar(ScalarKind::I32)))));
		assert_eq!(shape.to_string(), "optional<sequence<i32>>");
		assert!(!shape.is_record());
		assert!(Shape::External("Human").is_record());
	}
}
