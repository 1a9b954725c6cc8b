use std::fmt;

/// Kind of a tree node as reported by the backing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// Null value.
	Null,
	/// Boolean `false`.
	False,
	/// Boolean `true`.
	True,
	/// Any numeric value.
	Number,
	/// Text value.
	String,
	/// Ordered sequence of nodes.
	Array,
	/// Keyed mapping of nodes.
	Object,
}

impl NodeKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::False | Self::True => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}

	/// Return whether this is one of the two boolean kinds.
	pub fn is_bool(self) -> bool {
		matches!(self, Self::False | Self::True)
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Read access to a materialized tree node.
///
/// Getters return `None` when the node does not hold a value of the requested
/// kind or the value does not fit the requested width.
pub trait TreeRead {
	/// Iterator over array children in document order.
	type Elements<'a>: Iterator<Item = &'a Self>
	where
		Self: 'a;

	/// Report the node kind.
	fn kind(&self) -> NodeKind;

	/// Look up a named member of an object node.
	fn member(&self, key: &str) -> Option<&Self>;

	/// Test object membership by key.
	fn has_member(&self, key: &str) -> bool {
		self.member(key).is_some()
	}

	/// Iterate children of an array node.
	fn elements(&self) -> Option<Self::Elements<'_>>;

	/// Read a boolean scalar.
	fn get_bool(&self) -> Option<bool>;

	/// Read a signed 64-bit integer.
	fn get_i64(&self) -> Option<i64>;

	/// Read an unsigned 64-bit integer.
	fn get_u64(&self) -> Option<u64>;

	/// Read a double-precision float. Integer nodes widen.
	fn get_f64(&self) -> Option<f64>;

	/// Borrow a text scalar.
	fn get_str(&self) -> Option<&str>;

	/// Read a signed 32-bit integer.
	fn get_i32(&self) -> Option<i32> {
		self.get_i64().and_then(|value| i32::try_from(value).ok())
	}

	/// Read an unsigned 32-bit integer.
	fn get_u32(&self) -> Option<u32> {
		self.get_u64().and_then(|value| u32::try_from(value).ok())
	}

	/// Read a single-precision float, rejecting values that overflow `f32`.
	fn get_f32(&self) -> Option<f32> {
		let wide = self.get_f64()?;
		let narrow = wide as f32;
		if narrow.is_finite() || !wide.is_finite() { Some(narrow) } else { None }
	}
}

/// Node-building context used by output conversion.
///
/// The context owns whatever allocation the backing document needs; every
/// mutator receives it explicitly so no conversion relies on shared state.
pub trait TreeBuilder {
	/// Node type produced by this context.
	type Node;

	/// Allocate a fresh null node.
	fn node(&mut self) -> Self::Node;

	/// Set a boolean scalar.
	fn set_bool(&mut self, node: &mut Self::Node, value: bool);

	/// Set a signed 64-bit integer.
	fn set_i64(&mut self, node: &mut Self::Node, value: i64);

	/// Set an unsigned 64-bit integer.
	fn set_u64(&mut self, node: &mut Self::Node, value: u64);

	/// Set a double-precision float.
	fn set_f64(&mut self, node: &mut Self::Node, value: f64);

	/// Set a text scalar.
	fn set_str(&mut self, node: &mut Self::Node, value: &str);

	/// Turn the node into an empty array unless it already is one.
	fn set_array(&mut self, node: &mut Self::Node);

	/// Turn the node into an empty object unless it already is one.
	fn set_object(&mut self, node: &mut Self::Node);

	/// Append a child to an array node.
	fn push(&mut self, array: &mut Self::Node, child: Self::Node);

	/// Attach a child to an object node under `key`.
	fn add_member(&mut self, object: &mut Self::Node, key: &str, child: Self::Node);

	/// Detach the member named `key` from an object node, if present.
	fn remove_member(&mut self, object: &mut Self::Node, key: &str);

	/// Set a signed 32-bit integer.
	fn set_i32(&mut self, node: &mut Self::Node, value: i32) {
		self.set_i64(node, i64::from(value));
	}

	/// Set an unsigned 32-bit integer.
	fn set_u32(&mut self, node: &mut Self::Node, value: u32) {
		self.set_u64(node, u64::from(value));
	}

	/// Set a single-precision float.
	fn set_f32(&mut self, node: &mut Self::Node, value: f32) {
		self.set_f64(node, f64::from(value));
	}
}
