use crate::archive::input::load_record;
use crate::archive::output::save_record;
use crate::archive::{LoadCtx, Member, Record, RecordDef, Shape, TreeBuilder, TreeRead};

/// A type that can be converted as one registered field.
///
/// Implemented for the arithmetic scalars, `String`, `Option<T>`, sequence
/// containers, and every [`Record`]. Types outside that set do not implement
/// `Field`, so registering them is a compile error.
pub trait Field {
	/// Static classification of this type.
	fn shape() -> Shape;

	/// Apply a non-null `node` to `self`; returns whether a value was written.
	///
	/// Nodes that do not fit the shape are reported through `cx` and leave
	/// `self` unchanged.
	fn load<N: TreeRead>(&mut self, node: &N, cx: &mut LoadCtx) -> bool;

	/// Encode `self` into a fresh node, or `None` when no member should be emitted.
	fn save<B: TreeBuilder>(&self, builder: &mut B) -> Option<B::Node>;
}

impl<R: Record> Field for R {
	fn shape() -> Shape {
		<Member as RecordDef<R>>::shape()
	}

	fn load<N: TreeRead>(&mut self, node: &N, cx: &mut LoadCtx) -> bool {
		load_record::<Member, R, N>(self, node, cx)
	}

	fn save<B: TreeBuilder>(&self, builder: &mut B) -> Option<B::Node> {
		let mut node = builder.node();
		save_record::<Member, R, B>(self, &mut node, builder);
		Some(node)
	}
}

impl<T: Field + Default> Field for Option<T> {
	fn shape() -> Shape {
		Shape::Optional(Box::new(T::shape()))
	}

	fn load<N: TreeRead>(&mut self, node: &N, cx: &mut LoadCtx) -> bool {
		match self {
			Some(value) => value.load(node, cx),
			None => {
				let mut value = T::default();
				let applied = value.load(node, cx);
				if applied {
					*self = Some(value);
				}
				applied
			}
		}
	}

	fn save<B: TreeBuilder>(&self, builder: &mut B) -> Option<B::Node> {
		self.as_ref().and_then(|value| value.save(builder))
	}
}
