use std::collections::{LinkedList, VecDeque};

use crate::archive::input::load_record;
use crate::archive::output::save_record;
use crate::archive::sequence::{load_elements, save_elements};
use crate::archive::{LoadCtx, RecordDef, Shape, TreeBuilder, TreeRead};

/// Conversion of a `T` field through a converter type instead of `T`'s own
/// [`Field`](crate::archive::Field) impl.
///
/// Every [`RecordDef<T>`] converts `T`. The std wrappers lift a converter
/// element-wise: `Option<D>` converts `Option<T>`, and `Vec<D>`, `VecDeque<D>`,
/// and `LinkedList<D>` convert the matching container of `T`. This is what lets
/// [`Fields::bind_with`](crate::archive::Fields::bind_with) reach records that
/// only have an external definition when they sit inside a wrapper.
pub trait FieldAs<T> {
	/// Static classification of `T` under this converter.
	fn shape() -> Shape;

	/// Apply a non-null `node` to `value`; returns whether a value was written.
	fn load<N: TreeRead>(value: &mut T, node: &N, cx: &mut LoadCtx) -> bool;

	/// Encode `value` into a fresh node, or `None` when no member should be emitted.
	fn save<B: TreeBuilder>(value: &T, builder: &mut B) -> Option<B::Node>;
}

impl<D: RecordDef<T>, T> FieldAs<T> for D {
	fn shape() -> Shape {
		<D as RecordDef<T>>::shape()
	}

	fn load<N: TreeRead>(value: &mut T, node: &N, cx: &mut LoadCtx) -> bool {
		load_record::<D, T, N>(value, node, cx)
	}

	fn save<B: TreeBuilder>(value: &T, builder: &mut B) -> Option<B::Node> {
		let mut node = builder.node();
		save_record::<D, T, B>(value, &mut node, builder);
		Some(node)
	}
}

impl<C: FieldAs<T>, T: Default> FieldAs<Option<T>> for Option<C> {
	fn shape() -> Shape {
		Shape::Optional(Box::new(C::shape()))
	}

	fn load<N: TreeRead>(value: &mut Option<T>, node: &N, cx: &mut LoadCtx) -> bool {
		match value {
			Some(inner) => C::load(inner, node, cx),
			None => {
				let mut inner = T::default();
				let applied = C::load(&mut inner, node, cx);
				if applied {
					*value = Some(inner);
				}
				applied
			}
		}
	}

	fn save<B: TreeBuilder>(value: &Option<T>, builder: &mut B) -> Option<B::Node> {
		value.as_ref().and_then(|inner| C::save(inner, builder))
	}
}

macro_rules! container_as {
	($container:ident, $append:ident) => {
		impl<C: FieldAs<T>, T: Default> FieldAs<$container<T>> for $container<C> {
			fn shape() -> Shape {
				Shape::Sequence(Box::new(C::shape()))
			}

			fn load<N: TreeRead>(value: &mut $container<T>, node: &N, cx: &mut LoadCtx) -> bool {
				load_elements(node, cx, <Self as FieldAs<$container<T>>>::shape, |item, element, cx| C::load(item, element, cx), |item| value.$append(item))
			}

			fn save<B: TreeBuilder>(value: &$container<T>, builder: &mut B) -> Option<B::Node> {
				save_elements(value.iter(), builder, |item, builder| C::save(item, builder))
			}
		}
	};
}

container_as!(Vec, push);
container_as!(VecDeque, push_back);
container_as!(LinkedList, push_back);
