use std::collections::{LinkedList, VecDeque};

use crate::archive::{Field, LoadCtx, NodeKind, Shape, TreeBuilder, TreeRead};

/// Ordered, appendable, homogeneous container contract.
///
/// Implement this for a custom container and then invoke
/// [`sequence_field!`](crate::sequence_field) to make it a [`Field`].
pub trait Sequence {
	/// Element type; `Default` seeds each decoded element.
	type Item: Field + Default;

	/// Append one element at the end.
	fn append(&mut self, item: Self::Item);

	/// Iterate elements front to back.
	fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

/// Shape of a sequence of `S::Item`.
pub fn sequence_shape<S: Sequence>() -> Shape {
	Shape::Sequence(Box::new(<S::Item as Field>::shape()))
}

/// Append every element of an array node to `seq`.
///
/// Null elements append `Item::default()`. Elements that do not fit the item
/// shape are reported and skipped.
pub fn load_sequence<S: Sequence, N: TreeRead>(seq: &mut S, node: &N, cx: &mut LoadCtx) -> bool {
	load_elements(node, cx, sequence_shape::<S>, |item: &mut S::Item, element, cx| item.load(element, cx), |item| seq.append(item))
}

/// Encode `seq` as an array node in iteration order.
///
/// Elements that encode to nothing (absent optionals) become null nodes so
/// positions are preserved.
pub fn save_sequence<S: Sequence, B: TreeBuilder>(seq: &S, builder: &mut B) -> Option<B::Node> {
	save_elements(seq.items(), builder, |item, builder| item.save(builder))
}

pub(crate) fn load_elements<T: Default, N: TreeRead>(
	node: &N,
	cx: &mut LoadCtx,
	expected: impl FnOnce() -> Shape,
	mut load: impl FnMut(&mut T, &N, &mut LoadCtx) -> bool,
	mut append: impl FnMut(T),
) -> bool {
	let Some(elements) = node.elements() else {
		cx.mismatch(expected(), node.kind());
		return false;
	};

	for (index, element) in elements.enumerate() {
		cx.enter_index(index);
		let mut item = T::default();
		if element.kind() == NodeKind::Null || load(&mut item, element, cx) {
			append(item);
		}
		cx.leave();
	}
	true
}

pub(crate) fn save_elements<'a, T: 'a, B: TreeBuilder>(
	items: impl Iterator<Item = &'a T>,
	builder: &mut B,
	mut save: impl FnMut(&T, &mut B) -> Option<B::Node>,
) -> Option<B::Node> {
	let mut array = builder.node();
	builder.set_array(&mut array);
	for item in items {
		let child = match save(item, builder) {
			Some(child) => child,
			None => builder.node(),
		};
		builder.push(&mut array, child);
	}
	Some(array)
}

/// Implement [`Field`] for a type that implements [`Sequence`].
///
/// ```ignore
/// sequence_field!(for Ring);
/// sequence_field!(impl<T> for Stack<T>);
/// ```
#[macro_export]
macro_rules! sequence_field {
	(for $ty:ty) => {
		$crate::sequence_field!(impl<> for $ty);
	};
	(impl<$($gen:ident),*> for $ty:ty) => {
		impl<$($gen),*> $crate::archive::Field for $ty
		where
			$ty: $crate::archive::Sequence,
		{
			fn shape() -> $crate::archive::Shape {
				$crate::archive::sequence_shape::<Self>()
			}

			fn load<N: $crate::archive::TreeRead>(&mut self, node: &N, cx: &mut $crate::archive::LoadCtx) -> bool {
				$crate::archive::load_sequence(self, node, cx)
			}

			fn save<B: $crate::archive::TreeBuilder>(&self, builder: &mut B) -> ::core::option::Option<B::Node> {
				$crate::archive::save_sequence(self, builder)
			}
		}
	};
}

impl<T: Field + Default> Sequence for Vec<T> {
	type Item = T;

	fn append(&mut self, item: T) {
		self.push(item);
	}

	fn items(&self) -> impl Iterator<Item = &T> {
		self.iter()
	}
}

impl<T: Field + Default> Sequence for VecDeque<T> {
	type Item = T;

	fn append(&mut self, item: T) {
		self.push_back(item);
	}

	fn items(&self) -> impl Iterator<Item = &T> {
		self.iter()
	}
}

impl<T: Field + Default> Sequence for LinkedList<T> {
	type Item = T;

	fn append(&mut self, item: T) {
		self.push_back(item);
	}

	fn items(&self) -> impl Iterator<Item = &T> {
		self.iter()
	}
}

sequence_field!(impl<T> for Vec<T>);
sequence_field!(impl<T> for VecDeque<T>);
sequence_field!(impl<T> for LinkedList<T>);
