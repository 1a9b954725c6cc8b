use crate::archive::{Field, LoadCtx, NodeKind, ScalarKind, Shape, TreeBuilder, TreeRead};

macro_rules! numeric_field {
	($ty:ty, $kind:ident, $get:ident, $set:ident) => {
		impl Field for $ty {
			fn shape() -> Shape {
				Shape::Scalar(ScalarKind::$kind)
			}

			fn load<N: TreeRead>(&mut self, node: &N, cx: &mut LoadCtx) -> bool {
				if node.kind() != NodeKind::Number {
					cx.mismatch(Self::shape(), node.kind());
					return false;
				}
				match node.$get() {
					Some(value) => {
						*self = value;
						true
					}
					None => {
						cx.out_of_range(Self::shape());
						false
					}
				}
			}

			fn save<B: TreeBuilder>(&self, builder: &mut B) -> Option<B::Node> {
				let mut node = builder.node();
				builder.$set(&mut node, *self);
				Some(node)
			}
		}
	};
}

numeric_field!(i32, I32, get_i32, set_i32);
numeric_field!(u32, U32, get_u32, set_u32);
numeric_field!(i64, I64, get_i64, set_i64);
numeric_field!(u64, U64, get_u64, set_u64);
numeric_field!(f32, F32, get_f32, set_f32);
numeric_field!(f64, F64, get_f64, set_f64);

impl Field for bool {
	fn shape() -> Shape {
		Shape::Scalar(ScalarKind::Bool)
	}

	fn load<N: TreeRead>(&mut self, node: &N, cx: &mut LoadCtx) -> bool {
		match node.get_bool() {
			Some(value) if node.kind().is_bool() => {
				*self = value;
				true
			}
			_ => {
				cx.mismatch(Self::shape(), node.kind());
				false
			}
		}
	}

	fn save<B: TreeBuilder>(&self, builder: &mut B) -> Option<B::Node> {
		let mut node = builder.node();
		builder.set_bool(&mut node, *self);
		Some(node)
	}
}

impl Field for String {
	fn shape() -> Shape {
		Shape::Text
	}

	fn load<N: TreeRead>(&mut self, node: &N, cx: &mut LoadCtx) -> bool {
		match node.get_str() {
			Some(value) if node.kind() == NodeKind::String => {
				self.clear();
				self.push_str(value);
				true
			}
			_ => {
				cx.mismatch(Self::shape(), node.kind());
				false
			}
		}
	}

	fn save<B: TreeBuilder>(&self, builder: &mut B) -> Option<B::Node> {
		let mut node = builder.node();
		builder.set_str(&mut node, self);
		Some(node)
	}
}

#[cfg(test)]
mod tests;
