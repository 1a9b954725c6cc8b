use crate::archive::{Field, FieldAs, Fields, Nvp, RecordDef, TreeBuilder, bind};

/// Output archive over one object node slot, encoding one record.
pub struct OutputArchive<'a, R, B: TreeBuilder> {
	record: &'a R,
	node: &'a mut B::Node,
	builder: &'a mut B,
}

impl<R, B: TreeBuilder> Fields<R> for OutputArchive<'_, R, B> {
	fn bind<T: Field>(&mut self, key: &str, get: impl Fn(&R) -> &T, _get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self {
		let nvp = bind(key, get(self.record));
		save_member(self.node, self.builder, nvp, |value, builder| value.save(builder));
		self
	}

	fn bind_with<D: FieldAs<T>, T>(&mut self, key: &str, get: impl Fn(&R) -> &T, _get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self {
		let nvp = bind(key, get(self.record));
		save_member(self.node, self.builder, nvp, |value, builder| <D as FieldAs<T>>::save(value, builder));
		self
	}
}

fn save_member<T, B: TreeBuilder>(object: &mut B::Node, builder: &mut B, nvp: Nvp<'_, &T>, save: impl FnOnce(&T, &mut B) -> Option<B::Node>) {
	match save(nvp.const_value(), builder) {
		Some(child) => builder.add_member(object, nvp.name(), child),
		None => builder.remove_member(object, nvp.name()),
	}
}

/// Encode `record` into `node` as an object through definition `D`.
///
/// Members already present on `node` are kept; registered keys overwrite them,
/// and a registered key whose field encodes to nothing is removed.
pub(crate) fn save_record<D: RecordDef<T>, T, B: TreeBuilder>(record: &T, node: &mut B::Node, builder: &mut B) {
	builder.set_object(node);
	let mut archive = OutputArchive { record, node, builder };
	<D as RecordDef<T>>::register(&mut archive);
}

/// Encode `record` into an existing node slot through definition `D`.
///
/// Unregistered members of a reused node survive; registered ones reflect
/// `record`.
pub fn save_with<D: RecordDef<T>, T, B: TreeBuilder>(record: &T, node: &mut B::Node, builder: &mut B) {
	save_record::<D, T, B>(record, node, builder);
}

#[cfg(test)]
mod tests;
